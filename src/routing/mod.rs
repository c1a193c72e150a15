//! Route dispatch (pure).
//!
//! A [`RouteTable`] is an ordered list of path templates, each bound to a
//! [`ContentProducer`]. Resolution tries entries in declaration order and
//! falls through to a terminal catch-all, so every location resolves.

mod pattern;
mod table;

pub use pattern::{Capture, PathPattern};
pub use table::{ContentProducer, Resolved, RouteEntry, RouteMatch, RouteTable};

use thiserror::Error;

/// Route table declaration errors. These are programming mistakes and are
/// fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A path template could not be parsed.
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending template.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The table has no catch-all entry.
    #[error("Route table has no catch-all entry")]
    MissingCatchAll,

    /// A catch-all entry is followed by further entries.
    #[error("Catch-all route {0:?} must be declared last")]
    CatchAllNotLast(&'static str),
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
