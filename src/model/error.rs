//! Error types for fossview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - startup and shell failures; fatal
//!   - [`RouteError`](crate::routing::RouteError) - malformed route table
//!   - [`ConfigError`](crate::config::ConfigError) - unreadable config file
//!   - [`LoggingError`](crate::logging::LoggingError) - subscriber setup
//!   - `std::io::Error` - terminal failures
//! - [`ContentError`] - failures raised by content producers. Never fatal:
//!   caught by the nearest fault boundary and replaced by a fallback view.
//!
//! [`classify`] folds any captured failure into an [`ErrorKind`].

use std::any::Any;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The route table was declared incorrectly. Configuration-time defect.
    #[error("Invalid route table: {0}")]
    Route(#[from] crate::routing::RouteError),

    /// The configuration file exists but could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure raised by a content producer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Required route or query parameter was missing or unparsable.
    #[error("Bad parameter {name}: {value:?}")]
    BadParameter {
        /// Parameter name.
        name: String,
        /// Raw value received.
        value: String,
    },

    /// Any other failure.
    #[error("{0}")]
    Failed(String),
}

impl ContentError {
    /// Shorthand for [`ContentError::NotFound`].
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

// ===== Classification =====

/// Coarse category of a captured failure; selects the fallback view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested resource or route is absent.
    NotFound,
    /// Anything else.
    Generic,
}

/// Classify a content error.
pub fn classify_error(error: &ContentError) -> ErrorKind {
    match error {
        ContentError::NotFound(_) => ErrorKind::NotFound,
        ContentError::BadParameter { .. } | ContentError::Failed(_) => ErrorKind::Generic,
    }
}

/// Classify an arbitrary captured value, such as a panic payload.
///
/// Only a [`ContentError::NotFound`] (bare or boxed) is `NotFound`; every
/// other value, of any type, is `Generic`. Never panics.
pub fn classify(value: &(dyn Any + Send)) -> ErrorKind {
    if let Some(error) = value.downcast_ref::<ContentError>() {
        return classify_error(error);
    }
    if let Some(error) = value.downcast_ref::<Box<ContentError>>() {
        return classify_error(error);
    }
    ErrorKind::Generic
}

// ===== ErrorRecord =====

/// What a fault boundary captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultCause {
    /// The producer returned an error.
    Error(ContentError),
    /// The producer panicked; holds the extracted panic message.
    Panic(String),
}

impl std::fmt::Display for FaultCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(e) => write!(f, "{e}"),
            Self::Panic(msg) => write!(f, "panic: {msg}"),
        }
    }
}

/// A classified failure held by a faulted boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Classification driving fallback selection.
    pub kind: ErrorKind,
    /// The failure as captured.
    pub original: FaultCause,
}

impl ErrorRecord {
    /// Record a returned content error.
    pub fn from_error(error: ContentError) -> Self {
        Self {
            kind: classify_error(&error),
            original: FaultCause::Error(error),
        }
    }

    /// Record a panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self {
            kind: classify(payload.as_ref()),
            original: FaultCause::Panic(panic_message(payload.as_ref())),
        }
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(e) = payload.downcast_ref::<ContentError>() {
        e.to_string()
    } else {
        "unknown panic".to_string()
    }
}
