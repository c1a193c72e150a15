//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod content;
pub mod error;
pub mod key_action;
pub mod pagination;

// Re-export for convenience
pub use content::{Author, Content, Page, PaginationSpec};
pub use error::{
    classify, classify_error, panic_message, AppError, ContentError, ErrorKind, ErrorRecord,
    FaultCause,
};
pub use key_action::KeyAction;
pub use pagination::{
    build_page_url, compute_links, NavLink, NavLinkKind, PageDescriptor, PaginationError,
};
