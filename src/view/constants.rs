//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the location bar in lines (border + content).
pub const LOCATION_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for the route name and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the pagination bar below page content.
pub const PAGINATION_HEIGHT: u16 = 1;

/// Height of the snackbar (border + one line of text).
pub const SNACKBAR_HEIGHT: u16 = 3;

/// Horizontal padding inside the snackbar, per side.
pub const SNACKBAR_PADDING: u16 = 2;

/// Maximum width of the page column; wider terminals center it.
pub const FRAME_MAX_WIDTH: u16 = 100;

/// Height of a framed message panel.
pub const FRAMED_MESSAGE_HEIGHT: u16 = 7;
