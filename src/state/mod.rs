//! UI state machines (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod fault_boundary;
pub mod location_input;
pub mod notification;

// Re-export for convenience
pub use app_state::{AppState, HOME};
pub use fault_boundary::{
    panic_is_contained, with_fault_boundary, BoundaryEvent, BoundaryState, Bounded, FaultBoundary,
};
pub use location_input::LocationInput;
pub use notification::{
    Anchor, Horizontal, NotificationController, NotificationEvent, NotificationState, Transition,
    Vertical,
};
