//! fossview
//!
//! Terminal client shell for the Fossensite blog: pagination links, routed
//! pages rendered behind fault boundaries, and transient notifications.
//!
//! Pure core (`model`, `routing`, `state`) with an impure shell (`view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod pages;
pub mod routing;
pub mod state;
pub mod view;
