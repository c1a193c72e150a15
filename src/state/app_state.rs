//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. The route
//! table is passed in rather than owned, so state stays plain data.

use crate::model::{compute_links, NavLink, NavLinkKind, Page};
use crate::routing::RouteTable;
use crate::state::{FaultBoundary, LocationInput, NotificationController};
use std::time::{Duration, Instant};
use tracing::info;

/// Location shown when nothing else was requested.
pub const HOME: &str = "/";

// ===== AppState =====

/// Application state.
///
/// - **Location**: the current URL (path plus query) and the back stack.
/// - **Main boundary**: the failure domain around the routed producer.
///   It is reset on every navigation and on reload, the equivalent of
///   remounting the routed view.
/// - **Notification**: single-slot snackbar.
/// - **Location input**: whether the location bar is being edited.
#[derive(Debug, Clone)]
pub struct AppState {
    location: String,
    history: Vec<String>,
    route_name: Option<&'static str>,
    page: Page,

    /// Failure domain around the routed view.
    pub boundary: FaultBoundary,

    /// Transient message slot.
    pub notification: NotificationController,

    /// Location bar editing state.
    pub location_input: LocationInput,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::state::notification::AUTO_DISMISS)
    }
}

impl AppState {
    /// Fresh state at [`HOME`], showing the loading page until first render.
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            location: HOME.to_string(),
            history: Vec::new(),
            route_name: None,
            page: Page::Loading,
            boundary: FaultBoundary::new("main"),
            notification: NotificationController::new(notification_duration),
            location_input: LocationInput::Inactive,
        }
    }

    /// Current location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Name of the route that produced the current page, once rendered.
    pub fn route_name(&self) -> Option<&'static str> {
        self.route_name
    }

    /// Page currently displayed.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Number of locations on the back stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Resolve the current location and render it inside the main boundary.
    pub fn render(&mut self, routes: &RouteTable) {
        let resolved = routes.resolve(&self.location);
        self.route_name = Some(resolved.name);
        self.boundary.set_override(resolved.fallback.cloned());
        self.page = self.boundary.render(|| resolved.produce());
    }

    /// Go to `location`, remounting the main view.
    pub fn navigate(&mut self, routes: &RouteTable, location: impl Into<String>) {
        let location = location.into();
        info!(from = %self.location, to = %location, "navigate");
        if self.route_name.is_some() {
            let previous = std::mem::replace(&mut self.location, location);
            self.history.push(previous);
        } else {
            self.location = location;
        }
        self.boundary.reset();
        self.render(routes);
    }

    /// Return to the previous location. Returns false when there is none.
    pub fn go_back(&mut self, routes: &RouteTable, now: Instant) -> bool {
        let Some(previous) = self.history.pop() else {
            self.notification.open("No earlier page", None, now);
            return false;
        };
        info!(from = %self.location, to = %previous, "back");
        self.location = previous;
        self.boundary.reset();
        self.render(routes);
        true
    }

    /// Remount the current view, clearing a faulted boundary.
    pub fn reload(&mut self, routes: &RouteTable, now: Instant) {
        self.boundary.reset();
        self.render(routes);
        self.notification.open("Reloaded", None, now);
    }

    /// Pagination bar of the current page; empty when it has none.
    pub fn nav_links(&self) -> Vec<NavLink> {
        match &self.page {
            Page::Content(content) => content
                .pagination
                .as_ref()
                .map(|spec| compute_links(&spec.descriptor, &spec.base_url))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Follow the first pagination link whose kind is in `preferred`.
    ///
    /// Kinds are tried in the given order. When none is present a
    /// notification says so and false is returned.
    pub fn follow_link(
        &mut self,
        routes: &RouteTable,
        preferred: &[NavLinkKind],
        now: Instant,
    ) -> bool {
        let links = self.nav_links();
        let target = preferred.iter().find_map(|kind| {
            links
                .iter()
                .find(|link| link.kind == *kind)
                .and_then(|link| link.url.clone())
        });

        match target {
            Some(url) => {
                self.navigate(routes, url);
                true
            }
            None => {
                let message = if links.is_empty() {
                    "This page has no pagination"
                } else {
                    "No such page"
                };
                self.notification.open(message, None, now);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
