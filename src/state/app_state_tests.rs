//! Tests for AppState navigation, pagination following and notifications.

use super::*;
use crate::model::{Content, ContentError};
use crate::pages::{names, site_routes, Catalog};
use crate::routing::{RouteEntry, RouteMatch};
use std::rc::Rc;

fn routes() -> RouteTable {
    site_routes(Rc::new(Catalog::sample()), 10).unwrap()
}

fn started(routes: &RouteTable, location: &str) -> AppState {
    let mut state = AppState::default();
    state.navigate(routes, location);
    state
}

#[test]
fn new_state_is_loading_at_home() {
    let state = AppState::default();
    assert_eq!(state.location(), HOME);
    assert_eq!(state.page(), &Page::Loading);
    assert_eq!(state.route_name(), None);
}

#[test]
fn first_navigation_does_not_push_history() {
    let routes = routes();
    let state = started(&routes, "/article/");
    assert_eq!(state.history_len(), 0);
    assert_eq!(state.route_name(), Some(names::NEW_ARTICLES));
    assert!(matches!(state.page(), Page::Content(_)));
}

#[test]
fn unknown_location_renders_not_found_page() {
    let routes = routes();
    let state = started(&routes, "/nope/");
    assert_eq!(state.page(), &Page::NotFound);
    assert!(state.boundary.state().is_faulted());
}

#[test]
fn notices_without_login_render_login_note() {
    let routes = routes();
    let state = started(&routes, "/account/notice/");
    assert_eq!(state.page(), &Page::LoginRequired);
}

#[test]
fn navigation_remounts_faulted_boundary() {
    let routes = routes();
    let mut state = started(&routes, "/nope/");
    state.navigate(&routes, "/article/3/");
    assert!(!state.boundary.state().is_faulted());
    assert!(matches!(state.page(), Page::Content(c) if c.title == "Article 3"));
}

#[test]
fn go_back_returns_to_previous_location() {
    let routes = routes();
    let mut state = started(&routes, "/");
    state.navigate(&routes, "/article/5/");
    assert!(state.go_back(&routes, Instant::now()));
    assert_eq!(state.location(), "/");
    assert_eq!(state.history_len(), 0);
}

#[test]
fn go_back_with_empty_history_notifies() {
    let routes = routes();
    let mut state = started(&routes, "/");
    assert!(!state.go_back(&routes, Instant::now()));
    assert!(state.notification.state().is_open);
    assert_eq!(state.notification.state().text, "No earlier page");
}

#[test]
fn next_page_follows_pagination_link() {
    let routes = routes();
    let mut state = started(&routes, "/article/");
    assert!(state.follow_link(&routes, &[NavLinkKind::Next], Instant::now()));
    assert_eq!(state.location(), "/article/?page=2");
}

#[test]
fn prev_falls_back_to_first_link() {
    let routes = routes();
    let mut state = started(&routes, "/article/?page=2");
    assert!(state.follow_link(
        &routes,
        &[NavLinkKind::Prev, NavLinkKind::First],
        Instant::now()
    ));
    assert_eq!(state.location(), "/article/");
}

#[test]
fn next_on_last_page_notifies() {
    let routes = routes();
    let mut state = started(&routes, "/article/?page=6");
    assert!(!state.follow_link(&routes, &[NavLinkKind::Next, NavLinkKind::Last], Instant::now()));
    assert_eq!(state.location(), "/article/?page=6");
    assert_eq!(state.notification.state().text, "No such page");
}

#[test]
fn last_link_jumps_to_final_page() {
    let routes = routes();
    let mut state = started(&routes, "/");
    state.follow_link(&routes, &[NavLinkKind::Last], Instant::now());
    assert_eq!(state.location(), "/?page=6");
}

#[test]
fn page_without_pagination_notifies() {
    let routes = routes();
    let mut state = started(&routes, "/article/1/");
    assert!(state.nav_links().is_empty());
    assert!(!state.follow_link(&routes, &[NavLinkKind::Next], Instant::now()));
    assert_eq!(state.notification.state().text, "This page has no pagination");
}

#[test]
fn reload_clears_fault_and_notifies() {
    use std::cell::Cell;

    thread_local! {
        static FAIL: Cell<bool> = const { Cell::new(true) };
    }

    let flaky = |_: &RouteMatch| -> Result<Content, ContentError> {
        if FAIL.with(Cell::get) {
            Err(ContentError::Failed("backend unavailable".into()))
        } else {
            Ok(Content::new("recovered"))
        }
    };
    let routes = RouteTable::new(vec![
        RouteEntry::exact("flaky", "/", flaky).unwrap(),
        RouteEntry::catch_all("not_found", |_: &RouteMatch| -> Result<Content, ContentError> {
            Err(ContentError::not_found("x"))
        }),
    ])
    .unwrap();

    let mut state = started(&routes, "/");
    assert_eq!(state.page(), &Page::Error);

    // A plain re-render keeps the fallback.
    FAIL.with(|f| f.set(false));
    state.render(&routes);
    assert_eq!(state.page(), &Page::Error);

    state.reload(&routes, Instant::now());
    assert_eq!(state.page(), &Page::Content(Content::new("recovered")));
    assert_eq!(state.notification.state().text, "Reloaded");
}
