//! Pagination window computation (pure).
//!
//! Turns a [`PageDescriptor`] into the ordered list of [`NavLink`]s shown
//! under a listing: first/last anchors, immediate neighbours of the current
//! page, and `···` markers standing in for the hidden pages between them.

use thiserror::Error;

/// Errors from constructing a [`PageDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page numbers start at 1.
    #[error("current page must be at least 1")]
    ZeroPage,

    /// A page must hold at least one item.
    #[error("page size must be greater than 0")]
    ZeroPageSize,
}

// ===== PageDescriptor =====

/// Position within a paginated listing.
///
/// Smart constructor enforces `current_page >= 1` and `page_size > 0`;
/// unsigned fields rule out negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    current_page: u32,
    page_size: u32,
    total_items: u64,
}

impl PageDescriptor {
    /// Build a descriptor, rejecting page 0 and empty pages.
    pub fn new(current_page: u32, page_size: u32, total_items: u64) -> Result<Self, PaginationError> {
        if current_page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            current_page,
            page_size,
            total_items,
        })
    }

    /// The page being viewed (1-based).
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Items per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// `ceil(total_items / page_size)`, never less than 1.
    pub fn last_page(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

// ===== NavLink =====

/// Role of an entry in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLinkKind {
    /// Link to page 1.
    First,
    /// Link to the page before the current one.
    Prev,
    /// The current page; shown but not a link.
    Current,
    /// Link to the page after the current one.
    Next,
    /// Link to the final page.
    Last,
    /// Marker for a run of hidden pages.
    Ellipsis,
}

/// One entry in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Display text (`"4"`, `"···"`).
    pub label: String,
    /// Page navigated to; `None` for `Current` and `Ellipsis`.
    pub target_page: Option<u32>,
    /// URL navigated to; `None` exactly when `target_page` is `None`.
    pub url: Option<String>,
    /// Role of this entry.
    pub kind: NavLinkKind,
}

/// Label used for ellipsis markers.
pub const ELLIPSIS_LABEL: &str = "···";

impl NavLink {
    fn link(kind: NavLinkKind, page: u32, url: String) -> Self {
        Self {
            label: page.to_string(),
            target_page: Some(page),
            url: Some(url),
            kind,
        }
    }

    fn current(page: u32) -> Self {
        Self {
            label: page.to_string(),
            target_page: None,
            url: None,
            kind: NavLinkKind::Current,
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: ELLIPSIS_LABEL.to_string(),
            target_page: None,
            url: None,
            kind: NavLinkKind::Ellipsis,
        }
    }

    /// Whether this entry navigates somewhere.
    pub fn is_link(&self) -> bool {
        self.target_page.is_some()
    }
}

// ===== Computation =====

/// Compute the pagination bar for `descriptor`, with links rooted at `base_url`.
///
/// Returns an empty list when there is nothing to paginate, which tells the
/// caller not to render the bar at all. Boundaries are strict comparisons
/// against the current page so page 1 and the last page never link to
/// themselves.
///
/// The link to page 1 points at `base_url` itself; every other link carries
/// an explicit `page` parameter (see [`build_page_url`]).
pub fn compute_links(descriptor: &PageDescriptor, base_url: &str) -> Vec<NavLink> {
    if descriptor.total_items == 0 {
        return Vec::new();
    }

    let page = descriptor.current_page;
    let last = descriptor.last_page();
    let mut links = Vec::with_capacity(7);

    if page != 1 {
        links.push(NavLink::link(NavLinkKind::First, 1, base_url.to_string()));
    }
    if page > 3 {
        links.push(NavLink::ellipsis());
    }
    if page > 2 {
        let prev = page - 1;
        links.push(NavLink::link(NavLinkKind::Prev, prev, build_page_url(base_url, prev)));
    }

    links.push(NavLink::current(page));

    // `last - 1` and `last - 2` are written as additions to stay in range for small `last`.
    if page.saturating_add(1) < last {
        let next = page + 1;
        links.push(NavLink::link(NavLinkKind::Next, next, build_page_url(base_url, next)));
    }
    if page.saturating_add(2) < last {
        links.push(NavLink::ellipsis());
    }
    if page != last {
        links.push(NavLink::link(NavLinkKind::Last, last, build_page_url(base_url, last)));
    }

    links
}

/// Append `page=<page>` to `base_url`.
///
/// Uses `&` when `base_url` already has a query string, `?` otherwise.
///
/// An existing `page` parameter is left in place, so
/// `build_page_url("/x?page=2", 3)` yields `"/x?page=2&page=3"`. Callers
/// should pass the listing URL without its page parameter.
pub fn build_page_url(base_url: &str, page: u32) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}page={page}")
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
