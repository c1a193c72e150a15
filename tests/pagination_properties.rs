//! Property-based tests for the pagination window and page URLs.
//!
//! Tests validate:
//! 1. No links at all for an empty listing
//! 2. Exactly one CURRENT link, carrying the current page
//! 3. At most two ellipses, never adjacent
//! 4. FIRST absent on page 1, LAST absent on the last page
//! 5. Link targets are in range and ascending
//! 6. Page URLs use the right separator

use fossview::model::{build_page_url, compute_links, NavLinkKind, PageDescriptor};
use proptest::prelude::*;

fn descriptor() -> impl Strategy<Value = PageDescriptor> {
    (1u32..200, 1u32..50, 0u64..5_000)
        .prop_map(|(page, size, total)| PageDescriptor::new(page, size, total).unwrap())
}

fn in_range_descriptor() -> impl Strategy<Value = PageDescriptor> {
    (1u32..50, 1u64..5_000).prop_flat_map(|(size, total)| {
        let last = total.div_ceil(u64::from(size)) as u32;
        (1u32..=last).prop_map(move |page| PageDescriptor::new(page, size, total).unwrap())
    })
}

// ===== Property 1: empty listing =====

proptest! {
    #[test]
    fn empty_listing_has_no_links(page in 1u32..100, size in 1u32..50) {
        let d = PageDescriptor::new(page, size, 0).unwrap();
        prop_assert!(compute_links(&d, "/article/").is_empty());
    }
}

// ===== Properties 2-4: shape of the window =====

proptest! {
    #[test]
    fn exactly_one_current_link(d in descriptor()) {
        prop_assume!(d.total_items() > 0);
        let links = compute_links(&d, "/");
        let current: Vec<_> = links.iter().filter(|l| l.kind == NavLinkKind::Current).collect();
        prop_assert_eq!(current.len(), 1);
        prop_assert_eq!(current[0].label.clone(), d.current_page().to_string());
        prop_assert!(!current[0].is_link());
    }

    #[test]
    fn ellipses_are_few_and_never_adjacent(d in descriptor()) {
        let links = compute_links(&d, "/");
        let count = links.iter().filter(|l| l.kind == NavLinkKind::Ellipsis).count();
        prop_assert!(count <= 2);
        for pair in links.windows(2) {
            prop_assert!(
                !(pair[0].kind == NavLinkKind::Ellipsis && pair[1].kind == NavLinkKind::Ellipsis)
            );
        }
    }

    #[test]
    fn first_and_last_follow_the_current_page(d in descriptor()) {
        prop_assume!(d.total_items() > 0);
        let links = compute_links(&d, "/");
        let has = |kind| links.iter().any(|l| l.kind == kind);
        prop_assert_eq!(has(NavLinkKind::First), d.current_page() != 1);
        prop_assert_eq!(has(NavLinkKind::Last), d.current_page() != d.last_page());
    }

    #[test]
    fn window_never_exceeds_seven_entries(d in descriptor()) {
        prop_assert!(compute_links(&d, "/").len() <= 7);
    }
}

// ===== Property 5: targets =====

proptest! {
    #[test]
    fn targets_are_in_range_and_ascending(d in in_range_descriptor()) {
        let links = compute_links(&d, "/article/");
        let targets: Vec<u32> = links.iter().filter_map(|l| l.target_page).collect();
        prop_assert!(targets.iter().all(|&t| (1..=d.last_page()).contains(&t)));
        prop_assert!(targets.windows(2).all(|w| w[0] < w[1]));
    }
}

// ===== Property 6: URLs =====

proptest! {
    #[test]
    fn page_url_separator_depends_on_existing_query(
        path in "/[a-z]{1,8}/",
        query in proptest::option::of("[a-z]{1,5}=[a-z0-9]{1,5}"),
        page in 1u32..10_000,
    ) {
        let base = match &query {
            Some(q) => format!("{path}?{q}"),
            None => path.clone(),
        };
        let url = build_page_url(&base, page);
        let sep = if query.is_some() { '&' } else { '?' };
        prop_assert_eq!(url, format!("{base}{sep}page={page}"));
    }
}
