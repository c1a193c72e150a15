//! Fault boundary state machine.
//!
//! A boundary wraps one content producer. While `Healthy` it runs the
//! producer and shows its output; the first failure (a returned
//! [`ContentError`] or a panic) moves it to `Faulted`, after which it shows
//! a fallback page until it is reset. There is no automatic retry.

use crate::model::{Content, ContentError, ErrorKind, ErrorRecord, Page};
use crate::routing::{ContentProducer, RouteMatch};
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::error;

thread_local! {
    static GUARD_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Whether a panic raised now on this thread would be caught by a boundary.
pub fn panic_is_contained() -> bool {
    GUARD_DEPTH.with(|depth| depth.get() > 0)
}

fn guarded<F>(produce: F) -> std::thread::Result<Result<Content, ContentError>>
where
    F: FnOnce() -> Result<Content, ContentError>,
{
    GUARD_DEPTH.with(|depth| depth.set(depth.get() + 1));
    let result = catch_unwind(AssertUnwindSafe(produce));
    GUARD_DEPTH.with(|depth| depth.set(depth.get() - 1));
    result
}

// ===== BoundaryState =====

/// State of a fault boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    /// Children render normally.
    #[default]
    Healthy,
    /// The wrapped producer failed; the fallback is shown.
    Faulted(ErrorRecord),
}

impl BoundaryState {
    /// The captured error, if faulted.
    pub fn error(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Healthy => None,
            Self::Faulted(record) => Some(record),
        }
    }

    /// Whether a fallback is being shown.
    pub fn is_faulted(&self) -> bool {
        matches!(self, Self::Faulted(_))
    }
}

/// Inputs to the boundary state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryEvent {
    /// The wrapped subtree failed while rendering.
    Failed(ErrorRecord),
    /// The boundary was remounted.
    Reset,
}

/// Transition table.
///
/// | state    | event  | next            |
/// |----------|--------|-----------------|
/// | Healthy  | Failed | Faulted(record) |
/// | Faulted  | Failed | Faulted (first record kept) |
/// | any      | Reset  | Healthy         |
pub fn transition(state: BoundaryState, event: BoundaryEvent) -> BoundaryState {
    match (state, event) {
        (BoundaryState::Healthy, BoundaryEvent::Failed(record)) => BoundaryState::Faulted(record),
        (faulted @ BoundaryState::Faulted(_), BoundaryEvent::Failed(_)) => faulted,
        (_, BoundaryEvent::Reset) => BoundaryState::Healthy,
    }
}

/// Fallback page for a captured error, honouring a caller override.
pub fn fallback_page(record: &ErrorRecord, override_page: Option<&Page>) -> Page {
    if let Some(page) = override_page {
        return page.clone();
    }
    match record.kind {
        ErrorKind::NotFound => Page::NotFound,
        ErrorKind::Generic => Page::Error,
    }
}

// ===== FaultBoundary =====

/// A failure domain around one content producer.
///
/// Each boundary owns its state; a fault in one never affects another.
#[derive(Debug, Clone)]
pub struct FaultBoundary {
    name: &'static str,
    state: BoundaryState,
    override_page: Option<Page>,
}

impl FaultBoundary {
    /// A healthy boundary. `name` identifies it in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: BoundaryState::Healthy,
            override_page: None,
        }
    }

    /// Show `page` instead of the stock fallback when faulted.
    #[must_use]
    pub fn with_override(mut self, page: Page) -> Self {
        self.override_page = Some(page);
        self
    }

    /// Replace the override page.
    pub fn set_override(&mut self, page: Option<Page>) {
        self.override_page = page;
    }

    /// Boundary name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current state.
    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    /// Render the wrapped producer.
    ///
    /// While healthy, runs `produce`, catching both returned errors and
    /// panics. While faulted, `produce` is not called.
    pub fn render<F>(&mut self, produce: F) -> Page
    where
        F: FnOnce() -> Result<Content, ContentError>,
    {
        if let BoundaryState::Faulted(record) = &self.state {
            return fallback_page(record, self.override_page.as_ref());
        }

        let record = match guarded(produce) {
            Ok(Ok(content)) => return Page::Content(content),
            Ok(Err(err)) => ErrorRecord::from_error(err),
            Err(payload) => ErrorRecord::from_panic(payload),
        };

        error!(
            boundary = self.name,
            kind = ?record.kind,
            cause = %record.original,
            "content producer failed, showing fallback"
        );

        let page = fallback_page(&record, self.override_page.as_ref());
        self.apply(BoundaryEvent::Failed(record));
        page
    }

    /// Remount: clear any captured failure.
    pub fn reset(&mut self) {
        self.apply(BoundaryEvent::Reset);
    }

    fn apply(&mut self, event: BoundaryEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = transition(state, event);
    }
}

// ===== Combinator =====

/// A producer pre-wrapped in its own [`FaultBoundary`].
pub struct Bounded<P> {
    producer: P,
    boundary: FaultBoundary,
}

/// Wrap `producer` in a fresh boundary named `name`.
pub fn with_fault_boundary<P: ContentProducer>(producer: P, name: &'static str) -> Bounded<P> {
    Bounded {
        producer,
        boundary: FaultBoundary::new(name),
    }
}

impl<P: ContentProducer> Bounded<P> {
    /// Show `page` instead of the stock fallback when faulted.
    #[must_use]
    pub fn with_override(mut self, page: Page) -> Self {
        self.boundary = self.boundary.with_override(page);
        self
    }

    /// Render the producer for `route` inside the boundary.
    pub fn render(&mut self, route: &RouteMatch) -> Page {
        let producer = &self.producer;
        self.boundary.render(|| producer.produce(route))
    }

    /// Remount the boundary.
    pub fn reset(&mut self) {
        self.boundary.reset();
    }

    /// The wrapping boundary.
    pub fn boundary(&self) -> &FaultBoundary {
        &self.boundary
    }
}

#[cfg(test)]
#[path = "fault_boundary_tests.rs"]
mod tests;
