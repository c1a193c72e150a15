//! Transient notification (snackbar) state machine.
//!
//! A single slot: opening while a message is visible replaces it and
//! restarts the auto-dismiss deadline, so only the most recent `open` can
//! ever dismiss. Time is injected, which keeps the machine pure.

use std::time::{Duration, Instant};
use tracing::debug;

/// Default time a notification stays visible.
pub const AUTO_DISMISS: Duration = Duration::from_millis(2000);

// ===== Anchor =====

/// Vertical screen edge for the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vertical {
    /// Top edge.
    Top,
    /// Bottom edge.
    #[default]
    Bottom,
}

/// Horizontal placement for the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    /// Left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Right edge.
    Right,
}

/// Where the notification is drawn. Defaults to bottom center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    /// Vertical edge.
    pub vertical: Vertical,
    /// Horizontal placement.
    pub horizontal: Horizontal,
}

impl Anchor {
    /// Anchor at the given edges.
    pub fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

// ===== State =====

/// Visible state of the notification slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    /// Whether a message is showing.
    pub is_open: bool,
    /// Last message opened. Kept after close.
    pub text: String,
    /// Placement of the message.
    pub anchor: Anchor,
}

/// Inputs to the notification machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// Show `message`, optionally moving it to `anchor`.
    Open {
        /// Text to show.
        message: String,
        /// New placement; the current one is kept when `None`.
        anchor: Option<Anchor>,
        /// When the open happened.
        at: Instant,
    },
    /// Hide immediately.
    Close,
    /// Time has passed.
    Tick(Instant),
}

/// What an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// A closed slot became visible.
    Opened,
    /// A visible message was replaced and its deadline restarted.
    Replaced,
    /// Closed on request.
    Closed,
    /// Closed because the deadline passed.
    AutoDismissed,
}

impl Transition {
    /// Whether the slot needs redrawing.
    pub fn is_visible_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

// ===== Controller =====

/// Single-slot notification controller with one pending deadline at most.
#[derive(Debug, Clone)]
pub struct NotificationController {
    state: NotificationState,
    deadline: Option<Instant>,
    duration: Duration,
}

impl Default for NotificationController {
    fn default() -> Self {
        Self::new(AUTO_DISMISS)
    }
}

impl NotificationController {
    /// Controller whose messages stay up for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            state: NotificationState::default(),
            deadline: None,
            duration,
        }
    }

    /// Current visible state.
    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    /// Pending auto-dismiss deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Auto-dismiss duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `message`, replacing any visible one.
    pub fn open(&mut self, message: impl Into<String>, anchor: Option<Anchor>, now: Instant) -> Transition {
        self.apply(NotificationEvent::Open {
            message: message.into(),
            anchor,
            at: now,
        })
    }

    /// Hide the message. No-op when already closed.
    pub fn close(&mut self) -> Transition {
        self.apply(NotificationEvent::Close)
    }

    /// Advance time; closes the message once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Transition {
        self.apply(NotificationEvent::Tick(now))
    }

    /// Transition table.
    ///
    /// | open? | event             | result                         |
    /// |-------|-------------------|--------------------------------|
    /// | no    | Open              | Opened, deadline = at + d      |
    /// | yes   | Open              | Replaced, deadline = at + d    |
    /// | yes   | Close             | Closed, deadline cleared       |
    /// | no    | Close             | Unchanged                      |
    /// | yes   | Tick(t ≥ deadline)| AutoDismissed, deadline cleared|
    /// | *     | Tick(otherwise)   | Unchanged                      |
    pub fn apply(&mut self, event: NotificationEvent) -> Transition {
        let transition = match event {
            NotificationEvent::Open {
                message,
                anchor,
                at,
            } => {
                let was_open = self.state.is_open;
                self.state.is_open = true;
                self.state.text = message;
                if let Some(anchor) = anchor {
                    self.state.anchor = anchor;
                }
                self.deadline = Some(at + self.duration);
                if was_open {
                    Transition::Replaced
                } else {
                    Transition::Opened
                }
            }
            NotificationEvent::Close if self.state.is_open => {
                self.hide();
                Transition::Closed
            }
            NotificationEvent::Close => Transition::Unchanged,
            NotificationEvent::Tick(now) => match self.deadline {
                Some(deadline) if self.state.is_open && now >= deadline => {
                    self.hide();
                    Transition::AutoDismissed
                }
                _ => Transition::Unchanged,
            },
        };

        if transition.is_visible_change() {
            debug!(?transition, text = %self.state.text, "notification");
        }
        transition
    }

    fn hide(&mut self) {
        self.state.is_open = false;
        self.deadline = None;
    }
}
