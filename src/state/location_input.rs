//! Location bar input handling (pure state transitions).
//!
//! All functions are pure - no side effects, testable without TUI.
//! The cursor counts characters, not bytes.

/// Location bar state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationInput {
    /// Not editing; keys drive navigation.
    #[default]
    Inactive,
    /// User is typing a location.
    Editing {
        /// Text typed so far.
        text: String,
        /// Cursor position in characters.
        cursor: usize,
    },
}

impl LocationInput {
    /// Whether the location bar has keyboard focus.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map_or(text.len(), |(idx, _)| idx)
}

/// Start editing, pre-filled with `current` and the cursor at its end.
pub fn activate(state: LocationInput, current: &str) -> LocationInput {
    match state {
        LocationInput::Inactive => LocationInput::Editing {
            text: current.to_string(),
            cursor: current.chars().count(),
        },
        other => other,
    }
}

/// Insert `ch` at the cursor.
pub fn handle_char_input(state: LocationInput, ch: char) -> LocationInput {
    match state {
        LocationInput::Editing { mut text, cursor } => {
            text.insert(byte_index(&text, cursor), ch);
            LocationInput::Editing {
                text,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor.
pub fn handle_backspace(state: LocationInput) -> LocationInput {
    match state {
        LocationInput::Editing { mut text, cursor } if cursor > 0 => {
            text.remove(byte_index(&text, cursor - 1));
            LocationInput::Editing {
                text,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor one character left, saturating at 0.
pub fn handle_cursor_left(state: LocationInput) -> LocationInput {
    match state {
        LocationInput::Editing { text, cursor } => LocationInput::Editing {
            text,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the cursor one character right, saturating at the end.
pub fn handle_cursor_right(state: LocationInput) -> LocationInput {
    match state {
        LocationInput::Editing { text, cursor } => {
            let max = text.chars().count();
            LocationInput::Editing {
                text,
                cursor: (cursor + 1).min(max),
            }
        }
        other => other,
    }
}

/// Leave editing without navigating.
pub fn cancel(_state: LocationInput) -> LocationInput {
    LocationInput::Inactive
}

/// Leave editing, returning the location to navigate to.
///
/// Whitespace is trimmed and a missing leading `/` is added. Blank input
/// yields `None`.
pub fn submit(state: LocationInput) -> (LocationInput, Option<String>) {
    match state {
        LocationInput::Editing { text, .. } => {
            let trimmed = text.trim();
            let location = if trimmed.is_empty() {
                None
            } else if trimmed.starts_with('/') {
                Some(trimmed.to_string())
            } else {
                Some(format!("/{trimmed}"))
            };
            (LocationInput::Inactive, location)
        }
        LocationInput::Inactive => (LocationInput::Inactive, None),
    }
}
