//! User avatar badge.
//!
//! A terminal cannot show the avatar image, so a user with an avatar
//! source gets a badge with their initial; a user without one gets the
//! generic placeholder glyph.

use crate::view::styles::Theme;
use ratatui::text::Span;

/// Shown when the user has no avatar source.
pub const PLACEHOLDER_GLYPH: char = '@';

/// Avatar badge for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAvatar<'a> {
    name: &'a str,
    src: Option<&'a str>,
}

impl<'a> UserAvatar<'a> {
    /// Avatar for `name` with an optional image source.
    pub fn new(name: &'a str, src: Option<&'a str>) -> Self {
        Self { name, src }
    }

    /// The badge character.
    pub fn glyph(&self) -> char {
        match self.src.filter(|s| !s.is_empty()) {
            Some(_) => self
                .name
                .chars()
                .find(|c| c.is_alphanumeric())
                .map(|c| c.to_uppercase().next().unwrap_or(c))
                .unwrap_or(PLACEHOLDER_GLYPH),
            None => PLACEHOLDER_GLYPH,
        }
    }

    /// Badge as a styled span, e.g. `[F]`.
    pub fn span(&self, theme: &Theme) -> Span<'static> {
        Span::styled(format!("[{}]", self.glyph()), theme.avatar)
    }
}
