//! Snackbar: draws a visible notification at its anchor.

use crate::state::{Anchor, Horizontal, NotificationState, Vertical};
use crate::view::constants::{SNACKBAR_HEIGHT, SNACKBAR_PADDING};
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Where a snackbar showing `text` sits inside `area`.
///
/// Width fits the text plus borders and padding, clamped to the area.
pub fn snackbar_rect(area: Rect, anchor: Anchor, text: &str) -> Rect {
    let wanted = text.width() + 2 * usize::from(SNACKBAR_PADDING) + 2;
    let width = u16::try_from(wanted).unwrap_or(u16::MAX).min(area.width);
    let height = SNACKBAR_HEIGHT.min(area.height);

    let x = match anchor.horizontal {
        Horizontal::Left => area.x,
        Horizontal::Center => area.x + (area.width - width) / 2,
        Horizontal::Right => area.right() - width,
    };
    let y = match anchor.vertical {
        Vertical::Top => area.y,
        Vertical::Bottom => area.bottom() - height,
    };
    Rect::new(x, y, width, height)
}

/// Renders a [`NotificationState`]; draws nothing while closed.
pub struct Snackbar<'a> {
    state: &'a NotificationState,
    theme: &'a Theme,
}

impl<'a> Snackbar<'a> {
    /// Snackbar for `state`.
    pub fn new(state: &'a NotificationState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Snackbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.is_open {
            return;
        }
        let rect = snackbar_rect(area, self.state.anchor, &self.state.text);
        Clear.render(rect, buf);
        Paragraph::new(self.state.text.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.snackbar)
            .block(Block::default().borders(Borders::ALL).style(self.theme.snackbar))
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 20,
    };

    #[test]
    fn default_anchor_is_bottom_center() {
        let rect = snackbar_rect(AREA, Anchor::default(), "Reloaded");
        // "Reloaded" = 8 columns + 4 padding + 2 border.
        assert_eq!(rect, Rect::new(23, 17, 14, 3));
    }

    #[test]
    fn top_right_anchor() {
        let anchor = Anchor::new(Vertical::Top, Horizontal::Right);
        let rect = snackbar_rect(AREA, anchor, "hi");
        assert_eq!(rect, Rect::new(52, 0, 8, 3));
    }

    #[test]
    fn bottom_left_anchor() {
        let anchor = Anchor::new(Vertical::Bottom, Horizontal::Left);
        let rect = snackbar_rect(AREA, anchor, "hi");
        assert_eq!(rect, Rect::new(0, 17, 8, 3));
    }

    #[test]
    fn long_text_is_clamped_to_area() {
        let text = "x".repeat(200);
        let rect = snackbar_rect(AREA, Anchor::default(), &text);
        assert_eq!(rect.width, AREA.width);
        assert_eq!(rect.x, 0);
    }

    #[test]
    fn closed_state_draws_nothing() {
        let theme = Theme::default();
        let state = NotificationState::default();
        let mut buf = Buffer::empty(AREA);
        Snackbar::new(&state, &theme).render(AREA, &mut buf);
        assert_eq!(buf, Buffer::empty(AREA));
    }

    #[test]
    fn open_state_draws_text() {
        let theme = Theme::default();
        let state = NotificationState {
            is_open: true,
            text: "Reloaded".into(),
            anchor: Anchor::default(),
        };
        let mut buf = Buffer::empty(AREA);
        Snackbar::new(&state, &theme).render(AREA, &mut buf);
        let row: String = (0..AREA.width).map(|x| buf[(x, 18)].symbol().to_string()).collect();
        assert!(row.contains("Reloaded"), "row: {row:?}");
    }
}
