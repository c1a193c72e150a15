//! Location bar widget.

use crate::state::LocationInput;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shows the current location, or the edit buffer with a cursor while the
/// user is typing one.
pub struct LocationBar<'a> {
    location: &'a str,
    input: &'a LocationInput,
    theme: &'a Theme,
}

impl<'a> LocationBar<'a> {
    /// Bar for `location` with the given input state.
    pub fn new(location: &'a str, input: &'a LocationInput, theme: &'a Theme) -> Self {
        Self {
            location,
            input,
            theme,
        }
    }
}

/// Split `text` around a character cursor: (before, under cursor, after).
/// A cursor at the end sits on a blank cell.
fn split_at_cursor(text: &str, cursor: usize) -> (String, String, String) {
    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let under = rest.next().map_or_else(|| " ".to_string(), String::from);
    (before, under, rest.collect())
}

impl Widget for LocationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, title) = match self.input {
            LocationInput::Editing { text, cursor } => {
                let (before, under, after) = split_at_cursor(text, *cursor);
                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(under, self.theme.cursor),
                    Span::raw(after),
                ]);
                (line, " Go to (Enter / Esc) ")
            }
            LocationInput::Inactive => (
                Line::from(Span::styled(self.location, self.theme.location)),
                " Location ",
            ),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border)
                    .title(title),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn split_at_cursor_middle_and_end() {
        assert_eq!(
            split_at_cursor("/abc/", 2),
            ("/a".into(), "b".into(), "c/".into())
        );
        assert_eq!(split_at_cursor("/ab", 3), ("/ab".into(), " ".into(), String::new()));
    }

    #[test]
    fn inactive_bar_shows_location() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        LocationBar::new("/article/3/", &LocationInput::Inactive, &theme).render(area, &mut buf);
        assert!(row(&buf, 0).contains("Location"));
        assert!(row(&buf, 1).contains("/article/3/"));
    }

    #[test]
    fn editing_bar_highlights_cursor_cell() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        let input = LocationInput::Editing {
            text: "/art".into(),
            cursor: 1,
        };
        LocationBar::new("/", &input, &theme).render(area, &mut buf);
        assert!(row(&buf, 1).contains("/art"));
        // Inside the border, the cursor is on the second character.
        assert_eq!(buf[(2, 1)].symbol(), "a");
        assert_eq!(buf[(2, 1)].bg, theme.cursor.bg.unwrap());
    }
}
