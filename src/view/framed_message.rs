//! Framed message panel and the fallback pages built on it.
//!
//! Error, not-found, loading and login pages are all a [`FramedMessage`]
//! with a different icon and text.

use crate::model::Page;
use crate::view::constants::FRAMED_MESSAGE_HEIGHT;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Generic error text.
pub const ERROR_TEXT: &str = "好像出了点问题...";
/// Not-found text.
pub const NOT_FOUND_TEXT: &str = "404  当前页面不存在";
/// Loading text.
pub const LOADING_TEXT: &str = "加载中...";
/// Login prompt text.
pub const LOGIN_TEXT: &str = "请登录";

const ALERT_ICON: &str = "(!)";
const SPINNER_ICON: &str = "◌";

/// How the icon sits relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconPlacement {
    Inline,
    Above,
}

/// A centered, bordered panel with an optional icon and one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedMessage {
    icon: Option<&'static str>,
    placement: IconPlacement,
    text: String,
}

impl FramedMessage {
    /// Panel showing `text` only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            placement: IconPlacement::Inline,
            text: text.into(),
        }
    }

    /// Put `icon` before the text.
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self.placement = IconPlacement::Inline;
        self
    }

    /// Put `icon` on its own line above the text.
    pub fn with_icon_above(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self.placement = IconPlacement::Above;
        self
    }

    /// Generic failure page.
    pub fn error_page() -> Self {
        Self::new(ERROR_TEXT)
    }

    /// Not-found page.
    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_TEXT).with_icon(ALERT_ICON)
    }

    /// Loading placeholder.
    pub fn loading() -> Self {
        Self::new(LOADING_TEXT).with_icon_above(SPINNER_ICON)
    }

    /// Sign-in prompt.
    pub fn login_required() -> Self {
        Self::new(LOGIN_TEXT).with_icon(ALERT_ICON)
    }

    /// The framed message for a non-content page.
    pub fn for_page(page: &Page) -> Option<Self> {
        match page {
            Page::Content(_) => None,
            Page::NotFound => Some(Self::not_found()),
            Page::Error => Some(Self::error_page()),
            Page::Loading => Some(Self::loading()),
            Page::LoginRequired => Some(Self::login_required()),
        }
    }

    /// Message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Columns needed for the content, icon included.
    pub fn content_width(&self) -> u16 {
        let text = self.text.width();
        let width = match (self.icon, self.placement) {
            (Some(icon), IconPlacement::Inline) => icon.width() + 2 + text,
            (Some(icon), IconPlacement::Above) => icon.width().max(text),
            (None, _) => text,
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn lines<'a>(&'a self, theme: &Theme) -> Vec<Line<'a>> {
        let text = Span::styled(self.text.as_str(), theme.text);
        match (self.icon, self.placement) {
            (Some(icon), IconPlacement::Inline) => vec![Line::from(vec![
                Span::styled(icon, theme.icon),
                Span::raw("  "),
                text,
            ])],
            (Some(icon), IconPlacement::Above) => vec![
                Line::from(Span::styled(icon, theme.icon)),
                Line::default(),
                Line::from(text),
            ],
            (None, _) => vec![Line::from(text)],
        }
    }

    /// Widget bound to `theme`.
    pub fn widget<'a>(&'a self, theme: &'a Theme) -> FramedMessageWidget<'a> {
        FramedMessageWidget {
            message: self,
            theme,
        }
    }
}

/// Renders a [`FramedMessage`] centered in its area.
pub struct FramedMessageWidget<'a> {
    message: &'a FramedMessage,
    theme: &'a Theme,
}

impl Widget for FramedMessageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = panel_rect(area, FRAMED_MESSAGE_HEIGHT);
        let lines = self.message.lines(self.theme);

        let inner_height = panel.height.saturating_sub(2);
        let top_pad = inner_height.saturating_sub(lines.len() as u16) / 2;
        let mut padded = vec![Line::default(); top_pad as usize];
        padded.extend(lines);

        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border),
            )
            .render(panel, buf);
    }
}

/// Full-width panel of `height`, vertically centered in `area`.
fn panel_rect(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    Rect::new(area.x, y, area.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(message: &FramedMessage, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| frame.render_widget(message.widget(&theme), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Wide characters leave padding cells behind them.
    fn compact(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn each_fallback_page_maps_to_its_message() {
        assert_eq!(FramedMessage::for_page(&Page::NotFound), Some(FramedMessage::not_found()));
        assert_eq!(FramedMessage::for_page(&Page::Error), Some(FramedMessage::error_page()));
        assert_eq!(FramedMessage::for_page(&Page::Loading), Some(FramedMessage::loading()));
        assert_eq!(
            FramedMessage::for_page(&Page::LoginRequired),
            Some(FramedMessage::login_required())
        );
        assert_eq!(FramedMessage::for_page(&Page::Content(Default::default())), None);
    }

    #[test]
    fn not_found_renders_icon_and_text() {
        let out = render(&FramedMessage::not_found(), 50, 9);
        assert!(out.contains("(!)"));
        assert!(compact(&out).contains("404当前页面不存在"));
    }

    #[test]
    fn loading_puts_spinner_above_text() {
        let out = render(&FramedMessage::loading(), 30, 9);
        let spinner_row = out.lines().position(|l| l.contains(SPINNER_ICON)).unwrap();
        let text_row = out.lines().position(|l| compact(l).contains("加载中")).unwrap();
        assert_eq!(text_row, spinner_row + 2);
    }

    #[test]
    fn error_page_has_no_icon() {
        let out = render(&FramedMessage::error_page(), 40, 9);
        assert!(!out.contains("(!)"));
        assert!(compact(&out).contains("好像出了点问题"));
    }

    #[test]
    fn content_width_counts_wide_characters() {
        // 3 CJK characters, 2 columns each.
        assert_eq!(FramedMessage::new(LOGIN_TEXT).content_width(), 6);
        assert_eq!(FramedMessage::login_required().content_width(), 3 + 2 + 6);
    }

    #[test]
    fn renders_in_tiny_area_without_panic() {
        render(&FramedMessage::not_found(), 4, 2);
    }
}
