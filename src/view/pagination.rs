//! Pagination bar widget.

use crate::model::{NavLink, NavLinkKind};
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One line of page entries: ` 1  ···  4 [5] 6  ···  10 ` with the current
/// page highlighted. Nothing is drawn for an empty link list.
pub struct PaginationBar<'a> {
    links: &'a [NavLink],
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Bar over `links` as produced by [`crate::model::compute_links`].
    pub fn new(links: &'a [NavLink], theme: &'a Theme) -> Self {
        Self { links, theme }
    }

    /// The bar as a styled line.
    pub fn line(&self) -> Line<'a> {
        let spans: Vec<Span<'a>> = self
            .links
            .iter()
            .map(|link| {
                let style = match link.kind {
                    NavLinkKind::Current => self.theme.current_page,
                    NavLinkKind::Ellipsis => self.theme.ellipsis,
                    _ => self.theme.link,
                };
                Span::styled(format!(" {} ", link.label), style)
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.links.is_empty() {
            return;
        }
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Plain text of the bar, for logs and tests.
pub fn pagination_text(links: &[NavLink]) -> String {
    links.iter().map(|l| format!(" {} ", l.label)).collect()
}
