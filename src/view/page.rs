//! Page body: content with its pagination bar, or a framed fallback message.

use crate::model::{Content, NavLink, Page};
use crate::view::avatar::UserAvatar;
use crate::view::constants::{FRAME_MAX_WIDTH, PAGINATION_HEIGHT};
use crate::view::framed_message::FramedMessage;
use crate::view::pagination::PaginationBar;
use crate::view::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Renders the current [`Page`].
pub struct PageView<'a> {
    page: &'a Page,
    links: &'a [NavLink],
    theme: &'a Theme,
}

impl<'a> PageView<'a> {
    /// View of `page`; `links` feed the pagination bar of content pages.
    pub fn new(page: &'a Page, links: &'a [NavLink], theme: &'a Theme) -> Self {
        Self { page, links, theme }
    }
}

/// Horizontally centered column no wider than [`FRAME_MAX_WIDTH`].
pub fn frame_column(area: Rect) -> Rect {
    let width = area.width.min(FRAME_MAX_WIDTH);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn body_lines<'c>(content: &'c Content, theme: &Theme) -> Vec<Line<'c>> {
    let mut lines = Vec::with_capacity(content.lines.len() + 2);
    if let Some(author) = &content.author {
        let avatar = UserAvatar::new(&author.name, author.avatar_url.as_deref());
        lines.push(Line::from(vec![
            avatar.span(theme),
            Span::raw(" "),
            Span::styled(author.name.as_str(), theme.muted),
        ]));
        lines.push(Line::default());
    }
    lines.extend(
        content
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), theme.text))),
    );
    lines
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = frame_column(area);

        let content = match self.page {
            Page::Content(content) => content,
            other => {
                if let Some(message) = FramedMessage::for_page(other) {
                    message.widget(self.theme).render(column, buf);
                }
                return;
            }
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title(Span::styled(format!(" {} ", content.title), self.theme.title));
        let inner = block.inner(column);
        block.render(column, buf);

        let pager_height = if self.links.is_empty() { 0 } else { PAGINATION_HEIGHT };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(pager_height)])
            .split(inner);

        Paragraph::new(body_lines(content, self.theme))
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        PaginationBar::new(self.links, self.theme).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{compute_links, PageDescriptor};

    fn render(page: &Page, links: &[NavLink], width: u16, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        PageView::new(page, links, &theme).render(area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn frame_column_caps_width_and_centers() {
        assert_eq!(frame_column(Rect::new(0, 0, 140, 10)), Rect::new(20, 0, 100, 10));
        assert_eq!(frame_column(Rect::new(0, 0, 60, 10)), Rect::new(0, 0, 60, 10));
    }

    #[test]
    fn content_page_shows_title_author_body_and_pager() {
        let content = Content::new("Article 4")
            .author("fossen", Some("/a.png".into()))
            .line("Category: Rust");
        let descriptor = PageDescriptor::new(2, 10, 30).unwrap();
        let links = compute_links(&descriptor, "/article/");
        let rows = render(&Page::Content(content), &links, 50, 10);

        assert!(rows[0].contains("Article 4"));
        assert!(rows[1].contains("[F] fossen"));
        assert!(rows[3].contains("Category: Rust"));
        assert!(rows[8].contains(" 1  2  3 "), "pager row: {:?}", rows[8]);
    }

    #[test]
    fn content_without_links_has_no_pager_row() {
        let content = Content::new("Search").line("hint");
        let rows = render(&Page::Content(content), &[], 40, 6);
        assert!(rows[1].contains("hint"));
        assert!(rows.iter().all(|r| !r.contains(" 1 ")));
    }

    #[test]
    fn fallback_page_renders_framed_message() {
        let rows = render(&Page::LoginRequired, &[], 40, 9);
        let joined: String = rows.concat().chars().filter(|c| !c.is_whitespace()).collect();
        assert!(joined.contains("请登录"));
    }
}
