//! Output of a content producer.

use super::PageDescriptor;

/// Author byline shown above content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Avatar image location, if the author has one.
    pub avatar_url: Option<String>,
}

/// A pagination bar request: where in the listing, and its root URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSpec {
    /// Listing position.
    pub descriptor: PageDescriptor,
    /// Listing URL without a page parameter.
    pub base_url: String,
}

/// Displayable result of a content producer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    /// Heading.
    pub title: String,
    /// Optional byline.
    pub author: Option<Author>,
    /// Body text, one entry per line.
    pub lines: Vec<String>,
    /// Pagination bar shown under the body.
    pub pagination: Option<PaginationSpec>,
}

impl Content {
    /// Content with just a heading.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Append a body line.
    #[must_use]
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Set the byline.
    #[must_use]
    pub fn author(mut self, name: impl Into<String>, avatar_url: Option<String>) -> Self {
        self.author = Some(Author {
            name: name.into(),
            avatar_url,
        });
        self
    }

    /// Attach a pagination bar.
    #[must_use]
    pub fn paginated(mut self, descriptor: PageDescriptor, base_url: impl Into<String>) -> Self {
        self.pagination = Some(PaginationSpec {
            descriptor,
            base_url: base_url.into(),
        });
        self
    }
}

/// What the shell draws in the main pane.
///
/// `Content` is a producer's output; the other variants are the stock
/// placeholder pages, each drawn with the framed-message primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Producer output.
    Content(Content),
    /// The requested page does not exist.
    NotFound,
    /// Something went wrong while producing the page.
    Error,
    /// Content is on its way.
    Loading,
    /// The page requires a signed-in user.
    LoginRequired,
}
