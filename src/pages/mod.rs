//! Site pages and the route table that dispatches to them.
//!
//! Declaration order in [`site_routes`] is the matching order. The
//! article-detail route sits before `/article/` but both are exact, so
//! the order only matters for readers; the catch-all must stay last.

pub mod catalog;

pub use catalog::{Article, Catalog, Group};

use crate::model::{Content, ContentError, Page, PageDescriptor};
use crate::routing::{RouteEntry, RouteError, RouteMatch, RouteTable};
use std::rc::Rc;

/// Route names, as reported by [`RouteTable::resolve`].
pub mod names {
    /// Newest articles (`/` and `/article/`).
    pub const NEW_ARTICLES: &str = "new_articles";
    /// Single article.
    pub const ARTICLE_DETAIL: &str = "article_detail";
    /// Articles in a category.
    pub const CATEGORY_ARTICLES: &str = "category_articles";
    /// Articles in a topic.
    pub const TOPIC_ARTICLES: &str = "topic_articles";
    /// Search results.
    pub const SEARCH_ARTICLES: &str = "search_articles";
    /// Notices for the signed-in user.
    pub const NOTICES: &str = "notices";
    /// GitHub OAuth callback.
    pub const GITHUB_LOGIN: &str = "github_login";
    /// Anything else.
    pub const NOT_FOUND: &str = "not_found";
}

/// Build the site's route table over `catalog`, listing `page_size` articles per page.
pub fn site_routes(catalog: Rc<Catalog>, page_size: u32) -> Result<RouteTable, RouteError> {
    let newest = {
        let catalog = Rc::clone(&catalog);
        move |route: &RouteMatch| -> Result<Content, ContentError> {
            let all: Vec<&Article> = catalog.articles.iter().collect();
            listing("Latest articles", &all, route, page_size)
        }
    };

    let detail = {
        let catalog = Rc::clone(&catalog);
        move |route: &RouteMatch| -> Result<Content, ContentError> {
            article_detail(&catalog, route.numeric_param("id")?)
        }
    };

    let by_category = {
        let catalog = Rc::clone(&catalog);
        move |route: &RouteMatch| -> Result<Content, ContentError> {
            let id = route.numeric_param("cate_id")?;
            let category = catalog
                .category(id)
                .ok_or_else(|| ContentError::not_found(format!("category {id}")))?;
            let matching: Vec<&Article> = catalog
                .articles
                .iter()
                .filter(|a| a.category_id == id)
                .collect();
            listing(&format!("Category: {}", category.name), &matching, route, page_size)
        }
    };

    let by_topic = {
        let catalog = Rc::clone(&catalog);
        move |route: &RouteMatch| -> Result<Content, ContentError> {
            let id = route.numeric_param("topic_id")?;
            let topic = catalog
                .topic(id)
                .ok_or_else(|| ContentError::not_found(format!("topic {id}")))?;
            let matching: Vec<&Article> = catalog
                .articles
                .iter()
                .filter(|a| a.topic_id == Some(id))
                .collect();
            listing(&format!("Topic: {}", topic.name), &matching, route, page_size)
        }
    };

    let search = {
        let catalog = Rc::clone(&catalog);
        move |route: &RouteMatch| -> Result<Content, ContentError> {
            let query = route.query("q").unwrap_or_default().trim().to_lowercase();
            if query.is_empty() {
                return Ok(Content::new("Search").line("Add ?q=<words> to the location to search."));
            }
            let matching: Vec<&Article> = catalog
                .articles
                .iter()
                .filter(|a| a.title.to_lowercase().contains(&query))
                .collect();
            listing(&format!("Search: {query}"), &matching, route, page_size)
        }
    };

    let notices = {
        let catalog = Rc::clone(&catalog);
        move |_: &RouteMatch| -> Result<Content, ContentError> {
            let Some(viewer) = &catalog.viewer else {
                return Err(ContentError::Failed("notices require a signed-in user".into()));
            };
            let mut content = Content::new(format!("Notices for {viewer}"));
            if catalog.notices.is_empty() {
                content = content.line("No notices.");
            }
            for notice in &catalog.notices {
                content = content.line(notice.clone());
            }
            Ok(content)
        }
    };

    let github_login = |route: &RouteMatch| -> Result<Content, ContentError> {
        match route.query("code") {
            Some(code) if !code.is_empty() => Ok(Content::new("GitHub sign-in")
                .line("Authorization code received.")
                .line("Finishing sign-in...")),
            other => Err(ContentError::BadParameter {
                name: "code".to_string(),
                value: other.unwrap_or_default().to_string(),
            }),
        }
    };

    let not_found = |route: &RouteMatch| -> Result<Content, ContentError> {
        Err(ContentError::not_found(route.path()))
    };

    RouteTable::new(vec![
        RouteEntry::exact(names::NEW_ARTICLES, "/", newest.clone())?,
        RouteEntry::exact(names::ARTICLE_DETAIL, r"/article/:id(\d+)/", detail)?,
        RouteEntry::exact(names::NEW_ARTICLES, "/article/", newest)?,
        RouteEntry::exact(
            names::CATEGORY_ARTICLES,
            r"/article/category/:cate_id(\d+)/",
            by_category,
        )?,
        RouteEntry::exact(
            names::TOPIC_ARTICLES,
            r"/article/topic/:topic_id(\d+)/",
            by_topic,
        )?,
        RouteEntry::exact(names::SEARCH_ARTICLES, "/article/search/", search)?,
        RouteEntry::exact(names::NOTICES, "/account/notice/", notices)?
            .with_fallback(Page::LoginRequired),
        RouteEntry::exact(names::GITHUB_LOGIN, "/account/oauth/github/", github_login)?
            .with_fallback(Page::LoginRequired),
        RouteEntry::catch_all(names::NOT_FOUND, not_found),
    ])
}

/// One page of an article listing with its pagination bar.
///
/// A page past the end of a non-empty listing is not found.
fn listing(
    title: &str,
    articles: &[&Article],
    route: &RouteMatch,
    page_size: u32,
) -> Result<Content, ContentError> {
    let page = route.page()?;
    let descriptor = PageDescriptor::new(page, page_size, articles.len() as u64)
        .map_err(|e| ContentError::Failed(e.to_string()))?;

    if !articles.is_empty() && page > descriptor.last_page() {
        return Err(ContentError::not_found(format!("{title}, page {page}")));
    }

    let mut content = Content::new(title);
    if articles.is_empty() {
        content = content.line("No articles yet.");
    }
    let start = (page as usize - 1) * page_size as usize;
    for article in articles.iter().skip(start).take(page_size as usize) {
        content = content.line(format!("#{:<4} {}  ({})", article.id, article.title, article.author));
    }

    Ok(content.paginated(descriptor, route.listing_url()))
}

fn article_detail(catalog: &Catalog, id: u32) -> Result<Content, ContentError> {
    let article = catalog
        .article(id)
        .ok_or_else(|| ContentError::not_found(format!("article {id}")))?;

    let mut content = Content::new(article.title.clone())
        .author(article.author.clone(), article.avatar_url.clone());
    if let Some(category) = catalog.category(article.category_id) {
        content = content.line(format!("Category: {}", category.name));
    }
    if let Some(topic) = article.topic_id.and_then(|id| catalog.topic(id)) {
        content = content.line(format!("Topic: {}", topic.name));
    }
    Ok(content)
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
