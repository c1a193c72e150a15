//! In-memory article catalog backing the site pages.
//!
//! The shell does no fetching; the catalog stands in for whatever data
//! layer feeds the pages.

/// An article listed on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Article id.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// Category the article is filed under.
    pub category_id: u32,
    /// Topic series, if any.
    pub topic_id: Option<u32>,
    /// Author display name.
    pub author: String,
    /// Author avatar location.
    pub avatar_url: Option<String>,
}

/// Named grouping (category or topic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Everything the site pages can show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Articles, newest first.
    pub articles: Vec<Article>,
    /// Categories.
    pub categories: Vec<Group>,
    /// Topics.
    pub topics: Vec<Group>,
    /// Notices for the signed-in user.
    pub notices: Vec<String>,
    /// Signed-in user name.
    pub viewer: Option<String>,
}

const CATEGORY_NAMES: [&str; 3] = ["Rust", "Python", "Linux"];
const TOPIC_NAMES: [&str; 2] = ["Building a blog", "Reading notes"];

impl Catalog {
    /// A fixed sample catalog: 57 articles across 3 categories and 2 topics,
    /// no signed-in user.
    pub fn sample() -> Self {
        let categories = CATEGORY_NAMES
            .iter()
            .zip(1..)
            .map(|(name, id)| Group {
                id,
                name: (*name).to_string(),
            })
            .collect();
        let topics = TOPIC_NAMES
            .iter()
            .zip(1..)
            .map(|(name, id)| Group {
                id,
                name: (*name).to_string(),
            })
            .collect();

        let articles = (1..=57u32)
            .rev()
            .map(|id| Article {
                id,
                title: format!("Article {id}"),
                category_id: id % 3 + 1,
                topic_id: (id % 5 == 0).then_some(id % 2 + 1),
                author: if id % 2 == 0 { "fossen" } else { "guest" }.to_string(),
                avatar_url: (id % 2 == 0).then(|| "/media/avatar/fossen.png".to_string()),
            })
            .collect();

        Self {
            articles,
            categories,
            topics,
            notices: Vec::new(),
            viewer: None,
        }
    }

    /// Article by id.
    pub fn article(&self, id: u32) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Category by id.
    pub fn category(&self, id: u32) -> Option<&Group> {
        self.categories.iter().find(|g| g.id == id)
    }

    /// Topic by id.
    pub fn topic(&self, id: u32) -> Option<&Group> {
        self.topics.iter().find(|g| g.id == id)
    }
}
