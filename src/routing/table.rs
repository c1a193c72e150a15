//! Ordered route table with a terminal catch-all.

use super::{PathPattern, RouteError};
use crate::model::{Content, ContentError, Page};
use tracing::debug;

// ===== ContentProducer =====

/// Something that renders content for a matched route, or fails.
pub trait ContentProducer {
    /// Produce the content for `route`.
    fn produce(&self, route: &RouteMatch) -> Result<Content, ContentError>;
}

impl<F> ContentProducer for F
where
    F: Fn(&RouteMatch) -> Result<Content, ContentError>,
{
    fn produce(&self, route: &RouteMatch) -> Result<Content, ContentError> {
        self(route)
    }
}

// ===== RouteMatch =====

/// A location split into path, captured path parameters and query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMatch {
    path: String,
    params: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RouteMatch {
    fn from_location(location: &str) -> (String, Vec<(String, String)>) {
        let location = location.split_once('#').map_or(location, |(before, _)| before);
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let query = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        (path.to_string(), query)
    }

    /// Path portion of the location.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A captured path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        lookup(&self.params, name)
    }

    /// A captured path parameter parsed as an id.
    ///
    /// A digit run too large for an id names no record, so it is
    /// `NotFound`. A missing or non-numeric parameter is `BadParameter`.
    pub fn numeric_param(&self, name: &str) -> Result<u32, ContentError> {
        let raw = self.param(name).unwrap_or_default();
        raw.parse().map_err(|_| {
            if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
                ContentError::not_found(&self.path)
            } else {
                ContentError::BadParameter {
                    name: name.to_string(),
                    value: raw.to_string(),
                }
            }
        })
    }

    /// First value of a query parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        lookup(&self.query, name)
    }

    /// The `page` query parameter, 1 when absent.
    pub fn page(&self) -> Result<u32, ContentError> {
        match self.query("page") {
            None => Ok(1),
            Some(raw) => match raw.parse::<u32>() {
                Ok(page) if page >= 1 => Ok(page),
                _ => Err(ContentError::BadParameter {
                    name: "page".to_string(),
                    value: raw.to_string(),
                }),
            },
        }
    }

    /// The location with any `page` parameter removed; the root for pagination links.
    pub fn listing_url(&self) -> String {
        let rest = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter().filter(|(k, _)| k != "page"))
            .finish();
        if rest.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{rest}", self.path)
        }
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

// ===== RouteEntry =====

/// One row of the route table.
pub struct RouteEntry {
    name: &'static str,
    pattern: Option<PathPattern>,
    exact: bool,
    producer: Box<dyn ContentProducer>,
    fallback: Option<Page>,
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_ref().map(PathPattern::as_str))
            .field("exact", &self.exact)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl RouteEntry {
    /// Entry matching `pattern` exactly.
    pub fn exact(
        name: &'static str,
        pattern: &str,
        producer: impl ContentProducer + 'static,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            name,
            pattern: Some(PathPattern::parse(pattern)?),
            exact: true,
            producer: Box::new(producer),
            fallback: None,
        })
    }

    /// Entry matching any path that starts with `pattern`'s segments.
    pub fn prefix(
        name: &'static str,
        pattern: &str,
        producer: impl ContentProducer + 'static,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            name,
            pattern: Some(PathPattern::parse(pattern)?),
            exact: false,
            producer: Box::new(producer),
            fallback: None,
        })
    }

    /// Pattern-less entry matching everything. Must be declared last.
    pub fn catch_all(name: &'static str, producer: impl ContentProducer + 'static) -> Self {
        Self {
            name,
            pattern: None,
            exact: false,
            producer: Box::new(producer),
            fallback: None,
        }
    }

    /// Page shown instead of the stock fallback when this route's producer fails.
    #[must_use]
    pub fn with_fallback(mut self, page: Page) -> Self {
        self.fallback = Some(page);
        self
    }

    /// Route name, used in logs and tests.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is the catch-all.
    pub fn is_catch_all(&self) -> bool {
        self.pattern.is_none()
    }
}

// ===== RouteTable =====

/// A resolved location: which entry matched and with what parameters.
pub struct Resolved<'t> {
    /// Name of the matched entry.
    pub name: &'static str,
    /// Parameters for the producer.
    pub route: RouteMatch,
    /// Route-specific fallback page, if declared.
    pub fallback: Option<&'t Page>,
    producer: &'t dyn ContentProducer,
}

impl Resolved<'_> {
    /// Run the matched producer.
    pub fn produce(&self) -> Result<Content, ContentError> {
        self.producer.produce(&self.route)
    }
}

/// Ordered route table. First match wins; the catch-all always matches.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: RouteEntry,
}

impl RouteTable {
    /// Build a table, checking that exactly the last entry is a catch-all.
    pub fn new(mut entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let fallback = match entries.pop() {
            Some(last) if last.is_catch_all() => last,
            _ => return Err(RouteError::MissingCatchAll),
        };
        if let Some(early) = entries.iter().find(|e| e.is_catch_all()) {
            return Err(RouteError::CatchAllNotLast(early.name));
        }
        Ok(Self { entries, fallback })
    }

    /// Resolve a location (path plus optional `?query`).
    pub fn resolve(&self, location: &str) -> Resolved<'_> {
        let (path, query) = RouteMatch::from_location(location);

        for entry in &self.entries {
            let Some(pattern) = &entry.pattern else {
                continue;
            };
            if let Some(params) = pattern.match_path(&path, entry.exact) {
                debug!(route = entry.name, %path, "route matched");
                let params = params
                    .into_iter()
                    .map(|(k, v)| (k, v.to_string()))
                    .collect();
                return Resolved {
                    name: entry.name,
                    route: RouteMatch {
                        path,
                        params,
                        query,
                    },
                    fallback: entry.fallback.as_ref(),
                    producer: entry.producer.as_ref(),
                };
            }
        }

        debug!(route = self.fallback.name, %path, "no route matched, using catch-all");
        Resolved {
            name: self.fallback.name,
            route: RouteMatch {
                path,
                params: Vec::new(),
                query,
            },
            fallback: self.fallback.fallback.as_ref(),
            producer: self.fallback.producer.as_ref(),
        }
    }

    /// Entry names in declaration order, catch-all last.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(RouteEntry::name)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
