//! Path templates such as `/article/:id(\d+)/`.
//!
//! A template is split on `/` into segments. Each segment is either a
//! literal, a `:name` capture (any non-empty text), or a `:name(\d+)`
//! capture restricted to ASCII digits.

use super::RouteError;

/// Constraint on a captured segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Any non-empty segment.
    Any,
    /// One or more ASCII digits.
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param { name: String, capture: Capture },
}

impl Segment {
    fn parse(raw: &str, template: &str) -> Result<Self, RouteError> {
        let Some(spec) = raw.strip_prefix(':') else {
            if raw.contains(['(', ')', ':']) {
                return Err(RouteError::invalid(template, "reserved character in literal segment"));
            }
            return Ok(Self::Literal(raw.to_string()));
        };

        let (name, capture) = match spec.split_once('(') {
            None => (spec, Capture::Any),
            Some((name, constraint)) => match constraint {
                r"\d+)" => (name, Capture::Numeric),
                _ => {
                    return Err(RouteError::invalid(
                        template,
                        format!("unsupported constraint in segment {raw:?}"),
                    ))
                }
            },
        };

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(RouteError::invalid(
                template,
                format!("bad parameter name in segment {raw:?}"),
            ));
        }

        Ok(Self::Param {
            name: name.to_string(),
            capture,
        })
    }

    fn matches<'p>(&self, segment: &'p str) -> Option<Option<(&str, &'p str)>> {
        match self {
            Self::Literal(lit) => (lit == segment).then_some(None),
            Self::Param { name, capture } => {
                let ok = match capture {
                    Capture::Any => !segment.is_empty(),
                    Capture::Numeric => {
                        !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
                    }
                };
                ok.then_some(Some((name.as_str(), segment)))
            }
        }
    }
}

/// Parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a template. Templates must start with `/`.
    pub fn parse(template: &str) -> Result<Self, RouteError> {
        if !template.starts_with('/') {
            return Err(RouteError::invalid(template, "must start with '/'"));
        }
        let segments = template
            .split('/')
            .map(|raw| Segment::parse(raw, template))
            .collect::<Result<Vec<_>, _>>()?;

        let mut names: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param { name, .. } => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        if names.len() != count {
            return Err(RouteError::invalid(template, "duplicate parameter name"));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match `path` (no query string) against this template.
    ///
    /// With `exact`, every segment must match, trailing slash included.
    /// Otherwise the template need only match a leading run of whole
    /// segments, so `/article/` covers `/article/42/` but `/art` does not
    /// cover `/article/`.
    ///
    /// Returns the captured parameters on success.
    pub fn match_path<'p>(&self, path: &'p str, exact: bool) -> Option<Vec<(String, &'p str)>> {
        let path_segments: Vec<&str> = path.split('/').collect();

        let pattern = if exact {
            if path_segments.len() != self.segments.len() {
                return None;
            }
            &self.segments[..]
        } else {
            // A trailing slash in the template must not demand an empty segment mid-path.
            let trimmed = match self.segments.split_last() {
                Some((Segment::Literal(last), rest)) if last.is_empty() && !rest.is_empty() => rest,
                _ => &self.segments[..],
            };
            if path_segments.len() < trimmed.len() {
                return None;
            }
            trimmed
        };

        let mut params = Vec::new();
        for (segment, raw) in pattern.iter().zip(path_segments.iter().copied()) {
            if let Some(capture) = segment.matches(raw)? {
                params.push((capture.0.to_string(), capture.1));
            }
        }
        Some(params)
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
