//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse textual patterns such as `/stock/:ticker`
//! - Match a requested path against a pattern and capture parameters
//! - Build concrete paths from a pattern plus parameters (reverse routing)
//!
//! # Design Decisions
//! - Query string and fragment never take part in matching
//! - Static segments are case-insensitive unless `sensitive` is set
//! - One trailing slash is tolerated unless `strict` is set
//! - A parameter matches exactly one non-empty segment
//! - No regex: matching is a single pass over the segments

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::error::RouteError;

/// Captured parameters, keyed by parameter name.
pub type RouteParams = BTreeMap<String, String>;

/// Matching flags applied to every pattern of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Compare static segments case-sensitively.
    pub sensitive: bool,

    /// Reject a trailing slash on the requested path.
    pub strict: bool,
}

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text that must appear verbatim.
    Static(String),
    /// Named dynamic segment, written `:name`.
    Param(String),
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Static(text.into())
    }

    pub fn param(name: impl Into<String>) -> Self {
        Segment::Param(name.into())
    }
}

/// A compiled URL path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// The pattern `/`.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a pattern from already-validated segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Parse a textual pattern.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| RouteError::MissingLeadingSlash(pattern.to_string()))?;
        if rest.is_empty() {
            return Ok(Self::root());
        }
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments: Vec<Segment> = Vec::new();
        for raw in rest.split('/') {
            if raw.is_empty() {
                return Err(RouteError::EmptySegment(pattern.to_string()));
            }
            let Some(name) = raw.strip_prefix(':') else {
                segments.push(Segment::literal(raw));
                continue;
            };
            if name.is_empty()
                || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(RouteError::InvalidParamName {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            if segments
                .iter()
                .any(|s| matches!(s, Segment::Param(existing) if existing == name))
            {
                return Err(RouteError::DuplicateParam {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            segments.push(Segment::param(name));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the dynamic segments, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Returns the captured parameters if `path` matches this pattern.
    pub fn matches(&self, path: &str, options: &MatchOptions) -> Option<RouteParams> {
        let parts = split_path(path, options.strict)?;
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    let equal = if options.sensitive {
                        text == part
                    } else {
                        text.eq_ignore_ascii_case(part)
                    };
                    if !equal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    let value = urlencoding::decode(part).ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }

    /// Whether two patterns accept exactly the same paths.
    ///
    /// Parameter names are irrelevant: `/stock/:ticker` and `/stock/:id` overlap.
    pub fn overlaps(&self, other: &PathPattern, options: &MatchOptions) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Param(_), Segment::Param(_)) => true,
                    (Segment::Static(a), Segment::Static(b)) if options.sensitive => a == b,
                    (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
                    _ => false,
                })
    }

    /// Build a concrete path, percent-encoding parameter values.
    pub fn href(&self, params: &RouteParams) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(text) => out.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            pattern: self.to_string(),
                            param: name.clone(),
                        })?;
                    out.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => write!(f, "/{}", text)?,
                Segment::Param(name) => write!(f, "/:{}", name)?,
            }
        }
        Ok(())
    }
}

/// Split a requested path into segments.
///
/// Returns `None` for relative paths. With `strict == false` one trailing
/// empty segment is dropped.
fn split_path(path: &str, strict: bool) -> Option<Vec<&str>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return Some(Vec::new());
    }
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }

    let mut parts: Vec<&str> = rest.split('/').collect();
    if !strict && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    Some(parts)
}
