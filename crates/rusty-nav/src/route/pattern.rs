//! Pattern parsing for registered routes
//!
//! A registration string such as `/users/:id` or `/settings/*` is split into
//! typed segments once, at registration time. Matching then works on the
//! pre-split segments of the incoming path.

use std::fmt;

use crate::params::ParamMap;

/// Marker token that turns a pattern into a prefix (wildcard) pattern
const WILDCARD: &str = "*";

/// One `/`-delimited component of a route pattern
///
/// # Examples
///
/// ```
/// use rusty_nav::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("about"), Segment::Literal("about".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text that must equal the path segment exactly
    Literal(String),
    /// `:name` segment binding whatever value sits at its position
    Param(String),
}

impl Segment {
    /// Checks a single path segment against this pattern segment
    fn accepts(&self, value: &str) -> bool {
        match self {
            Segment::Literal(text) => text == value,
            Segment::Param(_) => !value.is_empty(),
        }
    }
}

/// Classifies a pattern segment (pure function)
///
/// A leading `:` makes the segment a parameter named by the rest of the
/// text; anything else is literal.
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Literal(segment.to_string()),
    }
}

/// Splits a path into its non-empty segments
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A parsed route registration
///
/// Two patterns built from the same text are still distinct registrations;
/// nothing here deduplicates.
///
/// # Examples
///
/// ```
/// use rusty_nav::RoutePattern;
///
/// let pattern = RoutePattern::parse("/user/:id");
/// assert!(pattern.matches(&["user", "42"]));
/// assert_eq!(pattern.extract_parameters(&["user", "42"]).get("id"), Some("42"));
///
/// let wildcard = RoutePattern::parse("/settings/*");
/// assert!(wildcard.is_wildcard());
/// assert!(wildcard.matches(&["settings", "anything", "deep"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
    is_wildcard: bool,
}

impl RoutePattern {
    /// Parses a registration string
    ///
    /// Empty segments and the bare `*` token are dropped. Any `*` in the
    /// string marks the pattern as a wildcard. Malformed input is accepted
    /// as whatever segments remain.
    pub fn parse(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = split_segments(&pattern)
            .into_iter()
            .filter(|s| *s != WILDCARD)
            .map(classify_segment)
            .collect();
        let is_wildcard = pattern.contains(WILDCARD);

        Self {
            pattern,
            segments,
            is_wildcard,
        }
    }

    /// The original registration string
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// Parameter names in segment order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Checks whether the given path segments satisfy this pattern
    ///
    /// Exact patterns need the same segment count. Wildcard patterns only
    /// check their own segments as a prefix; extra trailing path segments
    /// are ignored.
    pub fn matches(&self, path_segments: &[&str]) -> bool {
        let count_ok = if self.is_wildcard {
            path_segments.len() >= self.segments.len()
        } else {
            path_segments.len() == self.segments.len()
        };

        count_ok
            && self
                .segments
                .iter()
                .zip(path_segments)
                .all(|(seg, value)| seg.accepts(value))
    }

    /// Binds each `:name` segment to the path value at its index
    ///
    /// Meant for segments already accepted by [`RoutePattern::matches`].
    pub fn extract_parameters(&self, path_segments: &[&str]) -> ParamMap {
        self.segments
            .iter()
            .zip(path_segments)
            .filter_map(|(seg, value)| match seg {
                Segment::Param(name) => Some((name.clone(), value.to_string())),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal() {
        assert_eq!(classify_segment("about"), Segment::Literal("about".to_string()));
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
    }

    #[test]
    fn test_parse_drops_empty_and_wildcard_segments() {
        let pattern = RoutePattern::parse("//settings/*");
        assert_eq!(
            pattern.segments(),
            &[Segment::Literal("settings".to_string())]
        );
        assert!(pattern.is_wildcard());
        assert_eq!(pattern.pattern(), "//settings/*");
    }

    #[test]
    fn test_parse_empty_pattern() {
        let pattern = RoutePattern::parse("");
        assert!(pattern.segments().is_empty());
        assert!(!pattern.is_wildcard());
        assert!(pattern.matches(&[]));
        assert!(!pattern.matches(&["home"]));
    }

    #[test]
    fn test_exact_requires_equal_length() {
        let pattern = RoutePattern::parse("/user/:id");
        assert!(pattern.matches(&["user", "7"]));
        assert!(!pattern.matches(&["user"]));
        assert!(!pattern.matches(&["user", "7", "edit"]));
        assert!(!pattern.matches(&["users", "7"]));
    }

    #[test]
    fn test_wildcard_prefix() {
        let pattern = RoutePattern::parse("/settings/*");
        assert!(pattern.matches(&["settings"]));
        assert!(pattern.matches(&["settings", "a", "b"]));
        assert!(!pattern.matches(&["profile", "a"]));
        assert!(!pattern.matches(&[]));
        assert!(pattern.extract_parameters(&["settings", "a"]).is_empty());
    }

    #[test]
    fn test_wildcard_binds_leading_params() {
        let pattern = RoutePattern::parse("/team/:team/*");
        assert!(pattern.matches(&["team", "core", "members", "3"]));
        let params = pattern.extract_parameters(&["team", "core", "members", "3"]);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("team"), Some("core"));
    }

    #[test]
    fn test_extract_parameters_in_segment_order() {
        let pattern = RoutePattern::parse("/org/:org/repo/:repo");
        let params = pattern.extract_parameters(&["org", "acme", "repo", "nav"]);
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["org", "repo"]);
        assert_eq!(params.get("repo"), Some("nav"));
    }

    #[test]
    fn test_param_names() {
        let pattern = RoutePattern::parse("/a/:x/b/:y");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
