//! Ordered route registry and first-match matcher
//!
//! Patterns are evaluated strictly in registration order and the first one
//! that accepts the path wins, even when a later registration would be a
//! more specific fit. There is no priority sorting.

use tracing::{debug, trace};

use super::pattern::{split_segments, RoutePattern};
use crate::params::ParamMap;
use crate::path::{is_nested_under, is_strictly_nested_under, trim_trailing_slash};
use crate::query::{parse_query, split_path_and_query};

/// Result of resolving one input against the registry
///
/// Borrowed from the registry for the duration of the call; copy what you
/// need into a [`crate::HistoryEntry`] to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The registration that accepted the path
    pub matched_pattern: &'a RoutePattern,
    /// Input path with the query string removed
    pub clean_path: String,
    /// `:name` bindings in segment order
    pub path_parameters: ParamMap,
    /// Decoded query string pairs
    pub query_parameters: ParamMap,
}

/// Registered route patterns, kept in insertion order
///
/// # Examples
///
/// ```
/// use rusty_nav::RouteRegistry;
///
/// let mut registry = RouteRegistry::new();
/// registry.add_route("/user/:id");
/// registry.add_route("/user/settings");
///
/// // First registration wins
/// let result = registry.match_route("/user/settings").unwrap();
/// assert_eq!(result.matched_pattern.pattern(), "/user/:id");
/// assert_eq!(result.path_parameters.get("id"), Some("settings"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    patterns: Vec<RoutePattern>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and appends a pattern; duplicates are kept
    pub fn add_route(&mut self, pattern: impl Into<String>) {
        let parsed = RoutePattern::parse(pattern);
        debug!(
            pattern = parsed.pattern(),
            wildcard = parsed.is_wildcard(),
            "registered route"
        );
        self.patterns.push(parsed);
    }

    /// All registrations in order
    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Resolves an input (path plus optional query) to the first accepting pattern
    pub fn match_route(&self, input: &str) -> Option<MatchResult<'_>> {
        let (clean_path, query) = split_path_and_query(input);
        let segments = split_segments(clean_path);

        let Some(matched) = self.patterns.iter().find(|p| p.matches(&segments)) else {
            trace!(input, "no route matched");
            return None;
        };

        trace!(input, pattern = matched.pattern(), "route matched");
        Some(MatchResult {
            matched_pattern: matched,
            clean_path: clean_path.to_string(),
            path_parameters: matched.extract_parameters(&segments),
            query_parameters: query.map(parse_query).unwrap_or_default(),
        })
    }

    pub fn is_registered(&self, input: &str) -> bool {
        self.match_route(input).is_some()
    }

    /// Patterns equal to `base_path` or nested under it
    ///
    /// A trailing slash on `base_path` is ignored, so `"/"` selects every
    /// pattern that starts with `/`. Order follows registration and repeated
    /// pattern strings appear once.
    pub fn routes_from(&self, base_path: &str) -> Vec<String> {
        let base = trim_trailing_slash(base_path);
        self.collect_unique(|p| is_nested_under(p, base))
    }

    /// Patterns strictly nested under `base_path`, excluding the base itself
    pub fn sub_routes_from(&self, base_path: &str) -> Vec<String> {
        let base = trim_trailing_slash(base_path);
        self.collect_unique(|p| is_strictly_nested_under(p, base))
    }

    fn collect_unique(&self, keep: impl Fn(&str) -> bool) -> Vec<String> {
        self.patterns
            .iter()
            .map(RoutePattern::pattern)
            .filter(|p| keep(p))
            .fold(Vec::new(), |mut acc, p| {
                if !acc.iter().any(|seen: &String| seen == p) {
                    acc.push(p.to_string());
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(patterns: &[&str]) -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        for p in patterns {
            registry.add_route(*p);
        }
        registry
    }

    #[test]
    fn test_duplicates_are_retained() {
        let registry = registry(&["/home", "/home"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.routes_from("/home"), vec!["/home".to_string()]);
    }

    #[test]
    fn test_match_strips_query() {
        let registry = registry(&["/search"]);
        let result = registry.match_route("/search?foo=bar&baz=qux").unwrap();
        assert_eq!(result.clean_path, "/search");
        assert!(result.path_parameters.is_empty());
        assert_eq!(result.query_parameters.get("foo"), Some("bar"));
        assert_eq!(result.query_parameters.get("baz"), Some("qux"));
    }

    #[test]
    fn test_no_match() {
        let registry = registry(&["/home"]);
        assert!(registry.match_route("/away").is_none());
        assert!(!registry.is_registered("/away"));
        assert!(registry.is_registered("/home/"));
    }

    #[test]
    fn test_earlier_broad_wildcard_shadows_later_exact() {
        let registry = registry(&["/settings/*", "/settings/privacy"]);
        let result = registry.match_route("/settings/privacy").unwrap();
        assert_eq!(result.matched_pattern.pattern(), "/settings/*");
    }

    #[test]
    fn test_routes_from_trailing_slash() {
        let registry = registry(&["/profile", "/profile/edit", "/profiles"]);
        assert_eq!(
            registry.routes_from("/profile/"),
            vec!["/profile".to_string(), "/profile/edit".to_string()]
        );
    }

    #[test]
    fn test_sub_routes_exclude_base() {
        let registry = registry(&["/profile", "/profile/edit", "/profile/edit", "/home"]);
        assert_eq!(registry.sub_routes_from("/profile"), vec!["/profile/edit".to_string()]);
        assert!(registry.sub_routes_from("/home").is_empty());
    }
}
