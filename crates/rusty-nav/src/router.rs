//! The router aggregate
//!
//! [`Router`] owns the route registry, the history stack and the listener
//! set. Every navigation runs matcher, then history, then notification, to
//! completion before returning.

use tracing::debug;

use crate::config::RouterConfig;
use crate::error::NavResult;
use crate::history::{HistoryEntry, NavigationHistory, PushOutcome};
use crate::listener::{ChangeKind, ListenerSet, RouteChange};
use crate::path::{depth, is_nested_under, parent_path};
use crate::route::{MatchResult, RoutePattern, RouteRegistry};

/// Registry, history and listeners for one navigation context
///
/// Independent instances share nothing.
///
/// # Examples
///
/// ```
/// use rusty_nav::{ChangeKind, Router};
///
/// let mut router = Router::new();
/// router.register_route("/home");
/// router.register_route("/user/:id");
///
/// router.push("/home");
/// router.push("/user/42?tab=posts");
///
/// let current = router.current().unwrap();
/// assert_eq!(current.pattern, "/user/:id");
/// assert_eq!(current.path_parameters.get("id"), Some("42"));
/// assert_eq!(current.query_parameters.get("tab"), Some("posts"));
/// assert_eq!(router.history_debug(), "/home -> /user/42?tab=posts");
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    registry: RouteRegistry,
    history: NavigationHistory,
    listeners: ListenerSet,
    debug_separator: String,
}

impl Router {
    pub fn new() -> Self {
        Self::from_config(&RouterConfig::default())
    }

    /// Builds a router from configuration
    ///
    /// Routes are registered in the configured order, then `initial_route`
    /// is pushed if present.
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut router = Self {
            registry: RouteRegistry::new(),
            history: NavigationHistory::new(),
            listeners: ListenerSet::new(),
            debug_separator: config.debug_separator.clone(),
        };

        for pattern in &config.routes {
            router.register_route(pattern.as_str());
        }
        if let Some(initial) = &config.initial_route {
            router.push(initial);
        }
        router
    }

    // ------------------------------------------------------------------
    // Registration & matching
    // ------------------------------------------------------------------

    pub fn register_route(&mut self, pattern: impl Into<String>) {
        self.registry.add_route(pattern);
    }

    /// Registered patterns in registration order
    pub fn routes(&self) -> &[RoutePattern] {
        self.registry.patterns()
    }

    /// First registered pattern accepting `input`, or `None`
    pub fn match_route(&self, input: &str) -> Option<MatchResult<'_>> {
        self.registry.match_route(input)
    }

    pub fn is_registered(&self, input: &str) -> bool {
        self.registry.is_registered(input)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Resolves `input` and appends it to the history
    ///
    /// An unmatched input leaves the stack unchanged. Listeners are notified
    /// in both cases; after an unmatched push the event's `current` and
    /// `previous` are the same entry.
    pub fn push(&mut self, input: &str) -> PushOutcome {
        let outcome = match self.resolve(input) {
            Some(entry) => {
                self.history.push(entry);
                PushOutcome::Matched
            }
            None => PushOutcome::Unmatched,
        };
        debug!(input, ?outcome, depth = self.history.len(), "push");

        let entries = self.history.entries();
        let previous = match outcome {
            PushOutcome::Matched => entries.len().checked_sub(2).map(|i| &entries[i]),
            PushOutcome::Unmatched => entries.last(),
        };
        self.listeners.notify(&RouteChange {
            current: entries.last(),
            previous,
            kind: ChangeKind::Push,
        });
        outcome
    }

    /// Removes the top entry and returns it
    ///
    /// Popping an empty stack does nothing and notifies nobody. Any removal
    /// notifies, even when the new top entry equals the popped one by value.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        let popped = self.history.pop()?;
        debug!(input = %popped.raw_input, depth = self.history.len(), "pop");

        self.listeners.notify(&RouteChange {
            current: self.history.try_current(),
            previous: Some(&popped),
            kind: ChangeKind::Pop,
        });
        Some(popped)
    }

    /// Swaps the top entry for the resolution of `input`
    ///
    /// Unmatched input leaves the stack untouched. Listeners are notified
    /// either way.
    pub fn replace_last(&mut self, input: &str) -> PushOutcome {
        let (outcome, displaced) = match self.resolve(input) {
            Some(entry) => (PushOutcome::Matched, self.history.replace_last(entry)),
            None => (PushOutcome::Unmatched, None),
        };
        debug!(input, ?outcome, depth = self.history.len(), "replace");

        let current = self.history.try_current();
        let previous = match outcome {
            PushOutcome::Matched => displaced.as_ref(),
            PushOutcome::Unmatched => current,
        };
        self.listeners.notify(&RouteChange {
            current,
            previous,
            kind: ChangeKind::Replace,
        });
        outcome
    }

    /// Empties the history without notifying listeners
    pub fn clear_history(&mut self) {
        debug!(dropped = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// The current entry
    ///
    /// # Errors
    ///
    /// [`crate::NavError::EmptyHistory`] when nothing has been pushed (or the
    /// history was cleared).
    pub fn current(&self) -> NavResult<&HistoryEntry> {
        self.history.current()
    }

    pub fn try_current(&self) -> Option<&HistoryEntry> {
        self.history.try_current()
    }

    /// History entries, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_pop(&self) -> bool {
        !self.history.is_empty()
    }

    fn resolve(&self, input: &str) -> Option<HistoryEntry> {
        self.registry
            .match_route(input)
            .map(|result| HistoryEntry::from_match(input, &result))
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Subscribes `callback` to transitions under `path_prefix`
    ///
    /// With `listen_to_all` the callback hears every transition regardless
    /// of prefix or specificity.
    pub fn add_listener<F>(&mut self, path_prefix: impl Into<String>, callback: F, listen_to_all: bool)
    where
        F: Fn(&RouteChange<'_>) + Send + Sync + 'static,
    {
        self.listeners.add(path_prefix, callback, listen_to_all);
    }

    /// Removes all listeners registered on exactly `path_prefix`
    pub fn remove_listener(&mut self, path_prefix: &str) -> usize {
        self.listeners.remove(path_prefix)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn routes_from(&self, base_path: &str) -> Vec<String> {
        self.registry.routes_from(base_path)
    }

    pub fn sub_routes_from(&self, base_path: &str) -> Vec<String> {
        self.registry.sub_routes_from(base_path)
    }

    /// Sibling routes of the current entry
    ///
    /// Top-level entries (at most one `/`) yield just themselves. Deeper
    /// entries yield the registered routes at or under their parent, except
    /// that a non-root parent with only the current path beside it collapses
    /// to the current path alone.
    ///
    /// # Errors
    ///
    /// [`crate::NavError::EmptyHistory`] with no current entry.
    pub fn routes_from_current(&self) -> NavResult<Vec<String>> {
        let current = self.current()?.raw_input.as_str();
        if depth(current) <= 1 {
            return Ok(vec![current.to_string()]);
        }

        let parent = parent_path(current).unwrap_or_default();
        let routes = self.routes_from(parent);
        if routes.len() == 1 && routes[0] == current {
            return Ok(routes);
        }

        let siblings: Vec<String> = routes
            .into_iter()
            .filter(|route| is_nested_under(route, parent))
            .collect();
        let only_pair_with_current =
            siblings.len() == 2 && siblings.iter().any(|route| route == current);
        if only_pair_with_current && parent != "/" {
            return Ok(vec![current.to_string()]);
        }
        Ok(siblings)
    }

    /// Routes below the current entry, or below its parent when it has none
    ///
    /// # Errors
    ///
    /// [`crate::NavError::EmptyHistory`] with no current entry.
    pub fn sub_routes_from_current(&self) -> NavResult<Vec<String>> {
        let current = self.current()?.raw_input.as_str();
        let sub_routes = self.sub_routes_from(current);
        if sub_routes.is_empty() {
            if let Some(parent) = parent_path(current) {
                return Ok(self.sub_routes_from(parent));
            }
        }
        Ok(sub_routes)
    }

    pub fn last_visited_subroute(&self, base_path: &str) -> Option<&str> {
        self.history.last_visited_subroute(base_path)
    }

    /// Raw inputs, oldest first, joined by the configured separator
    pub fn history_debug(&self) -> String {
        self.history.debug_trace(&self.debug_separator)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;

    fn router(patterns: &[&str]) -> Router {
        let mut router = Router::new();
        for p in patterns {
            router.register_route(*p);
        }
        router
    }

    #[test]
    fn test_push_unmatched_keeps_stack() {
        let mut router = router(&["/home"]);
        assert_eq!(router.push("/home"), PushOutcome::Matched);
        assert_eq!(router.push("/missing"), PushOutcome::Unmatched);
        assert_eq!(router.history_len(), 1);
        assert_eq!(router.current().unwrap().raw_input, "/home");
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut router = router(&["/home"]);
        assert!(router.pop().is_none());
        assert!(!router.can_pop());
    }

    #[test]
    fn test_replace_last() {
        let mut router = router(&["/a", "/b"]);
        router.push("/a");
        assert_eq!(router.replace_last("/b"), PushOutcome::Matched);
        assert_eq!(router.history_len(), 1);
        assert_eq!(router.current().unwrap().raw_input, "/b");

        assert_eq!(router.replace_last("/zzz"), PushOutcome::Unmatched);
        assert_eq!(router.current().unwrap().raw_input, "/b");
    }

    #[test]
    fn test_replace_last_on_empty_pushes() {
        let mut router = router(&["/a"]);
        router.replace_last("/a");
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn test_introspection_requires_current() {
        let router = router(&["/a"]);
        assert_eq!(router.routes_from_current(), Err(NavError::EmptyHistory));
        assert_eq!(router.sub_routes_from_current(), Err(NavError::EmptyHistory));
    }

    #[test]
    fn test_from_config() {
        let config = RouterConfig {
            routes: vec!["/home".to_string(), "/about".to_string()],
            initial_route: Some("/home".to_string()),
            debug_separator: " > ".to_string(),
        };
        let mut router = Router::from_config(&config);
        assert_eq!(router.routes().len(), 2);
        assert_eq!(router.current().unwrap().raw_input, "/home");

        router.push("/about");
        assert_eq!(router.history_debug(), "/home > /about");
    }
}
