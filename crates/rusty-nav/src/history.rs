//! Navigation history stack
//!
//! Entries are resolved routes. The stack only grows or shrinks at the
//! tail; nothing in the middle is ever edited.

use serde::Serialize;

use crate::error::{NavError, NavResult};
use crate::params::ParamMap;
use crate::route::MatchResult;

/// One resolved navigation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Exact input given to push/replace, query string included
    pub raw_input: String,
    /// Registration string of the pattern that matched
    pub pattern: String,
    /// Path part of the input
    pub clean_path: String,
    pub path_parameters: ParamMap,
    pub query_parameters: ParamMap,
}

impl HistoryEntry {
    /// Copies the parts of a match that outlive the matcher call
    pub fn from_match(raw_input: impl Into<String>, result: &MatchResult<'_>) -> Self {
        Self {
            raw_input: raw_input.into(),
            pattern: result.matched_pattern.pattern().to_string(),
            clean_path: result.clean_path.clone(),
            path_parameters: result.path_parameters.clone(),
            query_parameters: result.query_parameters.clone(),
        }
    }
}

/// Result of a push or replace
///
/// An unmatched input leaves the stack alone but is not an error; listeners
/// are notified either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The input matched a route and a new entry is on top of the stack
    Matched,
    /// No route matched; the stack is unchanged
    Unmatched,
}

impl PushOutcome {
    pub fn is_matched(self) -> bool {
        matches!(self, PushOutcome::Matched)
    }
}

/// Ordered stack of history entries, oldest first
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the top entry
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Swaps the top entry for `entry`, returning the one it displaced
    ///
    /// On an empty stack this simply pushes.
    pub fn replace_last(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let displaced = self.entries.pop();
        self.entries.push(entry);
        displaced
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The top entry
    ///
    /// # Errors
    ///
    /// [`NavError::EmptyHistory`] when there are no entries.
    pub fn current(&self) -> NavResult<&HistoryEntry> {
        self.entries.last().ok_or(NavError::EmptyHistory)
    }

    pub fn try_current(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent raw input below `base_path`
    ///
    /// Scans newest to oldest for an input starting with `base_path + "/"`.
    /// The base itself never qualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_nav::Router;
    ///
    /// let mut router = Router::new();
    /// router.register_route("/shop");
    /// router.register_route("/shop/:item");
    /// router.push("/shop/lamp");
    /// router.push("/shop");
    ///
    /// assert_eq!(router.last_visited_subroute("/shop"), Some("/shop/lamp"));
    /// assert_eq!(router.last_visited_subroute("/cart"), None);
    /// ```
    pub fn last_visited_subroute(&self, base_path: &str) -> Option<&str> {
        let prefix = format!("{base_path}/");
        self.entries
            .iter()
            .rev()
            .map(|entry| entry.raw_input.as_str())
            .find(|raw| raw.starts_with(&prefix))
    }

    /// Raw inputs oldest to newest joined by `separator`
    pub fn debug_trace(&self, separator: &str) -> String {
        self.entries
            .iter()
            .map(|entry| entry.raw_input.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
