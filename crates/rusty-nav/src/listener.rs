//! Path-scoped change listeners
//!
//! A scoped listener only hears about transitions whose new path starts with
//! its prefix, and only when no other scoped listener with a longer matching
//! prefix exists. Listeners registered with `listen_to_all` skip both checks.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::history::HistoryEntry;

/// Kind of history transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Push,
    Pop,
    Replace,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Push => write!(f, "push"),
            ChangeKind::Pop => write!(f, "pop"),
            ChangeKind::Replace => write!(f, "replace"),
        }
    }
}

/// Event handed to listener callbacks
///
/// `current` is `None` only when the stack is empty after the transition.
/// After an unmatched push or replace, `current` and `previous` are the same
/// entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteChange<'a> {
    pub current: Option<&'a HistoryEntry>,
    pub previous: Option<&'a HistoryEntry>,
    pub kind: ChangeKind,
}

/// Callback invoked for each selected transition
pub type ListenerFn = Arc<dyn Fn(&RouteChange<'_>) + Send + Sync>;

/// One subscription
#[derive(Clone)]
pub struct ListenerRegistration {
    pub path_prefix: String,
    pub listen_to_all: bool,
    callback: ListenerFn,
}

impl ListenerRegistration {
    fn is_scoped_match(&self, path: &str) -> bool {
        !self.listen_to_all && path.starts_with(&self.path_prefix)
    }
}

impl fmt::Debug for ListenerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistration")
            .field("path_prefix", &self.path_prefix)
            .field("listen_to_all", &self.listen_to_all)
            .finish_non_exhaustive()
    }
}

/// Ordered listener set with specificity arbitration
#[derive(Debug, Clone, Default)]
pub struct ListenerSet {
    registrations: Vec<ListenerRegistration>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registration; existing ones on the same prefix stay
    pub fn add<F>(&mut self, path_prefix: impl Into<String>, callback: F, listen_to_all: bool)
    where
        F: Fn(&RouteChange<'_>) + Send + Sync + 'static,
    {
        let path_prefix = path_prefix.into();
        debug!(prefix = %path_prefix, listen_to_all, "listener added");
        self.registrations.push(ListenerRegistration {
            path_prefix,
            listen_to_all,
            callback: Arc::new(callback),
        });
    }

    /// Drops every registration whose prefix equals `path_prefix` exactly
    ///
    /// Returns how many were removed.
    pub fn remove(&mut self, path_prefix: &str) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.path_prefix != path_prefix);
        let removed = before - self.registrations.len();
        debug!(prefix = path_prefix, removed, "listeners removed");
        removed
    }

    pub fn registrations(&self) -> &[ListenerRegistration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Callbacks that should hear about a transition to `path`
    ///
    /// Registration order is kept. With no path (empty stack) only
    /// `listen_to_all` registrations are selected. Scoped registrations tied
    /// on prefix length all fire.
    pub fn select(&self, path: Option<&str>) -> Vec<ListenerFn> {
        let longest = path.and_then(|path| {
            self.registrations
                .iter()
                .filter(|r| r.is_scoped_match(path))
                .map(|r| r.path_prefix.len())
                .max()
        });

        self.registrations
            .iter()
            .filter(|r| {
                r.listen_to_all
                    || matches!(
                        (path, longest),
                        (Some(path), Some(len)) if r.is_scoped_match(path) && r.path_prefix.len() == len
                    )
            })
            .map(|r| Arc::clone(&r.callback))
            .collect()
    }

    /// Delivers `change` to the selected callbacks
    ///
    /// The callback list is captured before the first call, so the set seen
    /// by this pass is fixed.
    pub fn notify(&self, change: &RouteChange<'_>) {
        let path = change.current.map(|entry| entry.raw_input.as_str());
        let selected = self.select(path);
        trace!(
            kind = %change.kind,
            path = path.unwrap_or(""),
            selected = selected.len(),
            "notifying listeners"
        );
        for callback in selected {
            callback(change);
        }
    }
}
