//! Errors raised by navigation operations
//!
//! Matching failures are not errors: an unknown path resolves to `None`.
//! The only contract violation is asking for the current entry of an
//! empty history stack.

/// Navigation error kinds
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The history stack holds no entries, so there is no current route
    #[error("navigation history is empty: no current route")]
    EmptyHistory,
}

/// Result alias for navigation operations
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_message() {
        assert_eq!(
            NavError::EmptyHistory.to_string(),
            "navigation history is empty: no current route"
        );
    }
}
