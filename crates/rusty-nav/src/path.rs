//! Path helpers for route-subset derivation
//!
//! All functions are **pure**: plain string slicing, no normalization and no
//! allocation beyond what the caller asks for.

/// Removes a single trailing `/`
///
/// # Examples
///
/// ```
/// use rusty_nav::path::trim_trailing_slash;
///
/// assert_eq!(trim_trailing_slash("/profile/"), "/profile");
/// assert_eq!(trim_trailing_slash("/"), "");
/// assert_eq!(trim_trailing_slash("/profile"), "/profile");
/// ```
pub fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Number of `/` characters in a path
pub fn depth(path: &str) -> usize {
    path.matches('/').count()
}

/// Everything before the last `/`, or `None` when the path has no `/`
///
/// # Examples
///
/// ```
/// use rusty_nav::path::parent_path;
///
/// assert_eq!(parent_path("/a/b/c"), Some("/a/b"));
/// assert_eq!(parent_path("/a"), Some(""));
/// assert_eq!(parent_path("a"), None);
/// ```
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|pos| &path[..pos])
}

/// True when `candidate` is strictly below `base` (`base/...`)
pub fn is_strictly_nested_under(candidate: &str, base: &str) -> bool {
    candidate
        .strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// True when `candidate` equals `base` or is nested below it
///
/// Equivalent to `candidate + "/"` starting with `base + "/"`.
pub fn is_nested_under(candidate: &str, base: &str) -> bool {
    candidate == base || is_strictly_nested_under(candidate, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth() {
        assert_eq!(depth("/"), 1);
        assert_eq!(depth("/a/b"), 2);
        assert_eq!(depth("plain"), 0);
    }

    #[test]
    fn test_nesting() {
        assert!(is_nested_under("/profile", "/profile"));
        assert!(is_nested_under("/profile/edit", "/profile"));
        assert!(!is_nested_under("/profiles", "/profile"));
        assert!(is_strictly_nested_under("/profile/edit", "/profile"));
        assert!(!is_strictly_nested_under("/profile", "/profile"));
    }

    #[test]
    fn test_root_base_is_empty_after_trim() {
        let base = trim_trailing_slash("/");
        assert!(is_nested_under("/home", base));
        assert!(is_nested_under("/profile/edit", base));
        assert!(!is_nested_under("home", base));
    }
}
