//! Ordered parameter storage
//!
//! Path parameters keep segment order and query parameters keep their
//! first-seen order, so both live in a small insertion-ordered map rather
//! than a `HashMap`.

use serde::{Serialize, Serializer};

/// Insertion-ordered string map
///
/// Inserting an existing key replaces its value in place, which gives the
/// "last occurrence wins" rule for repeated query keys.
///
/// # Examples
///
/// ```
/// use rusty_nav::ParamMap;
///
/// let mut params = ParamMap::new();
/// params.insert("b", "1");
/// params.insert("a", "2");
/// params.insert("b", "3");
///
/// assert_eq!(params.get("b"), Some("3"));
/// assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParamMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = ParamMap::new();
        assert_eq!(params.insert("k", "1"), None);
        params.insert("other", "x");
        assert_eq!(params.insert("k", "2"), Some("1".to_string()));
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("k", "2"), ("other", "x")]);
    }

    #[test]
    fn test_from_iter_last_wins() {
        let params: ParamMap = vec![("a", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("a"), Some("2"));
        assert!(params.contains_key("a"));
        assert!(!params.contains_key("b"));
    }
}
