//! Splitting navigation input into path and query string
//!
//! Percent-decoding is delegated to `urlencoding`; this module only knows
//! the `key=value&key=value` layout.

use std::borrow::Cow;

use crate::params::ParamMap;

/// Splits raw input into its clean path and optional query string
///
/// A `#fragment` is dropped before the split.
///
/// # Examples
///
/// ```
/// use rusty_nav::query::split_path_and_query;
///
/// assert_eq!(split_path_and_query("/search?q=rust"), ("/search", Some("q=rust")));
/// assert_eq!(split_path_and_query("/docs#intro"), ("/docs", None));
/// ```
pub fn split_path_and_query(input: &str) -> (&str, Option<&str>) {
    let without_fragment = input.split_once('#').map_or(input, |(before, _)| before);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    }
}

/// Parses a query string into an ordered map
///
/// Repeated keys keep the last value. A key without `=` maps to an empty
/// value. Keys and values are percent-decoded, with `+` read as a space.
///
/// # Examples
///
/// ```
/// use rusty_nav::query::parse_query;
///
/// let params = parse_query("foo=bar&baz=qux&foo=last");
/// assert_eq!(params.get("foo"), Some("last"));
/// assert_eq!(params.get("baz"), Some("qux"));
/// ```
pub fn parse_query(query: &str) -> ParamMap {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Decodes one query component, keeping the raw text if it is not valid UTF-8
fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    decoded.unwrap_or_else(|_| spaced.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_query() {
        assert_eq!(split_path_and_query("/home"), ("/home", None));
    }

    #[test]
    fn test_split_with_empty_query() {
        assert_eq!(split_path_and_query("/home?"), ("/home", Some("")));
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_split_query_then_fragment() {
        assert_eq!(split_path_and_query("/a?x=1#top"), ("/a", Some("x=1")));
    }

    #[test]
    fn test_parse_query_decodes() {
        let params = parse_query("name=Jane%20Doe&tag=a+b&flag");
        assert_eq!(params.get("name"), Some("Jane Doe"));
        assert_eq!(params.get("tag"), Some("a b"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_parse_query_keeps_invalid_encoding() {
        let params = parse_query("bad=%FF");
        assert_eq!(params.get("bad"), Some("%FF"));
    }

    #[test]
    fn test_parse_query_value_with_equals() {
        let params = parse_query("expr=a=b");
        assert_eq!(params.get("expr"), Some("a=b"));
    }
}
