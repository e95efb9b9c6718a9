//! Absent-tolerant navigation over the converted capabilities tree.
//!
//! Every helper returns `None` at the first missing or wrongly shaped link
//! instead of failing.

use serde_json::Value;

use crate::xml::TEXT_KEY;

/// Child of an object node.
pub(crate) fn child<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.as_object()?.get(key)
}

/// Walk a path of element names.
pub(crate) fn at<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(node, |current, key| child(current, key))
}

/// Text content of a node: a string, a number, or an object with `#text`.
pub(crate) fn text(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map.get(TEXT_KEY).and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

pub(crate) fn text_at(node: &Value, path: &[&str]) -> Option<String> {
    at(node, path).and_then(text)
}

/// Node itself when single, its first element when repeated.
pub(crate) fn first(node: &Value) -> Option<&Value> {
    match node {
        Value::Array(items) => items.first(),
        Value::Null => None,
        other => Some(other),
    }
}

/// All text values of a repeated element, flattening cardinality.
pub(crate) fn texts(node: &Value) -> Vec<String> {
    match node {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        other => text(other).into_iter().collect(),
    }
}

/// Keyword values under one or more `Keywords` blocks.
///
/// OWS allows `Keywords` to repeat, each with its own `Keyword` list.
pub(crate) fn keyword_values(keywords: &Value) -> Vec<String> {
    match keywords {
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(|block| child(block, "Keyword"))
            .flat_map(texts)
            .collect(),
        block => child(block, "Keyword").map(texts).unwrap_or_default(),
    }
}

/// Presence test used for validation: missing, null, empty text and empty
/// objects all count as absent.
pub(crate) fn is_present(node: Option<&Value>) -> bool {
    match node {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_at_short_circuits() {
        let tree = json!({ "A": { "B": "leaf" }, "S": "text" });
        assert_eq!(text_at(&tree, &["A", "B"]), Some("leaf".to_string()));
        assert_eq!(at(&tree, &["A", "Missing", "Deeper"]), None);
        assert_eq!(at(&tree, &["S", "Child"]), None);
    }

    #[test]
    fn test_text_from_object_with_text_key() {
        assert_eq!(text(&json!({ "lang": "en", "#text": "hi" })), Some("hi".to_string()));
        assert_eq!(text(&json!({ "lang": "en" })), None);
        assert_eq!(text(&json!(["a"])), None);
    }

    #[test]
    fn test_keyword_values_flattens_blocks() {
        let single = json!({ "Keyword": "roads" });
        assert_eq!(keyword_values(&single), vec!["roads"]);

        let blocks = json!([{ "Keyword": ["a", "b"] }, { "Keyword": "c" }]);
        assert_eq!(keyword_values(&blocks), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_is_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&json!(""))));
        assert!(!is_present(Some(&json!({}))));
        assert!(!is_present(Some(&Value::Null)));
        assert!(is_present(Some(&json!({ "Title": "x" }))));
        assert!(is_present(Some(&json!("x"))));
    }
}
