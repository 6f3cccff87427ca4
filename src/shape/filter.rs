//! Top-level field selection for filtered routes.

use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered list of top-level field names a route is restricted to.
///
/// An empty set means "no filtering". Entries are trimmed and blank entries
/// dropped, so an unset variable and `""` both produce the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterKeySet(Vec<String>);

impl FilterKeySet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keys.into_iter()
                .map(|k| k.as_ref().trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    /// Parse a comma-separated list such as `order_id, total`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl std::fmt::Display for FilterKeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Restrict `doc` to the fields named in `keys`, in `keys` order.
///
/// Values are moved out of `doc`, not cloned. Keys absent from the document
/// are skipped, and a repeated key only contributes its first occurrence.
/// An empty key set returns `doc` untouched.
#[must_use]
pub fn select(mut doc: Map<String, Value>, keys: &FilterKeySet) -> Map<String, Value> {
    if keys.is_empty() {
        return doc;
    }

    let mut selected = Map::with_capacity(keys.len());
    for key in keys.iter() {
        if let Some(value) = doc.remove(key) {
            selected.insert(key.to_string(), value);
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn keys_of(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn selects_in_filter_order() {
        let doc = object(json!({"z": 3, "y": 2, "x": 1}));
        let selected = select(doc, &FilterKeySet::new(["x", "z"]));
        assert_eq!(keys_of(&selected), vec!["x", "z"]);
        assert_eq!(selected["x"], json!(1));
        assert!(selected.get("y").is_none());
    }

    #[test]
    fn missing_keys_are_skipped() {
        let doc = object(json!({"a": 1}));
        let selected = select(doc, &FilterKeySet::new(["missing", "a"]));
        assert_eq!(keys_of(&selected), vec!["a"]);
    }

    #[test]
    fn empty_filter_is_identity() {
        let doc = object(json!({"b": 1, "a": {"c": [1, 2]}}));
        let expected = doc.clone();
        assert_eq!(select(doc, &FilterKeySet::default()), expected);
    }

    #[test]
    fn duplicate_keys_are_redundant() {
        let doc = object(json!({"a": 1, "b": 2}));
        let selected = select(doc, &FilterKeySet::new(["a", "a"]));
        assert_eq!(keys_of(&selected), vec!["a"]);
    }

    #[test]
    fn nested_values_are_kept_whole() {
        let doc = object(json!({"order": {"id": 7, "lines": [{"sku": "x"}]}, "noise": true}));
        let selected = select(doc, &FilterKeySet::new(["order"]));
        assert_eq!(selected["order"], json!({"id": 7, "lines": [{"sku": "x"}]}));
    }

    #[test]
    fn parse_trims_and_drops_blanks() {
        let keys = FilterKeySet::parse(" order_id , ,total,");
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["order_id", "total"]);
        assert!(FilterKeySet::parse("").is_empty());
        assert!(FilterKeySet::parse(" , ").is_empty());
    }
}
