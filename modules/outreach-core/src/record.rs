//! Schema-on-read access to scraped dataset items.
//!
//! Actor output schemas drift between versions, so records stay as raw JSON
//! objects and every read names its own default: `""` for strings, `0` for
//! counters, `false` for flags. A missing or mistyped field never fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dataset item (a tweet, a LinkedIn post) as an untyped field bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord(Map<String, Value>);

impl ContentRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap an arbitrary JSON value. Non-objects become an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    pub fn fields(&self) -> FieldView<'_> {
        FieldView(Some(&self.0))
    }

    pub fn str(&self, key: &str) -> &str {
        self.fields().str(key)
    }

    pub fn count(&self, key: &str) -> i64 {
        self.fields().count(key)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.fields().flag(key)
    }

    pub fn child(&self, key: &str) -> FieldView<'_> {
        self.fields().child(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Value> for ContentRecord {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// Borrowed view over a (possibly absent) JSON object.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a>(Option<&'a Map<String, Value>>);

impl<'a> FieldView<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|fields| fields.get(key))
    }

    /// String field, `""` when absent or not a string.
    pub fn str(&self, key: &str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// Integer counter, `0` when absent. Floats truncate; numeric strings parse.
    pub fn count(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX)))
                .or_else(|| n.as_f64().map(|v| v as i64))
                .unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        }
    }

    /// Boolean flag, `false` when absent or not a boolean.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or_default()
    }

    /// Nested object; an absent or non-object child yields an empty view.
    pub fn child(&self, key: &str) -> FieldView<'a> {
        FieldView(self.get(key).and_then(Value::as_object))
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ContentRecord {
        ContentRecord::from_value(value)
    }

    #[test]
    fn missing_fields_default() {
        let r = record(json!({ "text": "hi" }));
        assert_eq!(r.str("text"), "hi");
        assert_eq!(r.str("url"), "");
        assert_eq!(r.count("likeCount"), 0);
        assert!(!r.flag("isRetweet"));
    }

    #[test]
    fn mistyped_fields_default() {
        let r = record(json!({ "text": 5, "likeCount": [1], "isRetweet": "yes" }));
        assert_eq!(r.str("text"), "");
        assert_eq!(r.count("likeCount"), 0);
        assert!(!r.flag("isRetweet"));
    }

    #[test]
    fn counters_accept_floats_and_strings() {
        let r = record(json!({ "a": 12.9, "b": " 42 ", "c": "n/a", "d": u64::MAX }));
        assert_eq!(r.count("a"), 12);
        assert_eq!(r.count("b"), 42);
        assert_eq!(r.count("c"), 0);
        assert_eq!(r.count("d"), i64::MAX);
    }

    #[test]
    fn nested_children() {
        let r = record(json!({
            "author": { "first_name": "Satya", "stats": { "followers": 10 } },
            "stats": "not an object"
        }));
        assert_eq!(r.child("author").str("first_name"), "Satya");
        assert_eq!(r.child("author").child("stats").count("followers"), 10);
        assert!(!r.child("stats").is_present());
        assert_eq!(r.child("stats").count("like"), 0);
        assert_eq!(r.child("missing").child("deeper").str("x"), "");
    }

    #[test]
    fn non_object_values_become_empty_records() {
        let r = record(json!("just a string"));
        assert_eq!(r, ContentRecord::default());
    }

    #[test]
    fn deserializes_transparently() {
        let items: Vec<ContentRecord> =
            serde_json::from_str(r#"[{"text":"a"},{"text":"b","isRetweet":true}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[1].flag("isRetweet"));
    }
}
