//! Flat records: the unit every extractor produces.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A single cell value. Nothing nested survives extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Convert a JSON value, returning `None` for nulls, arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s.clone())),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Int)
                .or_else(|| n.as_f64().map(Scalar::Float)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Bool(_) | Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<u32> for Scalar {
    fn from(i: u32) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<u16> for Scalar {
    fn from(i: u16) -> Self {
        Scalar::Int(i64::from(i))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Insertion-ordered mapping of field name to scalar.
///
/// Field order matters: it becomes the column order of the exported table
/// for every column that is not explicitly moved to the front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    fields: Vec<(String, Scalar)>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Set a field from a JSON value; nulls and nested values are skipped.
    pub fn insert_json(&mut self, key: impl Into<String>, value: Option<&Value>) {
        if let Some(scalar) = value.and_then(Scalar::from_json) {
            self.insert(key, scalar);
        }
    }

    /// Copy every scalar member of a JSON object, in document order.
    pub fn merge_object(&mut self, object: &Map<String, Value>) {
        for (key, value) in object {
            self.insert_json(key.as_str(), Some(value));
        }
    }

    /// Copy every field of another record (later values win).
    pub fn extend_from(&mut self, other: &FlatRecord) {
        for (key, value) in &other.fields {
            self.insert(key.as_str(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FlatRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = FlatRecord::new();
        record.insert("a", 1i64);
        record.insert("b", 2i64);
        record.insert("a", 3i64);
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Scalar::Int(3)));
    }

    #[test]
    fn test_merge_object_skips_nested_and_null() {
        let value = json!({
            "goals": 10,
            "ptPctg": "61.2",
            "savePctg": 0.912,
            "active": true,
            "nested": {"x": 1},
            "list": [1, 2],
            "missing": null
        });
        let mut record = FlatRecord::new();
        record.merge_object(value.as_object().unwrap());

        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["goals", "ptPctg", "savePctg", "active"]);
        assert_eq!(record.get("savePctg"), Some(&Scalar::Float(0.912)));
        assert_eq!(record.get("active"), Some(&Scalar::Bool(true)));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let record: FlatRecord = [("Season", Scalar::Int(20192020)), ("Team", "Boston Bruins".into())]
            .into_iter()
            .collect();
        let s = serde_json::to_string(&record).unwrap();
        assert_eq!(s, r#"{"Season":20192020,"Team":"Boston Bruins"}"#);
    }
}
