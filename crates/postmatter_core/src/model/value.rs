//! Tagged field values and the insertion-ordered field map.
//!
//! # Invariants
//! - `FieldMap` keys are unique; re-inserting a key replaces the value in place
//!   and keeps its original position.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

/// Value of one front-matter field.
///
/// Serialized untagged so JSON consumers see plain scalars and arrays
/// (`Missing` becomes `null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(i64),
    String(String),
    StringArray(Vec<String>),
    Missing,
}

impl FieldValue {
    /// Returns whether the encoder treats this value as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::String(value) => value.is_empty(),
            Self::StringArray(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Scalar literal without quoting. Arrays are comma-joined.
    pub fn literal(&self) -> Option<String> {
        match self {
            Self::String(value) => Some(value.clone()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Number(value) => Some(value.to_string()),
            Self::StringArray(items) => Some(items.join(", ")),
            Self::Missing => None,
        }
    }

    /// Stable lowercase type name used in logs and FFI envelopes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::StringArray(_) => "string_array",
            Self::Missing => "missing",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringArray(value)
    }
}

/// Insertion-ordered map from field name to value.
///
/// Small by nature (a handful of keys per document), so lookups are linear.
/// Serialized as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or replaces one entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl FromIterator<(String, FieldValue)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct FieldMapVisitor;

impl<'de> Visitor<'de> for FieldMapVisitor {
    type Value = FieldMap;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of front-matter fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldMap, A::Error> {
        let mut map = FieldMap::new();
        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldMap, FieldValue};

    #[test]
    fn insert_replaces_in_place_and_keeps_order() {
        let mut map = FieldMap::new();
        map.insert("weight", FieldValue::Number(1));
        map.insert("author", FieldValue::from("ana"));
        let previous = map.insert("weight", FieldValue::Number(2));

        assert_eq!(previous, Some(FieldValue::Number(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["weight", "author"]);
        assert_eq!(map.get("weight"), Some(&FieldValue::Number(2)));
    }

    #[test]
    fn empty_values_are_reported_as_empty() {
        assert!(FieldValue::Missing.is_empty());
        assert!(FieldValue::String(String::new()).is_empty());
        assert!(FieldValue::StringArray(vec![]).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::Number(0).is_empty());
    }

    #[test]
    fn serializes_as_plain_json_values() {
        let map: FieldMap = vec![
            ("toc".to_string(), FieldValue::Bool(true)),
            ("series".to_string(), FieldValue::from(vec!["rust".to_string()])),
            ("cover".to_string(), FieldValue::Missing),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&map).unwrap();
        assert_eq!(text, r#"{"toc":true,"series":["rust"],"cover":null}"#);

        let back: FieldMap = serde_json::from_str(r#"{"b":1,"a":"x","c":null}"#).unwrap();
        assert_eq!(back.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(back.get("c"), Some(&FieldValue::Missing));
    }
}
