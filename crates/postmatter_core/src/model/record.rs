//! Canonical metadata record.
//!
//! # Responsibility
//! - Hold the six well-known fields with fixed types.
//! - Carry every other key as an ordered extension field.
//!
//! # Invariants
//! - `date` is a UTC instant truncated to millisecond precision.
//! - `tags` and `categories` are always arrays, possibly empty.
//! - `description` is `None` rather than `Some("")`.

use crate::matter::dates;
use crate::matter::decoder::split_items;
use crate::model::value::{FieldMap, FieldValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields with reserved semantics and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownField {
    Title,
    Date,
    Draft,
    Tags,
    Categories,
    Description,
}

impl WellKnownField {
    /// Emission order used when no theme schema is supplied.
    pub const ORDERED: [WellKnownField; 6] = [
        WellKnownField::Title,
        WellKnownField::Date,
        WellKnownField::Draft,
        WellKnownField::Tags,
        WellKnownField::Categories,
        WellKnownField::Description,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Draft => "draft",
            Self::Tags => "tags",
            Self::Categories => "categories",
            Self::Description => "description",
        }
    }

    /// Exact, case-sensitive key match.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|field| field.key() == key)
    }
}

/// Decoded front matter of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    #[serde(with = "canonical_date")]
    pub date: DateTime<Utc>,
    pub draft: bool,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extension fields in first-appearance order.
    #[serde(default)]
    pub extra: FieldMap,
}

impl MetadataRecord {
    /// Creates a draft record with empty taxonomies.
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            date: dates::canonical(date),
            draft: true,
            tags: Vec::new(),
            categories: Vec::new(),
            description: None,
            extra: FieldMap::new(),
        }
    }

    /// Returns the value stored under `key`, well-known or extension.
    ///
    /// Well-known fields are projected into `FieldValue`; `date` becomes its
    /// canonical string. Returns `None` for unknown keys and unset
    /// descriptions.
    pub fn value_of(&self, key: &str) -> Option<FieldValue> {
        let Some(field) = WellKnownField::from_key(key) else {
            return self.extra.get(key).cloned();
        };
        match field {
            WellKnownField::Title => Some(FieldValue::String(self.title.clone())),
            WellKnownField::Date => Some(FieldValue::String(dates::format_instant(&self.date))),
            WellKnownField::Draft => Some(FieldValue::Bool(self.draft)),
            WellKnownField::Tags => Some(FieldValue::StringArray(self.tags.clone())),
            WellKnownField::Categories => Some(FieldValue::StringArray(self.categories.clone())),
            WellKnownField::Description => self.description.clone().map(FieldValue::String),
        }
    }

    /// Stores `value` under `key`, coercing well-known fields to their types.
    ///
    /// Extension keys are stored as given. A well-known key never becomes
    /// `Missing`: `draft` is true only for `true`/`"true"`, dates fall back to
    /// now, and a string for `tags`/`categories` is split on commas.
    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        let Some(field) = WellKnownField::from_key(&key) else {
            self.extra.insert(key, value);
            return;
        };
        match field {
            WellKnownField::Title => self.title = value.literal().unwrap_or_default(),
            WellKnownField::Description => {
                self.description = value.literal().filter(|text| !text.is_empty());
            }
            WellKnownField::Draft => {
                self.draft =
                    matches!(value, FieldValue::Bool(true)) || value.as_str() == Some("true");
            }
            WellKnownField::Date => {
                self.date = dates::normalize_or_now(&value.literal().unwrap_or_default());
            }
            WellKnownField::Tags => self.tags = into_items(value),
            WellKnownField::Categories => self.categories = into_items(value),
        }
    }
}

fn into_items(value: FieldValue) -> Vec<String> {
    match value {
        FieldValue::StringArray(items) => items,
        FieldValue::String(text) => split_items(&text),
        FieldValue::Missing => Vec::new(),
        FieldValue::Bool(_) | FieldValue::Number(_) => value.literal().into_iter().collect(),
    }
}

/// Serde adapter writing dates in the canonical front-matter form.
mod canonical_date {
    use crate::matter::dates;
    use chrono::{DateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dates::format_instant(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let literal = String::deserialize(deserializer)?;
        dates::parse_instant(&literal)
            .ok_or_else(|| D::Error::custom(format!("invalid date literal `{literal}`")))
    }
}

/// Record used when a document carries no usable front matter.
pub fn default_record() -> MetadataRecord {
    MetadataRecord::new(String::new(), dates::now_instant())
}

#[cfg(test)]
mod tests {
    use super::{default_record, MetadataRecord, WellKnownField};
    use crate::model::value::FieldValue;
    use chrono::{TimeZone, Utc};

    #[test]
    fn default_record_matches_documented_defaults() {
        let record = default_record();
        assert_eq!(record.title, "");
        assert!(record.draft);
        assert!(record.tags.is_empty());
        assert!(record.categories.is_empty());
        assert_eq!(record.description, None);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn from_key_is_case_sensitive() {
        assert_eq!(WellKnownField::from_key("tags"), Some(WellKnownField::Tags));
        assert_eq!(WellKnownField::from_key("Tags"), None);
    }

    #[test]
    fn value_of_projects_well_known_fields() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut record = MetadataRecord::new("Hello", date);
        record.extra.insert("weight", FieldValue::Number(3));

        assert_eq!(record.value_of("title"), Some(FieldValue::from("Hello")));
        assert_eq!(
            record.value_of("date"),
            Some(FieldValue::from("2024-01-01T00:00:00.000Z"))
        );
        assert_eq!(record.value_of("draft"), Some(FieldValue::Bool(true)));
        assert_eq!(record.value_of("description"), None);
        assert_eq!(record.value_of("weight"), Some(FieldValue::Number(3)));
        assert_eq!(record.value_of("unknown"), None);
    }

    #[test]
    fn set_coerces_well_known_fields() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut record = MetadataRecord::new("Hello", date);
        record.set("draft", FieldValue::from("yes"));
        record.set("tags", FieldValue::from("a, b"));
        record.set("description", FieldValue::from(""));
        record.set("date", FieldValue::from("2024-03-04T05:06:07+01:00"));
        record.set("series", FieldValue::from("Intro"));

        assert!(!record.draft);
        assert_eq!(record.tags, vec!["a", "b"]);
        assert_eq!(record.description, None);
        assert_eq!(
            record.value_of("date"),
            Some(FieldValue::from("2024-03-04T04:06:07.000Z"))
        );
        assert_eq!(record.extra.get("series"), Some(&FieldValue::from("Intro")));
    }

    #[test]
    fn json_uses_canonical_dates_and_plain_extension_values() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut record = MetadataRecord::new("Hello", date);
        record.extra.insert("weight", FieldValue::Number(3));
        record.extra.insert("cover", FieldValue::Missing);

        let json = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(json["date"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["extra"]["weight"], 3);
        assert!(json.get("description").is_none());

        let back: MetadataRecord = serde_json::from_value(json).expect("record should deserialize");
        assert_eq!(back, record);
    }
}
