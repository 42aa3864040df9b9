//! Raw field map to canonical record.
//!
//! # Responsibility
//! - Give the six well-known fields their declared types and defaults.
//! - Infer extension field types once, from literal shape or theme schema.
//!
//! # Invariants
//! - Inference rules are evaluated in `INFERENCE_ORDER` and never re-run.
//! - A schema type, when present, wins over literal inference.
//! - Dates always go through `dates::normalize_or_now`.

use crate::matter::dates;
use crate::matter::decoder::{split_items, RawFields, RawValue};
use crate::model::record::{MetadataRecord, WellKnownField};
use crate::model::value::FieldValue;
use crate::theme::schema::{field_for, FieldSchema, FieldType};
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("valid integer regex"));

/// Literal inference rules for extension fields without a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inference {
    Date,
    Array,
    QuotedText,
    Boolean,
    Integer,
}

const INFERENCE_ORDER: [Inference; 5] = [
    Inference::Date,
    Inference::Array,
    Inference::QuotedText,
    Inference::Boolean,
    Inference::Integer,
];

/// Builds the canonical record from decoded raw fields.
///
/// `schema` types extension fields declared by a theme; pass `None` for the
/// literal-shape rules only.
pub fn normalize(raw: RawFields, schema: Option<&[FieldSchema]>) -> MetadataRecord {
    let mut record = MetadataRecord::new(String::new(), dates::now_instant());

    for (key, value) in raw {
        match WellKnownField::from_key(&key) {
            Some(field) => apply_well_known(&mut record, field, value),
            None => {
                let declared = schema.and_then(|fields| field_for(fields, &key));
                let value = match declared {
                    Some(field) => coerce_to_schema(field.field_type, value),
                    None => infer(&key, value),
                };
                record.extra.insert(key, value);
            }
        }
    }

    record
}

fn apply_well_known(record: &mut MetadataRecord, field: WellKnownField, value: RawValue) {
    match field {
        WellKnownField::Title => record.title = raw_text(value),
        WellKnownField::Description => {
            let text = raw_text(value);
            record.description = (!text.is_empty()).then_some(text);
        }
        WellKnownField::Draft => {
            record.draft = matches!(value, RawValue::Scalar { ref text, .. } if text == "true");
        }
        WellKnownField::Date => record.date = dates::normalize_or_now(&raw_text(value)),
        WellKnownField::Tags => record.tags = coerce_string_array(value),
        WellKnownField::Categories => record.categories = coerce_string_array(value),
    }
}

/// Coerces a raw value into a string array.
///
/// Arrays are trimmed with empty elements dropped; a scalar is read as a
/// comma-separated list, so an empty scalar yields `[]`.
pub fn coerce_string_array(value: RawValue) -> Vec<String> {
    match value {
        RawValue::Array(items) => items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        RawValue::Scalar { text, .. } => split_items(&text),
    }
}

fn infer(key: &str, value: RawValue) -> FieldValue {
    INFERENCE_ORDER
        .into_iter()
        .find_map(|rule| apply_rule(rule, key, &value))
        .unwrap_or_else(|| FieldValue::String(raw_text(value)))
}

fn apply_rule(rule: Inference, key: &str, value: &RawValue) -> Option<FieldValue> {
    match (rule, value) {
        (Inference::Date, RawValue::Scalar { text, .. })
            if dates::is_date_field(key) || dates::is_date_like(text) =>
        {
            Some(canonical_date(text))
        }
        (Inference::Date, RawValue::Array(_)) if dates::is_date_field(key) => {
            Some(canonical_date(""))
        }
        (Inference::Array, RawValue::Array(items)) => Some(FieldValue::StringArray(items.clone())),
        (Inference::QuotedText, RawValue::Scalar { text, quoted: true }) => {
            Some(FieldValue::String(text.clone()))
        }
        (Inference::Boolean, RawValue::Scalar { text, quoted: false }) => match text.as_str() {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        (Inference::Integer, RawValue::Scalar { text, quoted: false })
            if INTEGER_RE.is_match(text) =>
        {
            // Out-of-range integers stay text.
            text.parse::<i64>().ok().map(FieldValue::Number)
        }
        _ => None,
    }
}

fn coerce_to_schema(field_type: FieldType, value: RawValue) -> FieldValue {
    match field_type {
        FieldType::Boolean => {
            FieldValue::Bool(matches!(value, RawValue::Scalar { ref text, .. } if text == "true"))
        }
        FieldType::Number => {
            let text = raw_text(value);
            match text.trim().parse::<i64>() {
                Ok(number) => FieldValue::Number(number),
                // Unparseable text is kept as written.
                Err(_) => FieldValue::String(text),
            }
        }
        FieldType::Tags => FieldValue::StringArray(coerce_string_array(value)),
        FieldType::Date => canonical_date(&raw_text(value)),
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Select
        | FieldType::Image => FieldValue::String(raw_text(value)),
    }
}

fn canonical_date(literal: &str) -> FieldValue {
    FieldValue::String(dates::canonical_literal(literal))
}

fn raw_text(value: RawValue) -> String {
    match value {
        RawValue::Scalar { text, .. } => text,
        RawValue::Array(items) => items.join(", "),
    }
}
