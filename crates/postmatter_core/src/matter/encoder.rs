//! Record to block text.
//!
//! # Responsibility
//! - Emit one line per field (plus item lines for Yaml block arrays).
//! - Order fields by theme schema when one is supplied, else by the fixed
//!   well-known order followed by extensions in insertion order.
//!
//! # Invariants
//! - Output is a pure function of `(record, dialect, schema)`.
//! - Every emitted line ends with `\n`.
//! - Date fields are re-canonicalized with the same helpers the decoder uses.

use crate::matter::dates;
use crate::matter::decoder::{dequote, split_items};
use crate::model::dialect::Dialect;
use crate::model::record::{MetadataRecord, WellKnownField};
use crate::model::value::FieldValue;
use crate::theme::schema::{FieldSchema, FieldType};
use log::debug;

/// Encodes `record` as block text, without marker lines.
pub fn encode_block(
    record: &MetadataRecord,
    dialect: Dialect,
    schema: Option<&[FieldSchema]>,
) -> String {
    let mut writer = LineWriter::new(dialect);
    match schema {
        Some(fields) => write_with_schema(&mut writer, record, fields),
        None => write_generic(&mut writer, record),
    }
    debug!(
        "event=matter_encode module=matter status=ok dialect={} themed={} lines={}",
        dialect,
        schema.is_some(),
        writer.lines
    );
    writer.finish()
}

/// Encodes a full document: marker, block, marker, then `body` untouched.
pub fn encode_document(
    record: &MetadataRecord,
    body: &str,
    dialect: Dialect,
    schema: Option<&[FieldSchema]>,
) -> String {
    let block = encode_block(record, dialect, schema);
    let marker = dialect.marker();
    let mut document = String::with_capacity(block.len() + body.len() + 2 * marker.len() + 2);
    document.push_str(marker);
    document.push('\n');
    document.push_str(&block);
    document.push_str(marker);
    document.push('\n');
    document.push_str(body);
    document
}

fn write_generic(writer: &mut LineWriter, record: &MetadataRecord) {
    for field in WellKnownField::ORDERED {
        let key = field.key();
        match field {
            WellKnownField::Title => writer.quoted(key, &record.title),
            WellKnownField::Date => writer.date(key, &dates::format_instant(&record.date)),
            WellKnownField::Draft => writer.bare(key, if record.draft { "true" } else { "false" }),
            WellKnownField::Tags => writer.array(key, &record.tags, false),
            WellKnownField::Categories => writer.array(key, &record.categories, false),
            WellKnownField::Description => {
                if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
                    writer.quoted(key, description);
                }
            }
        }
    }

    for (key, value) in record.extra.iter() {
        match value {
            FieldValue::Missing => {}
            FieldValue::String(text) if text.is_empty() => {}
            FieldValue::String(text) if dates::is_date_field(key) || dates::is_date_like(text) => {
                writer.date(key, &dates::canonical_literal(text));
            }
            FieldValue::String(text) => writer.quoted(key, text),
            FieldValue::Bool(_) | FieldValue::Number(_) => {
                writer.bare(key, &value.literal().unwrap_or_default());
            }
            FieldValue::StringArray(items) => writer.array(key, items, false),
        }
    }
}

fn write_with_schema(writer: &mut LineWriter, record: &MetadataRecord, schema: &[FieldSchema]) {
    for field in schema {
        let Some(value) = record.value_of(field.key) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        let key = field.key;
        match (field.field_type, &value) {
            (FieldType::Date, _) => {
                let literal = value.literal().unwrap_or_default();
                writer.date(key, &dates::canonical_literal(&literal));
            }
            (FieldType::Tags, FieldValue::StringArray(items)) => writer.array(key, items, true),
            (FieldType::Tags, FieldValue::String(text)) => {
                writer.array(key, &split_items(text), true);
            }
            (FieldType::Boolean | FieldType::Number | FieldType::Select, _)
            | (_, FieldValue::Bool(_) | FieldValue::Number(_)) => {
                writer.bare(key, &value.literal().unwrap_or_default());
            }
            (_, FieldValue::StringArray(items)) => writer.array(key, items, true),
            (_, FieldValue::String(text)) => writer.quoted(key, text),
            (_, FieldValue::Missing) => {}
        }
    }
}

/// Accumulates encoded lines for one dialect.
struct LineWriter {
    dialect: Dialect,
    out: String,
    lines: usize,
}

impl LineWriter {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            out: String::new(),
            lines: 0,
        }
    }

    fn bare(&mut self, key: &str, literal: &str) {
        self.line(key, literal);
    }

    fn quoted(&mut self, key: &str, text: &str) {
        let quoted = self.quote(text);
        self.line(key, &quoted);
    }

    /// Yaml writes timestamps bare, Toml single-quotes them.
    fn date(&mut self, key: &str, canonical: &str) {
        match self.dialect {
            Dialect::Yaml => self.bare(key, canonical),
            Dialect::Toml => self.quoted(key, canonical),
        }
    }

    fn array(&mut self, key: &str, items: &[String], quote_items: bool) {
        if items.is_empty() {
            self.line(key, "[]");
            return;
        }
        match self.dialect.item_marker() {
            Some(marker) => {
                self.out.push_str(key);
                self.out.push(self.dialect.separator());
                self.out.push('\n');
                self.lines += 1;
                for item in items {
                    // Items that already look quoted must be quoted again to survive decode.
                    let item = if quote_items || dequote(item).1 {
                        self.quote(item)
                    } else {
                        single_line(item)
                    };
                    self.out.push_str("  ");
                    self.out.push(marker);
                    self.out.push(' ');
                    self.out.push_str(&item);
                    self.out.push('\n');
                    self.lines += 1;
                }
            }
            None => {
                let joined = items
                    .iter()
                    .map(|item| self.quote(item))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(key, &format!("[{joined}]"));
            }
        }
    }

    fn quote(&self, text: &str) -> String {
        let quote = self.dialect.quote();
        format!("{quote}{}{quote}", single_line(text))
    }

    fn line(&mut self, key: &str, value: &str) {
        self.out.push_str(key);
        self.out.push_str(self.dialect.separator_literal());
        self.out.push_str(value);
        self.out.push('\n');
        self.lines += 1;
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Block values are single-line; embedded line breaks become spaces.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
