//! Front-matter document facade.
//!
//! # Responsibility
//! - Compose splitter, decoder, normalizer and encoder into document-level
//!   parse/serialize calls.
//! - Thread an optional theme schema through both directions.
//!
//! # Invariants
//! - Parsing never returns an error and never panics to the caller: an
//!   internal panic degrades to `(default_record(), raw, Yaml)`.
//! - Serializing is pure and leaves the body byte-for-byte unchanged.

use crate::logging::panic_payload_summary;
use crate::matter::decoder::{decode_block, LineDiagnostic};
use crate::matter::encoder::encode_document;
use crate::matter::normalizer::normalize;
use crate::matter::splitter::split_block;
use crate::model::dialect::Dialect;
use crate::model::record::{default_record, MetadataRecord, WellKnownField};
use crate::theme::registry::{defaults_for, schema_for};
use crate::theme::schema::FieldSchema;
use log::{debug, error};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Result of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub record: MetadataRecord,
    /// Text after the metadata block, or the whole input without one.
    pub body: String,
    /// Dialect of the block; `Yaml` when the document had none.
    pub dialect: Dialect,
    /// Whether a metadata block was found.
    pub has_front_matter: bool,
    /// Block lines that were skipped while decoding.
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParsedDocument {
    fn without_front_matter(raw: &str) -> Self {
        Self {
            record: default_record(),
            body: raw.to_string(),
            dialect: Dialect::Yaml,
            has_front_matter: false,
            diagnostics: Vec::new(),
        }
    }
}

/// Splits, decodes and normalizes `raw`.
pub fn parse_document(raw: &str) -> ParsedDocument {
    parse_guarded(raw, None)
}

/// Like `parse_document`, typing extension fields by the theme schema and
/// filling declared theme defaults for keys the document does not set.
///
/// Unknown theme ids use the generic schema.
pub fn parse_document_with_theme(raw: &str, theme_id: &str) -> ParsedDocument {
    let mut parsed = parse_guarded(raw, Some(schema_for(theme_id)));
    apply_theme_defaults(&mut parsed.record, theme_id);
    parsed
}

/// Encodes `record` in `dialect` and appends `body` unchanged.
pub fn serialize_document(record: &MetadataRecord, body: &str, dialect: Dialect) -> String {
    encode_document(record, body, dialect, None)
}

/// Encodes only the fields of the theme schema, in schema order.
pub fn serialize_document_with_theme(
    record: &MetadataRecord,
    body: &str,
    dialect: Dialect,
    theme_id: &str,
) -> String {
    encode_document(record, body, dialect, Some(schema_for(theme_id)))
}

/// Fills theme defaults for extension keys absent from `record`.
///
/// Well-known fields already carry their own defaults after decoding and are
/// left untouched.
pub fn apply_theme_defaults(record: &mut MetadataRecord, theme_id: &str) {
    for (key, value) in defaults_for(theme_id) {
        if WellKnownField::from_key(&key).is_some() || record.extra.contains_key(&key) {
            continue;
        }
        record.extra.insert(key, value);
    }
}

fn parse_guarded(raw: &str, schema: Option<&[FieldSchema]>) -> ParsedDocument {
    guard_parse(raw, || parse_unguarded(raw, schema))
}

fn guard_parse(raw: &str, parse: impl FnOnce() -> ParsedDocument) -> ParsedDocument {
    match catch_unwind(AssertUnwindSafe(parse)) {
        Ok(parsed) => parsed,
        Err(payload) => {
            error!(
                "event=document_parse module=service status=error fallback=default_record payload={}",
                panic_payload_summary(payload.as_ref())
            );
            ParsedDocument::without_front_matter(raw)
        }
    }
}

fn parse_unguarded(raw: &str, schema: Option<&[FieldSchema]>) -> ParsedDocument {
    let Some(split) = split_block(raw) else {
        debug!(
            "event=document_parse module=service status=ok front_matter=false bytes={}",
            raw.len()
        );
        return ParsedDocument::without_front_matter(raw);
    };

    let decoded = decode_block(split.block, split.dialect);
    let diagnostics = decoded.diagnostics;
    let record = normalize(decoded.fields, schema);
    debug!(
        "event=document_parse module=service status=ok front_matter=true dialect={} fields={} ignored_lines={}",
        split.dialect,
        record.extra.len() + WellKnownField::ORDERED.len(),
        diagnostics.len()
    );

    ParsedDocument {
        record,
        body: split.body.to_string(),
        dialect: split.dialect,
        has_front_matter: true,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_theme_defaults, guard_parse, parse_document, parse_document_with_theme,
        serialize_document,
    };
    use crate::model::dialect::Dialect;
    use crate::model::record::default_record;
    use crate::model::value::FieldValue;

    #[test]
    fn no_block_yields_whole_input_as_body() {
        let parsed = parse_document("Just text");
        assert!(!parsed.has_front_matter);
        assert_eq!(parsed.body, "Just text");
        assert_eq!(parsed.dialect, Dialect::Yaml);
        assert_eq!(parsed.record.title, "");
    }

    #[test]
    fn diagnostics_survive_to_the_caller() {
        let parsed = parse_document("---\ntitle: ok\nnot a pair\n---\n");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.record.title, "ok");
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn panic_inside_parse_falls_back_to_default_record() {
        let raw = "+++\ntitle = 'x'\n+++\nBody";
        let parsed = guard_parse(raw, || panic!("decoder failure"));
        assert!(!parsed.has_front_matter);
        assert_eq!(parsed.body, raw);
        assert_eq!(parsed.dialect, Dialect::Yaml);
        assert_eq!(parsed.record.title, "");
        assert!(parsed.record.draft);
        assert_eq!(parsed.record.tags, default_record().tags);
        assert!(parsed.record.extra.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn guard_passes_through_successful_parses() {
        let parsed = guard_parse("ignored", || parse_document("---\ntitle: ok\n---\n"));
        assert!(parsed.has_front_matter);
        assert_eq!(parsed.record.title, "ok");
    }

    #[test]
    fn theme_defaults_fill_only_absent_extension_keys() {
        let parsed = parse_document_with_theme("---\ntitle: x\ntoc: false\n---\n", "stack");
        assert_eq!(parsed.record.extra.get("toc"), Some(&FieldValue::Bool(false)));
        assert_eq!(parsed.record.extra.get("comments"), Some(&FieldValue::Bool(true)));
        assert_eq!(parsed.record.extra.get("math"), Some(&FieldValue::Bool(false)));

        let mut record = default_record();
        record.draft = false;
        apply_theme_defaults(&mut record, "stack");
        assert!(!record.draft);
    }

    #[test]
    fn serialize_keeps_body_bytes() {
        let record = default_record();
        let document = serialize_document(&record, "\n  body\r\n", Dialect::Yaml);
        assert!(document.ends_with("---\n\n  body\r\n"));
    }
}
