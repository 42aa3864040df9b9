//! Line-oriented decoding of one metadata block.
//!
//! # Responsibility
//! - Turn block text in one dialect into an ordered map of raw values.
//! - Report ignored lines as diagnostics instead of failing.
//!
//! # Invariants
//! - Single pass, no lookahead beyond the pending block array.
//! - A repeated key overwrites the earlier value and keeps its position.
//! - Dequoting strips at most one matching pair of `"` or `'`.

use crate::model::dialect::{Dialect, COMMENT_MARKER};
use log::debug;

/// Pre-normalization value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Dequoted scalar text; `quoted` records whether quotes were stripped.
    Scalar { text: String, quoted: bool },
    /// Inline or block array, elements dequoted, empty elements dropped.
    Array(Vec<String>),
}

impl RawValue {
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar {
            text: text.into(),
            quoted: false,
        }
    }
}

/// Ordered raw field map produced by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    entries: Vec<(String, RawValue)>,
}

impl RawFields {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    fn insert(&mut self, key: String, value: RawValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl IntoIterator for RawFields {
    type Item = (String, RawValue);
    type IntoIter = std::vec::IntoIter<(String, RawValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Why a line inside a recognized block was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticReason {
    /// No key/value separator at a position greater than zero.
    MissingSeparator,
    /// Array item line with no pending empty-value key.
    OrphanArrayItem,
}

/// One skipped line, 1-based within the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line_number: usize,
    pub reason: DiagnosticReason,
}

/// Decoder output: best-effort fields plus diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBlock {
    pub fields: RawFields,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl DecodedBlock {
    /// Returns whether every non-blank, non-comment line was understood.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Decodes block text written in `dialect`. Never fails.
pub fn decode_block(block: &str, dialect: Dialect) -> DecodedBlock {
    let mut decoder = LineDecoder::new(dialect);
    for (index, line) in block.lines().enumerate() {
        decoder.feed(index + 1, line);
    }
    decoder.finish()
}

/// Strips one matching pair of surrounding quotes.
pub fn dequote(value: &str) -> (&str, bool) {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return (&value[1..value.len() - 1], true);
        }
    }
    (value, false)
}

/// Parses `[a, 'b', "c"]`; text after the first `]` is ignored.
pub fn parse_inline_array(value: &str) -> Vec<String> {
    let inner = value.strip_prefix('[').unwrap_or(value);
    let inner = match inner.find(']') {
        Some(end) => &inner[..end],
        None => inner,
    };
    split_items(inner)
}

/// Splits a comma-separated list, trimming and dequoting each element.
pub fn split_items(list: &str) -> Vec<String> {
    list.split(',')
        .map(|item| dequote(item.trim()).0.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

struct PendingArray {
    key: String,
    items: Vec<String>,
}

struct LineDecoder {
    dialect: Dialect,
    fields: RawFields,
    diagnostics: Vec<LineDiagnostic>,
    pending: Option<PendingArray>,
}

impl LineDecoder {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            fields: RawFields::default(),
            diagnostics: Vec::new(),
            pending: None,
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            return;
        }

        if let Some(rest) = self
            .dialect
            .item_marker()
            .and_then(|marker| trimmed.strip_prefix(marker))
        {
            match self.pending.as_mut() {
                Some(pending) => {
                    let (item, _) = dequote(rest.trim());
                    if !item.is_empty() {
                        pending.items.push(item.to_string());
                    }
                }
                None => self.report(line_number, DiagnosticReason::OrphanArrayItem),
            }
            return;
        }

        match trimmed.find(self.dialect.separator()) {
            Some(position) if position > 0 => {
                let value = &trimmed[position + self.dialect.separator().len_utf8()..];
                self.accept_pair(&trimmed[..position], value);
            }
            _ => self.report(line_number, DiagnosticReason::MissingSeparator),
        }
    }

    fn accept_pair(&mut self, key: &str, value: &str) {
        self.flush_pending();
        let key = key.trim().to_string();
        let value = value.trim();

        if value.is_empty() {
            // Toml has no block arrays, so an empty value stays an empty scalar.
            match self.dialect.item_marker() {
                Some(_) => {
                    self.pending = Some(PendingArray {
                        key,
                        items: Vec::new(),
                    })
                }
                None => self.fields.insert(key, RawValue::scalar("")),
            }
            return;
        }

        if value.starts_with('[') {
            self.fields
                .insert(key, RawValue::Array(parse_inline_array(value)));
            return;
        }

        let (text, quoted) = dequote(value);
        self.fields.insert(
            key,
            RawValue::Scalar {
                text: text.to_string(),
                quoted,
            },
        );
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.fields.insert(pending.key, RawValue::Array(pending.items));
        }
    }

    fn report(&mut self, line_number: usize, reason: DiagnosticReason) {
        self.diagnostics.push(LineDiagnostic {
            line_number,
            reason,
        });
    }

    fn finish(mut self) -> DecodedBlock {
        self.flush_pending();
        if !self.diagnostics.is_empty() {
            debug!(
                "event=matter_decode module=matter status=degraded dialect={} ignored_lines={}",
                self.dialect,
                self.diagnostics.len()
            );
        }
        DecodedBlock {
            fields: self.fields,
            diagnostics: self.diagnostics,
        }
    }
}
