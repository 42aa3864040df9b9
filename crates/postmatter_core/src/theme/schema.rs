//! Theme field schema declarations.
//!
//! Schemas are `'static` data built with `const fn` builders so the catalog can
//! live in read-only statics.

use crate::model::value::FieldValue;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Value type tag of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Date,
    Boolean,
    Tags,
    Select,
    Number,
    Image,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Tags => "tags",
            Self::Select => "select",
            Self::Number => "number",
            Self::Image => "image",
        }
    }
}

/// One selectable option of a `Select` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Declared default of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(i64),
    Text(&'static str),
}

impl DefaultValue {
    pub fn to_field_value(self) -> FieldValue {
        match self {
            Self::Bool(value) => FieldValue::Bool(value),
            Self::Number(value) => FieldValue::Number(value),
            Self::Text(value) => FieldValue::String(value.to_string()),
        }
    }
}

/// Declarative description of one front-matter field expected by a theme.
///
/// `label`, `placeholder`, `help` and `options` are display metadata for the
/// theme form; the engine only reads `key`, `field_type` and `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub help: Option<&'static str>,
    pub options: &'static [SelectOption],
    pub default: Option<DefaultValue>,
}

impl FieldSchema {
    pub const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            required: false,
            placeholder: None,
            help: None,
            options: &[],
            default: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn placeholder(self, text: &'static str) -> Self {
        Self {
            placeholder: Some(text),
            ..self
        }
    }

    pub const fn help(self, text: &'static str) -> Self {
        Self {
            help: Some(text),
            ..self
        }
    }

    pub const fn options(self, options: &'static [SelectOption]) -> Self {
        Self { options, ..self }
    }

    pub const fn default_value(self, value: DefaultValue) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }
}

/// Finds the schema entry for `key` (case-sensitive exact match).
pub fn field_for<'a>(schema: &'a [FieldSchema], key: &str) -> Option<&'a FieldSchema> {
    schema.iter().find(|field| field.key == key)
}

/// Editor arrangement preferred by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorLayout {
    Standard,
    Card,
    Documentation,
}

/// Built-in theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Stack,
    PaperMod,
    LoveIt,
    Blowfish,
    Congo,
    Docsy,
    Default,
}

impl ThemeId {
    pub const ALL: [ThemeId; 7] = [
        ThemeId::Stack,
        ThemeId::PaperMod,
        ThemeId::LoveIt,
        ThemeId::Blowfish,
        ThemeId::Congo,
        ThemeId::Docsy,
        ThemeId::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::PaperMod => "papermod",
            Self::LoveIt => "loveit",
            Self::Blowfish => "blowfish",
            Self::Congo => "congo",
            Self::Docsy => "docsy",
            Self::Default => "default",
        }
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict theme-id parse failure. Registry lookups fall back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeIdError(pub String);

impl Display for ThemeIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme id: {}", self.0)
    }
}

impl Error for ThemeIdError {}

impl FromStr for ThemeId {
    type Err = ThemeIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| ThemeIdError(trimmed.to_string()))
    }
}

/// Catalog entry for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeInfo {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub editor_layout: EditorLayout,
    pub fields: &'static [FieldSchema],
}
