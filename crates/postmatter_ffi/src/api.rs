//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose post parse/serialize, theme catalog and new-post calls to Dart.
//! - Flatten core types into FRB-friendly DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported through `ok = false` envelopes with a message.
//! - Dates cross the boundary as canonical strings.

use log::warn;
use postmatter_core::matter::dates::{format_instant, now_instant};
use postmatter_core::{
    core_version as core_version_inner, defaults_for, format_date_for_input as date_for_input,
    format_date_for_site as date_for_site, init_logging_with, list_themes as list_themes_inner,
    parse_document, parse_document_with_theme, schema_for, serialize_document,
    serialize_document_with_theme, starter_post, DefaultValue, Dialect, EditorLayout, FieldSchema,
    FieldValue, MetadataRecord, SiteEngine,
};

/// One field value in tagged, FRB-friendly form.
///
/// `kind` is one of `string|bool|number|string_array|missing`; only the
/// slot matching `kind` is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostField {
    pub key: String,
    pub kind: String,
    pub text: Option<String>,
    pub flag: Option<bool>,
    pub number: Option<i64>,
    pub items: Vec<String>,
}

/// Post front matter with well-known fields flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMetadata {
    pub title: String,
    /// Canonical instant, e.g. `2024-01-01T00:00:00.000Z`.
    pub date: String,
    pub draft: bool,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub description: Option<String>,
    /// Extension fields in document order.
    pub extra: Vec<PostField>,
}

/// Parse response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePostResponse {
    pub metadata: PostMetadata,
    pub body: String,
    /// `yaml|toml`.
    pub format: String,
    pub has_front_matter: bool,
    /// Number of block lines skipped while decoding.
    pub ignored_lines: u32,
}

/// Generic text response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub ok: bool,
    pub text: String,
    pub message: String,
}

impl TextResponse {
    fn success(text: String) -> Self {
        Self {
            ok: true,
            text,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: String::new(),
            message: message.into(),
        }
    }
}

/// One selectable value of a `select` theme field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFieldOption {
    pub value: String,
    pub label: String,
}

/// Form description of one theme field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFieldItem {
    pub key: String,
    pub label: String,
    /// `text|textarea|date|boolean|tags|select|number|image`.
    pub field_type: String,
    pub required: bool,
    pub placeholder: Option<String>,
    pub help: Option<String>,
    pub options: Vec<ThemeFieldOption>,
    pub default_value: Option<PostField>,
}

/// Catalog summary of one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    /// `standard|card|documentation`.
    pub editor_layout: String,
    pub field_count: u32,
}

/// New-post response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPostResponse {
    pub ok: bool,
    pub file_name: Option<String>,
    /// Project-relative path, `/`-separated.
    pub relative_path: Option<String>,
    pub document: String,
    pub message: String,
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_with(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Parses a Markdown document into front matter and body.
///
/// When `theme_id` is set, extension fields are typed by that theme's schema
/// and missing theme defaults are filled in.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never fails; malformed front matter degrades to defaults.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_post(content: String, theme_id: Option<String>) -> ParsePostResponse {
    let parsed = match theme_id.as_deref() {
        Some(theme) => parse_document_with_theme(&content, theme),
        None => parse_document(&content),
    };
    ParsePostResponse {
        metadata: to_post_metadata(&parsed.record),
        body: parsed.body,
        format: parsed.dialect.as_str().to_string(),
        has_front_matter: parsed.has_front_matter,
        ignored_lines: u32::try_from(parsed.diagnostics.len()).unwrap_or(u32::MAX),
    }
}

/// Serializes front matter and body into a full document.
///
/// `format` is `yaml|toml`; anything else is rejected.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; returns `ok = false` for an unknown format.
#[flutter_rust_bridge::frb(sync)]
pub fn serialize_post(
    metadata: PostMetadata,
    body: String,
    format: String,
    theme_id: Option<String>,
) -> TextResponse {
    let Some(dialect) = Dialect::parse(&format) else {
        warn!("event=ffi_serialize_post module=ffi status=error reason=unsupported_format");
        return TextResponse::failure(format!(
            "serialize_post failed: unsupported format `{format}`"
        ));
    };
    let record = to_record(metadata);
    let document = match theme_id.as_deref() {
        Some(theme) => serialize_document_with_theme(&record, &body, dialect, theme),
        None => serialize_document(&record, &body, dialect),
    };
    TextResponse::success(document)
}

/// Lists the form fields of a theme; unknown ids get the generic fields.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_fields(theme_id: String) -> Vec<ThemeFieldItem> {
    schema_for(&theme_id).iter().map(to_theme_field).collect()
}

/// Declared default values of a theme.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_defaults(theme_id: String) -> Vec<PostField> {
    defaults_for(&theme_id)
        .iter()
        .map(|(key, value)| to_post_field(key, value))
        .collect()
}

/// Built-in theme catalog in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_themes() -> Vec<ThemeSummary> {
    list_themes_inner()
        .into_iter()
        .map(|theme| ThemeSummary {
            id: theme.id.as_str().to_string(),
            name: theme.name.to_string(),
            description: theme.description.to_string(),
            icon: theme.icon.to_string(),
            features: theme.features.iter().map(|item| item.to_string()).collect(),
            editor_layout: editor_layout_label(theme.editor_layout).to_string(),
            field_count: u32::try_from(theme.fields.len()).unwrap_or(u32::MAX),
        })
        .collect()
}

/// Renders the starter document for a new post.
///
/// `engine` is `hugo|zola`. The caller writes the file.
///
/// # FFI contract
/// - Sync call, pure computation apart from reading the clock.
/// - Never panics; returns `ok = false` for an empty title or unknown engine.
#[flutter_rust_bridge::frb(sync)]
pub fn new_post_document(title: String, engine: String) -> NewPostResponse {
    let result = engine
        .parse::<SiteEngine>()
        .and_then(|engine| starter_post(&title, engine, now_instant()));
    match result {
        Ok(post) => NewPostResponse {
            ok: true,
            file_name: Some(post.file_name),
            relative_path: Some(post.relative_path),
            document: post.document,
            message: "Post created.".to_string(),
        },
        Err(err) => {
            warn!("event=ffi_new_post module=ffi status=error reason=invalid_input");
            NewPostResponse {
                ok: false,
                file_name: None,
                relative_path: None,
                document: String::new(),
                message: format!("new_post_document failed: {err}"),
            }
        }
    }
}

/// Converts a date literal to the `YYYY-MM-DDTHH:MM` editor input form.
#[flutter_rust_bridge::frb(sync)]
pub fn format_date_for_input(value: String) -> String {
    date_for_input(&value)
}

/// Converts a date literal (e.g. editor input) to the canonical instant.
/// Zone-less input is read as local wall-clock time.
#[flutter_rust_bridge::frb(sync)]
pub fn format_date_for_site(value: String) -> String {
    date_for_site(&value)
}

fn to_post_metadata(record: &MetadataRecord) -> PostMetadata {
    PostMetadata {
        title: record.title.clone(),
        date: format_instant(&record.date),
        draft: record.draft,
        tags: record.tags.clone(),
        categories: record.categories.clone(),
        description: record.description.clone(),
        extra: record
            .extra
            .iter()
            .map(|(key, value)| to_post_field(key, value))
            .collect(),
    }
}

fn to_record(metadata: PostMetadata) -> MetadataRecord {
    let mut record = MetadataRecord::new(metadata.title, now_instant());
    record.set("date", FieldValue::String(metadata.date));
    record.draft = metadata.draft;
    record.tags = metadata.tags;
    record.categories = metadata.categories;
    record.set(
        "description",
        metadata
            .description
            .map(FieldValue::String)
            .unwrap_or(FieldValue::Missing),
    );
    for field in metadata.extra {
        let key = field.key.clone();
        record.set(key, from_post_field(field));
    }
    record
}

fn to_post_field(key: &str, value: &FieldValue) -> PostField {
    let mut field = PostField {
        key: key.to_string(),
        kind: value.type_name().to_string(),
        text: None,
        flag: None,
        number: None,
        items: Vec::new(),
    };
    match value {
        FieldValue::String(text) => field.text = Some(text.clone()),
        FieldValue::Bool(flag) => field.flag = Some(*flag),
        FieldValue::Number(number) => field.number = Some(*number),
        FieldValue::StringArray(items) => field.items = items.clone(),
        FieldValue::Missing => {}
    }
    field
}

fn from_post_field(field: PostField) -> FieldValue {
    match field.kind.as_str() {
        "string" => field.text.map(FieldValue::String).unwrap_or(FieldValue::Missing),
        "bool" => field.flag.map(FieldValue::Bool).unwrap_or(FieldValue::Missing),
        "number" => field.number.map(FieldValue::Number).unwrap_or(FieldValue::Missing),
        "string_array" => FieldValue::StringArray(field.items),
        _ => FieldValue::Missing,
    }
}

fn to_theme_field(field: &FieldSchema) -> ThemeFieldItem {
    ThemeFieldItem {
        key: field.key.to_string(),
        label: field.label.to_string(),
        field_type: field.field_type.as_str().to_string(),
        required: field.required,
        placeholder: field.placeholder.map(str::to_string),
        help: field.help.map(str::to_string),
        options: field
            .options
            .iter()
            .map(|option| ThemeFieldOption {
                value: option.value.to_string(),
                label: option.label.to_string(),
            })
            .collect(),
        default_value: field
            .default
            .map(|value: DefaultValue| to_post_field(field.key, &value.to_field_value())),
    }
}

fn editor_layout_label(layout: EditorLayout) -> &'static str {
    match layout {
        EditorLayout::Standard => "standard",
        EditorLayout::Card => "card",
        EditorLayout::Documentation => "documentation",
    }
}
