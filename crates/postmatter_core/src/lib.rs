//! Front-matter interchange engine for static-site blog posts.
//! This crate is the single source of truth for decode/encode rules.

pub mod logging;
pub mod matter;
pub mod model;
pub mod service;
pub mod theme;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use matter::dates::{format_date_for_input, format_date_for_site};
pub use matter::decoder::{decode_block, DecodedBlock, DiagnosticReason, LineDiagnostic, RawValue};
pub use matter::encoder::{encode_block, encode_document};
pub use matter::normalizer::normalize;
pub use matter::splitter::{split_block, SplitBlock};
pub use model::dialect::Dialect;
pub use model::record::{default_record, MetadataRecord, WellKnownField};
pub use model::value::{FieldMap, FieldValue};
pub use service::document::{
    apply_theme_defaults, parse_document, parse_document_with_theme, serialize_document,
    serialize_document_with_theme, ParsedDocument,
};
pub use service::starter::{post_slug, starter_post, SiteEngine, StarterError, StarterPost};
pub use theme::registry::{defaults_for, list_themes, registry, schema_for, ThemeRegistry};
pub use theme::schema::{
    DefaultValue, EditorLayout, FieldSchema, FieldType, SelectOption, ThemeId, ThemeIdError,
    ThemeInfo,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
