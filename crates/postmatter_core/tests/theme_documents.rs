use chrono::{TimeZone, Utc};
use postmatter_core::{
    defaults_for, list_themes, parse_document_with_theme, schema_for,
    serialize_document_with_theme, starter_post, Dialect, EditorLayout, FieldType, FieldValue,
    MetadataRecord, SiteEngine, ThemeId,
};
use pretty_assertions::assert_eq;

#[test]
fn catalog_lists_all_builtin_themes() {
    let themes = list_themes();
    let ids: Vec<&str> = themes.iter().map(|theme| theme.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["stack", "papermod", "loveit", "blowfish", "congo", "docsy", "default"]
    );
    let docsy = themes
        .iter()
        .find(|theme| theme.id == ThemeId::Docsy)
        .unwrap();
    assert_eq!(docsy.editor_layout, EditorLayout::Documentation);
}

#[test]
fn unknown_theme_uses_generic_schema_and_defaults() {
    let keys: Vec<&str> = schema_for("no-such-theme")
        .iter()
        .map(|field| field.key)
        .collect();
    assert_eq!(
        keys,
        vec!["title", "description", "date", "draft", "categories", "tags"]
    );
    let defaults = defaults_for("no-such-theme");
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults.get("draft"), Some(&FieldValue::Bool(true)));
}

#[test]
fn theme_parse_types_fields_and_fills_defaults() {
    let parsed = parse_document_with_theme(
        "---\ntitle: \"Themed\"\nweight: \"3\"\nShowToc: false\nextra_key: 1\n---\nBody",
        "papermod",
    );
    let extra = &parsed.record.extra;
    assert_eq!(extra.get("weight"), Some(&FieldValue::Number(3)));
    assert_eq!(extra.get("ShowToc"), Some(&FieldValue::Bool(false)));
    assert_eq!(extra.get("extra_key"), Some(&FieldValue::Number(1)));
    assert_eq!(extra.get("TocOpen"), Some(&FieldValue::Bool(false)));
    assert_eq!(extra.get("ShowReadingTime"), Some(&FieldValue::Bool(true)));
    assert_eq!(parsed.body, "Body");
}

#[test]
fn theme_serialize_follows_schema_order() {
    let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut record = MetadataRecord::new("Docs page", date);
    record.extra.insert("weight", FieldValue::Number(20));
    record.extra.insert("linkTitle", FieldValue::from("Docs"));
    record.extra.insert("not_in_schema", FieldValue::from("dropped"));
    record.extra.insert("type", FieldValue::from("docs"));

    let document = serialize_document_with_theme(&record, "Body", Dialect::Yaml, "docsy");
    assert_eq!(
        document,
        "---\n\
         title: \"Docs page\"\n\
         linkTitle: \"Docs\"\n\
         date: 2024-01-01T00:00:00.000Z\n\
         weight: 20\n\
         draft: true\n\
         type: docs\n\
         ---\n\
         Body"
    );
}

#[test]
fn theme_round_trip_keeps_schema_fields() {
    let parsed = parse_document_with_theme(
        "+++\ntitle = 'Stacked'\ndate = '2024-02-02'\nseries = ['one', 'two']\ntoc = false\nlicense = CC BY 4.0\n+++\n",
        "stack",
    );
    let document =
        serialize_document_with_theme(&parsed.record, &parsed.body, Dialect::Toml, "stack");
    let reparsed = parse_document_with_theme(&document, "stack");
    assert_eq!(reparsed.record.title, parsed.record.title);
    assert_eq!(reparsed.record.date, parsed.record.date);
    // Schema order replaces document order on the way out.
    assert_eq!(reparsed.record.extra.len(), parsed.record.extra.len());
    for (key, value) in parsed.record.extra.iter() {
        assert_eq!(reparsed.record.extra.get(key), Some(value), "{key}");
    }
    assert_eq!(
        reparsed.record.extra.get("license"),
        Some(&FieldValue::from("CC BY 4.0"))
    );
}

#[test]
fn boolean_schema_fields_are_typed() {
    for theme in list_themes() {
        for field in theme.fields {
            if let Some(default) = field.default {
                let value = default.to_field_value();
                match field.field_type {
                    FieldType::Boolean => assert!(matches!(value, FieldValue::Bool(_))),
                    _ => assert!(!matches!(value, FieldValue::Missing)),
                }
            }
        }
    }
}

#[test]
fn starter_post_parses_back_to_a_draft() {
    let now = Utc.with_ymd_and_hms(2026, 1, 29, 16, 55, 0).unwrap();
    for engine in [SiteEngine::Hugo, SiteEngine::Zola] {
        let post = starter_post("Release Notes", engine, now).unwrap();
        let parsed = postmatter_core::parse_document(&post.document);
        assert_eq!(parsed.dialect, engine.dialect());
        assert_eq!(parsed.record.title, "Release Notes");
        assert_eq!(parsed.record.date, now);
        assert!(parsed.record.draft);
        assert_eq!(post.file_name, "release-notes.md");
    }
}

#[test]
fn unparseable_number_survives_a_theme_save() {
    let parsed = parse_document_with_theme("---\ntitle: x\nweight: heavy\n---\n", "stack");
    assert_eq!(parsed.record.extra.get("weight"), Some(&FieldValue::from("heavy")));
    let document = serialize_document_with_theme(&parsed.record, "", Dialect::Yaml, "stack");
    assert!(document.contains("\nweight: heavy\n"));
    let reparsed = parse_document_with_theme(&document, "stack");
    assert_eq!(reparsed.record.extra.get("weight"), Some(&FieldValue::from("heavy")));
}
