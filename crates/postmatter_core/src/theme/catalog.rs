//! Built-in theme catalog.

use crate::theme::schema::{
    DefaultValue, EditorLayout, FieldSchema, FieldType, SelectOption, ThemeId, ThemeInfo,
};

const ON: DefaultValue = DefaultValue::Bool(true);
const OFF: DefaultValue = DefaultValue::Bool(false);

const TITLE: FieldSchema = FieldSchema::new("title", "Title", FieldType::Text).required();
const DESCRIPTION: FieldSchema = FieldSchema::new("description", "Description", FieldType::Textarea);
const PUBLISH_DATE: FieldSchema =
    FieldSchema::new("date", "Publish date", FieldType::Date).required();
const LAST_MODIFIED: FieldSchema = FieldSchema::new("lastmod", "Last modified", FieldType::Date);
const DRAFT: FieldSchema = FieldSchema::new("draft", "Draft", FieldType::Boolean).default_value(ON);
const CATEGORIES: FieldSchema = FieldSchema::new("categories", "Categories", FieldType::Tags);
const TAGS: FieldSchema = FieldSchema::new("tags", "Tags", FieldType::Tags);
const SERIES: FieldSchema = FieldSchema::new("series", "Series", FieldType::Tags);
const AUTHOR: FieldSchema = FieldSchema::new("author", "Author", FieldType::Text);
const SUMMARY: FieldSchema = FieldSchema::new("summary", "Summary", FieldType::Textarea);
const WEIGHT: FieldSchema = FieldSchema::new("weight", "Weight", FieldType::Number);

const TOGGLE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "true",
        label: "Enabled",
    },
    SelectOption {
        value: "false",
        label: "Disabled",
    },
];

const LICENSE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Site default",
    },
    SelectOption {
        value: "CC BY-NC-SA 4.0",
        label: "CC BY-NC-SA 4.0",
    },
    SelectOption {
        value: "CC BY-SA 4.0",
        label: "CC BY-SA 4.0",
    },
    SelectOption {
        value: "CC BY 4.0",
        label: "CC BY 4.0",
    },
];

const PAGE_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "docs",
        label: "Documentation",
    },
    SelectOption {
        value: "blog",
        label: "Blog",
    },
];

/// Fallback schema for theme ids missing from the catalog.
pub(crate) const GENERIC_FIELDS: &[FieldSchema] =
    &[TITLE, DESCRIPTION, PUBLISH_DATE, DRAFT, CATEGORIES, TAGS];

const STACK_FIELDS: &[FieldSchema] = &[
    TITLE,
    DESCRIPTION.placeholder("Post summary"),
    PUBLISH_DATE,
    DRAFT,
    FieldSchema::new("image", "Cover image", FieldType::Image).placeholder("Cover image URL"),
    CATEGORIES,
    TAGS,
    SERIES.help("Group this post into a series"),
    WEIGHT.help("Sort weight, smaller comes first"),
    FieldSchema::new("math", "Enable math", FieldType::Boolean).default_value(OFF),
    FieldSchema::new("toc", "Show table of contents", FieldType::Boolean).default_value(ON),
    FieldSchema::new("comments", "Allow comments", FieldType::Boolean).default_value(ON),
    FieldSchema::new("license", "License", FieldType::Select).options(LICENSE_OPTIONS),
];

const PAPERMOD_FIELDS: &[FieldSchema] = &[
    TITLE,
    SUMMARY.placeholder("Shown on list pages"),
    PUBLISH_DATE,
    LAST_MODIFIED,
    DRAFT,
    AUTHOR,
    FieldSchema::new("cover", "Cover image", FieldType::Image)
        .help("Supports image, alt, caption, relative"),
    CATEGORIES,
    TAGS,
    FieldSchema::new("ShowToc", "Show table of contents", FieldType::Boolean).default_value(ON),
    FieldSchema::new("TocOpen", "Expand table of contents", FieldType::Boolean).default_value(OFF),
    FieldSchema::new("ShowReadingTime", "Show reading time", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("ShowShareButtons", "Show share buttons", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("ShowCodeCopyButtons", "Show code copy buttons", FieldType::Boolean)
        .default_value(ON),
    WEIGHT,
];

const LOVEIT_FIELDS: &[FieldSchema] = &[
    TITLE,
    FieldSchema::new("subtitle", "Subtitle", FieldType::Text),
    DESCRIPTION,
    PUBLISH_DATE,
    LAST_MODIFIED,
    DRAFT,
    AUTHOR,
    FieldSchema::new("featuredImage", "Featured image", FieldType::Image),
    FieldSchema::new("featuredImagePreview", "Preview image", FieldType::Image),
    CATEGORIES,
    TAGS,
    SERIES,
    FieldSchema::new("toc", "Show table of contents", FieldType::Boolean).default_value(ON),
    FieldSchema::new("math", "Enable math", FieldType::Boolean).default_value(OFF),
    FieldSchema::new("lightgallery", "Enable image gallery", FieldType::Boolean)
        .default_value(OFF),
    FieldSchema::new("linkToMarkdown", "Link to Markdown source", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("share", "Sharing", FieldType::Select).options(TOGGLE_OPTIONS),
    FieldSchema::new("comment", "Comments", FieldType::Select).options(TOGGLE_OPTIONS),
];

const BLOWFISH_FIELDS: &[FieldSchema] = &[
    TITLE,
    DESCRIPTION,
    SUMMARY,
    PUBLISH_DATE,
    LAST_MODIFIED,
    DRAFT,
    FieldSchema::new("externalUrl", "External link", FieldType::Text)
        .help("Clicking the post opens this link instead"),
    FieldSchema::new("showDate", "Show date", FieldType::Boolean).default_value(ON),
    FieldSchema::new("showDateUpdated", "Show updated date", FieldType::Boolean)
        .default_value(OFF),
    FieldSchema::new("showAuthor", "Show author", FieldType::Boolean).default_value(ON),
    FieldSchema::new("showReadingTime", "Show reading time", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("showEdit", "Show edit link", FieldType::Boolean).default_value(OFF),
    FieldSchema::new("showSummary", "Show summary in lists", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("showTableOfContents", "Show table of contents", FieldType::Boolean)
        .default_value(ON),
    CATEGORIES,
    TAGS,
    SERIES,
    FieldSchema::new("series_order", "Series order", FieldType::Number),
    FieldSchema::new("featureimage", "Feature image", FieldType::Image),
    FieldSchema::new("featureimageAlt", "Feature image alt text", FieldType::Text),
];

const CONGO_FIELDS: &[FieldSchema] = &[
    TITLE,
    DESCRIPTION,
    SUMMARY,
    PUBLISH_DATE,
    LAST_MODIFIED,
    DRAFT,
    FieldSchema::new("externalUrl", "External link", FieldType::Text),
    FieldSchema::new("showDate", "Show date", FieldType::Boolean).default_value(ON),
    FieldSchema::new("showAuthor", "Show author", FieldType::Boolean).default_value(ON),
    FieldSchema::new("showReadingTime", "Show reading time", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("showTableOfContents", "Show table of contents", FieldType::Boolean)
        .default_value(ON),
    FieldSchema::new("showTaxonomies", "Show taxonomies", FieldType::Boolean).default_value(ON),
    FieldSchema::new("showWordCount", "Show word count", FieldType::Boolean).default_value(OFF),
    CATEGORIES,
    TAGS,
    SERIES,
    FieldSchema::new("featureImage", "Feature image", FieldType::Image),
    FieldSchema::new("featureImageAlt", "Feature image alt text", FieldType::Text),
];

const DOCSY_FIELDS: &[FieldSchema] = &[
    TITLE,
    FieldSchema::new("linkTitle", "Navigation title", FieldType::Text)
        .help("Short title shown in navigation"),
    DESCRIPTION,
    FieldSchema::new("date", "Publish date", FieldType::Date),
    WEIGHT.help("Sort weight in the sidebar"),
    DRAFT,
    FieldSchema::new("toc_hide", "Hide table of contents", FieldType::Boolean).default_value(OFF),
    CATEGORIES,
    TAGS,
    FieldSchema::new("type", "Page type", FieldType::Select).options(PAGE_TYPE_OPTIONS),
    FieldSchema::new("simple_list", "Simple list", FieldType::Boolean)
        .help("Render child pages as a simple list"),
    FieldSchema::new("no_list", "Hide child page list", FieldType::Boolean),
];

const DEFAULT_FIELDS: &[FieldSchema] = &[
    TITLE,
    DESCRIPTION,
    PUBLISH_DATE,
    DRAFT,
    CATEGORIES,
    TAGS,
    WEIGHT,
];

/// All built-in themes in display order.
pub(crate) const THEMES: &[ThemeInfo] = &[
    ThemeInfo {
        id: ThemeId::Stack,
        name: "Hugo Stack",
        description: "Card-style blog theme with series, TOC and search",
        icon: "📚",
        features: &["series", "toc", "search", "comments", "gallery"],
        editor_layout: EditorLayout::Card,
        fields: STACK_FIELDS,
    },
    ThemeInfo {
        id: ThemeId::PaperMod,
        name: "PaperMod",
        description: "Clean and fast blog theme",
        icon: "📄",
        features: &["search", "toc", "reading-time", "share-buttons"],
        editor_layout: EditorLayout::Standard,
        fields: PAPERMOD_FIELDS,
    },
    ThemeInfo {
        id: ThemeId::LoveIt,
        name: "LoveIt",
        description: "Feature-rich modern theme",
        icon: "❤️",
        features: &["search", "toc", "comments", "analytics", "social-share"],
        editor_layout: EditorLayout::Card,
        fields: LOVEIT_FIELDS,
    },
    ThemeInfo {
        id: ThemeId::Blowfish,
        name: "Blowfish",
        description: "Flexible multilingual theme",
        icon: "🐡",
        features: &["multilingual", "search", "analytics", "comments", "series"],
        editor_layout: EditorLayout::Card,
        fields: BLOWFISH_FIELDS,
    },
    ThemeInfo {
        id: ThemeId::Congo,
        name: "Congo",
        description: "Tailwind CSS theme with dark mode",
        icon: "🌴",
        features: &["tailwind", "dark-mode", "search", "analytics"],
        editor_layout: EditorLayout::Standard,
        fields: CONGO_FIELDS,
    },
    ThemeInfo {
        id: ThemeId::Docsy,
        name: "Docsy",
        description: "Technical documentation theme",
        icon: "📖",
        features: &["documentation", "versioning", "search", "feedback"],
        editor_layout: EditorLayout::Documentation,
        fields: DOCSY_FIELDS,
    },
    ThemeInfo {
        id: ThemeId::Default,
        name: "Default",
        description: "Generic Hugo front matter",
        icon: "🎨",
        features: &[],
        editor_layout: EditorLayout::Standard,
        fields: DEFAULT_FIELDS,
    },
];
