//! Starter post scaffolding.
//!
//! # Responsibility
//! - Derive the file name of a new post from its title.
//! - Render the initial document through the same serializer the editor uses.
//!
//! # Invariants
//! - Starter documents are drafts with empty taxonomies.
//! - No file-system access; callers decide where the file is written.

use crate::model::dialect::Dialect;
use crate::model::record::MetadataRecord;
use crate::service::document::serialize_document;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const UNSAFE_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Site generator a project is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SiteEngine {
    #[default]
    Hugo,
    Zola,
}

impl SiteEngine {
    /// Dialect new posts are written in.
    pub fn dialect(self) -> Dialect {
        match self {
            Self::Hugo => Dialect::Yaml,
            Self::Zola => Dialect::Toml,
        }
    }

    /// Project-relative directory new posts go into.
    pub fn content_dir(self) -> &'static str {
        match self {
            Self::Hugo => "content/posts",
            Self::Zola => "content",
        }
    }

    fn placeholder_body(self) -> &'static str {
        match self {
            Self::Hugo => "\nStart writing here...\n",
            Self::Zola => "\nWrite your content here...\n",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hugo => "hugo",
            Self::Zola => "zola",
        }
    }
}

impl Display for SiteEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starter scaffolding failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarterError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Title has no characters usable in a file name.
    EmptySlug(String),
    /// Engine name is not `hugo` or `zola`.
    UnknownEngine(String),
}

impl Display for StarterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "post title cannot be empty"),
            Self::EmptySlug(title) => {
                write!(f, "post title `{title}` does not produce a usable file name")
            }
            Self::UnknownEngine(value) => {
                write!(f, "unknown site engine `{value}`; expected hugo|zola")
            }
        }
    }
}

impl Error for StarterError {}

impl FromStr for SiteEngine {
    type Err = StarterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hugo" => Ok(Self::Hugo),
            "zola" => Ok(Self::Zola),
            other => Err(StarterError::UnknownEngine(other.to_string())),
        }
    }
}

/// Rendered starter post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterPost {
    /// `<slug>.md`
    pub file_name: String,
    /// `file_name` joined to the engine's content directory with `/`.
    pub relative_path: String,
    pub dialect: Dialect,
    pub document: String,
}

/// Lowercases `title`, turns spaces into `-` and drops path separators.
pub fn post_slug(title: &str) -> Result<String, StarterError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StarterError::EmptyTitle);
    }
    let slug: String = trimmed
        .replace(' ', "-")
        .to_lowercase()
        .chars()
        .filter(|ch| !UNSAFE_FILE_NAME_CHARS.contains(ch))
        .collect();
    if slug.trim_matches('-').is_empty() {
        return Err(StarterError::EmptySlug(trimmed.to_string()));
    }
    Ok(slug)
}

/// Builds the draft post a new-post action writes for `engine`.
pub fn starter_post(
    title: &str,
    engine: SiteEngine,
    now: DateTime<Utc>,
) -> Result<StarterPost, StarterError> {
    let slug = post_slug(title)?;
    let record = MetadataRecord::new(title.trim(), now);
    let dialect = engine.dialect();
    let file_name = format!("{slug}.md");

    Ok(StarterPost {
        relative_path: format!("{}/{file_name}", engine.content_dir()),
        file_name,
        dialect,
        document: serialize_document(&record, engine.placeholder_body(), dialect),
    })
}
