//! Block dialect tags.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Textual convention used by one front-matter block.
///
/// Exactly one dialect governs a block; mixed blocks are not supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `---` delimited, `key: value`, dash block arrays.
    #[default]
    Yaml,
    /// `+++` delimited, `key = value`, inline bracket arrays.
    Toml,
}

impl Dialect {
    /// Dialects in the order the splitter tries them.
    pub const SPLIT_ORDER: [Dialect; 2] = [Dialect::Yaml, Dialect::Toml];

    /// Opening and closing marker line.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }

    /// Key/value separator character.
    pub fn separator(self) -> char {
        match self {
            Self::Yaml => ':',
            Self::Toml => '=',
        }
    }

    /// Separator as written by the encoder, including spacing.
    pub fn separator_literal(self) -> &'static str {
        match self {
            Self::Yaml => ": ",
            Self::Toml => " = ",
        }
    }

    /// Prefix of a block-array item line. Toml only has inline arrays.
    pub fn item_marker(self) -> Option<char> {
        match self {
            Self::Yaml => Some('-'),
            Self::Toml => None,
        }
    }

    /// Quote character used for string values on encode.
    pub fn quote(self) -> char {
        match self {
            Self::Yaml => '"',
            Self::Toml => '\'',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Parses a user-facing dialect name (`yaml|yml|toml`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comment prefix shared by both dialects.
pub const COMMENT_MARKER: char = '#';
