//! Metadata block detection.

use crate::model::dialect::Dialect;

/// Block text, body and dialect of a document with front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBlock<'a> {
    /// Text between the marker lines, without the final newline.
    pub block: &'a str,
    /// Everything after the closing marker line's newline.
    pub body: &'a str,
    pub dialect: Dialect,
}

/// Extracts the metadata block, trying dialects in `Dialect::SPLIT_ORDER`.
///
/// Returns `None` when the document does not open with a marker line or the
/// block is never closed; callers treat the whole input as body.
pub fn split_block(raw: &str) -> Option<SplitBlock<'_>> {
    Dialect::SPLIT_ORDER
        .into_iter()
        .find_map(|dialect| split_with(raw, dialect))
}

fn split_with(raw: &str, dialect: Dialect) -> Option<SplitBlock<'_>> {
    let marker = dialect.marker();
    let mut lines = raw.split_inclusive('\n');
    let opening = lines.next()?;
    if !opening.ends_with('\n') || !is_marker_line(opening, marker) {
        return None;
    }

    let block_start = opening.len();
    let mut offset = block_start;
    for line in lines {
        if is_marker_line(line, marker) {
            return Some(SplitBlock {
                block: strip_line_ending(&raw[block_start..offset]),
                body: &raw[offset + line.len()..],
                dialect,
            });
        }
        offset += line.len();
    }
    None
}

fn is_marker_line(line: &str, marker: &str) -> bool {
    line.trim_end() == marker
}

fn strip_line_ending(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::split_block;
    use crate::model::dialect::Dialect;

    #[test]
    fn splits_yaml_block_and_consumes_one_newline() {
        let split = split_block("---\ntitle: a\n---\n\nBody\n").expect("block should split");
        assert_eq!(split.dialect, Dialect::Yaml);
        assert_eq!(split.block, "title: a");
        assert_eq!(split.body, "\nBody\n");
    }

    #[test]
    fn splits_toml_block() {
        let split = split_block("+++\ntitle = 'a'\n+++\nBody").expect("block should split");
        assert_eq!(split.dialect, Dialect::Toml);
        assert_eq!(split.block, "title = 'a'");
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn closing_marker_without_newline_yields_empty_body() {
        let split = split_block("---\ntitle: a\n---").expect("block should split");
        assert_eq!(split.body, "");
    }

    #[test]
    fn empty_block_is_not_an_error() {
        let split = split_block("---\n---\nBody").expect("block should split");
        assert_eq!(split.block, "");
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn unclosed_or_foreign_markers_are_not_blocks() {
        assert!(split_block("---\ntitle: a\n").is_none());
        assert!(split_block("+++\ntitle = 'a'\n---\n").is_none());
        assert!(split_block("Just text").is_none());
        assert!(split_block("---").is_none());
        assert!(split_block("text\n---\ntitle: a\n---\n").is_none());
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let split = split_block("---\r\ntitle: a\r\n---\r\nBody").expect("block should split");
        assert_eq!(split.block, "title: a");
        assert_eq!(split.body, "Body");
    }
}
