//! YAML frontmatter splitting and parsing.

use super::DocumentError;

const DELIMITER: &str = "---";

/// Frontmatter keys and values, JSON-typed so they can pass straight into
/// the snapshot.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Split a document into its raw frontmatter block and markdown body.
///
/// A document whose first line is not `---` has no frontmatter and its whole
/// text is the body. The body starts on the line after the closing `---`.
pub fn split_frontmatter(text: &str) -> Result<(Option<&str>, &str), DocumentError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let (first, rest) = split_line(text);
    if first.trim_end() != DELIMITER {
        return Ok((None, text));
    }

    let mut consumed = 0;
    let mut remaining = rest;
    while !remaining.is_empty() {
        let (line, after) = split_line(remaining);
        if line.trim_end() == DELIMITER {
            return Ok((Some(&rest[..consumed]), after));
        }
        consumed += remaining.len() - after.len();
        remaining = after;
    }

    Err(DocumentError::UnterminatedFrontmatter)
}

/// Parse a frontmatter block. An empty block yields empty metadata; anything
/// other than a mapping is rejected.
pub fn parse_metadata(yaml: &str) -> Result<Metadata, DocumentError> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

    match value {
        serde_yaml::Value::Null => Ok(Metadata::new()),
        serde_yaml::Value::Mapping(_) => match serde_json::to_value(&value)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Err(DocumentError::NotAMapping),
        },
        _ => Err(DocumentError::NotAMapping),
    }
}

fn split_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(idx) => (&text[..idx], &text[idx + 1..]),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_frontmatter() {
        let (meta, body) = split_frontmatter("---\ntitle: Hi\n---\n## Body\n").unwrap();
        assert_eq!(meta, Some("title: Hi\n"));
        assert_eq!(body, "## Body\n");
    }

    #[test]
    fn test_split_handles_crlf_and_bom() {
        let (meta, body) = split_frontmatter("\u{feff}---\r\ntitle: Hi\r\n---\r\ntext").unwrap();
        assert_eq!(meta, Some("title: Hi\r\n"));
        assert_eq!(body, "text");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let (meta, body) = split_frontmatter("just text\n---\n").unwrap();
        assert_eq!(meta, None);
        assert_eq!(body, "just text\n---\n");
    }

    #[test]
    fn test_split_closing_delimiter_at_eof() {
        let (meta, body) = split_frontmatter("---\na: 1\n---").unwrap();
        assert_eq!(meta, Some("a: 1\n"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_unterminated() {
        assert!(matches!(
            split_frontmatter("---\ntitle: Hi\nno end"),
            Err(DocumentError::UnterminatedFrontmatter)
        ));
    }

    #[test]
    fn test_parse_metadata_mapping() {
        let meta = parse_metadata("title: Hi\ntags: [a, b]\nfeatured: true\n").unwrap();
        assert_eq!(meta["title"], "Hi");
        assert_eq!(meta["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(meta["featured"], true);
    }

    #[test]
    fn test_parse_metadata_empty_and_invalid() {
        assert!(parse_metadata("").unwrap().is_empty());
        assert!(matches!(parse_metadata("- a\n- b"), Err(DocumentError::NotAMapping)));
        assert!(matches!(parse_metadata("title: [unclosed"), Err(DocumentError::Yaml(_))));
    }
}
