//! YAML frontmatter extraction for Markdown documents.

/// Split a `---` delimited YAML frontmatter block from the document body.
///
/// Returns `(None, content)` when the document has no frontmatter.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
