//! Observations of the files that make up a documentation tree.
//!
//! Nothing here writes to disk. Each read opens, consumes and closes the
//! file before returning, so no handle outlives the call that made it.
//! Text is returned with `\r\n` line endings folded to `\n`, so lengths and
//! line matching do not depend on the platform that wrote the file.

use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A Markdown fragment that the index page includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFile {
    /// File name as listed in the required sections, e.g. `faq.md`
    pub name: String,
    pub path: PathBuf,
}

impl SectionFile {
    pub fn new(sections_dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: sections_dir.join(&name),
            name,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole section as text.
    pub fn read(&self) -> io::Result<String> {
        read_text(&self.path)
    }
}

/// The top-level page that assembles all sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFile {
    /// File name relative to the base directory, e.g. `index.md`
    pub name: String,
    pub path: PathBuf,
}

impl IndexFile {
    pub fn new(base_dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: base_dir.join(&name),
            name,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn read(&self) -> io::Result<String> {
        read_text(&self.path)
    }
}

/// Read a file as text with CRLF line endings normalized to LF.
fn read_text(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    if content.contains("\r\n") {
        Ok(content.replace("\r\n", "\n"))
    } else {
        Ok(content)
    }
}

/// Content length in characters, not bytes.
pub fn char_len(content: &str) -> usize {
    content.chars().count()
}

/// True if at least one line of `content` matches the heading regex.
pub fn has_heading(content: &str, heading: &Regex) -> bool {
    heading.is_match(content)
}

/// True if `index` literally contains `directive`.
pub fn includes(index: &str, directive: &str) -> bool {
    index.contains(directive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;
    use tempfile::TempDir;

    fn heading() -> Regex {
        ValidatorConfig::default().heading_regex().unwrap()
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("abc"), 3);
        // 'é' is two bytes in UTF-8
        assert_eq!(char_len("café"), 4);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_heading_anywhere_in_content() {
        let content = "Intro text without a heading.\n\n# Title\n\nMore text.";
        assert!(has_heading(content, &heading()));
    }

    #[test]
    fn test_nested_heading_levels() {
        assert!(has_heading("## Heading", &heading()));
        assert!(has_heading("###### Deep", &heading()));
        assert!(has_heading("#\tTabbed", &heading()));
    }

    #[test]
    fn test_heading_after_any_inline_whitespace() {
        assert!(has_heading("#\x0cForm feed", &heading()));
        assert!(has_heading("#\u{a0}No-break space", &heading()));
    }

    #[test]
    fn test_custom_pattern_is_line_anchored() {
        let config = ValidatorConfig {
            heading_pattern: r"^=+ \S".to_string(),
            ..ValidatorConfig::default()
        };
        let re = config.heading_regex().unwrap();
        assert!(has_heading("intro line\n== Title\n", &re));
        assert!(!has_heading("intro == Title\n", &re));
    }

    #[test]
    fn test_not_a_heading() {
        let re = heading();
        assert!(!has_heading("plain text only", &re));
        assert!(!has_heading("#hashtag without space", &re));
        assert!(!has_heading("   # indented", &re));
        assert!(!has_heading("#   \n", &re));
        assert!(!has_heading("#\nTitle on next line", &re));
        assert!(!has_heading("text # not at line start", &re));
    }

    #[test]
    fn test_heading_with_crlf_line_endings() {
        assert!(has_heading("intro\r\n## Setup\r\nbody\r\n", &heading()));
    }

    #[test]
    fn test_includes_is_literal_substring() {
        let index = "# Home\n{% include_relative _sections/faq.md %}\n";
        assert!(includes(index, "{% include_relative _sections/faq.md %}"));
        assert!(!includes(index, "{%include_relative _sections/faq.md %}"));
        assert!(!includes(index, "{% include_relative _sections/usage.md %}"));
    }

    #[test]
    fn test_section_file_paths_and_existence() {
        let tmp = TempDir::new().unwrap();
        let section = SectionFile::new(tmp.path(), "faq.md");
        assert_eq!(section.path, tmp.path().join("faq.md"));
        assert!(!section.exists());
        assert!(section.read().is_err());

        fs::write(&section.path, "# FAQ\n").unwrap();
        assert!(section.exists());
        assert_eq!(section.read().unwrap(), "# FAQ\n");
    }

    #[test]
    fn test_read_normalizes_crlf() {
        let tmp = TempDir::new().unwrap();
        let section = SectionFile::new(tmp.path(), "usage.md");
        fs::write(&section.path, "# Usage\r\nRun it.\r\n").unwrap();

        let content = section.read().unwrap();
        assert_eq!(content, "# Usage\nRun it.\n");
        assert_eq!(char_len(&content), 16);

        let index = IndexFile::new(tmp.path(), "usage.md");
        assert_eq!(index.read().unwrap(), content);
    }

    #[test]
    fn test_directory_is_not_an_existing_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("index.md")).unwrap();
        let index = IndexFile::new(tmp.path(), "index.md");
        assert!(!index.exists());
    }
}
