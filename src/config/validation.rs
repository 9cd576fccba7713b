//! Validation logic for validator options.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

use super::ValidatorConfig;

/// Placeholder substituted with the section file name in `include_directive`
pub const SECTION_PLACEHOLDER: &str = "{section}";
/// Placeholder substituted with `sections_dir` in `include_directive`
pub const SECTIONS_DIR_PLACEHOLDER: &str = "{sections_dir}";

impl ValidatorConfig {
    /// Validate the configuration, rejecting values the checks cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.required_sections.is_empty() {
            anyhow::bail!("required_sections must list at least one section file");
        }

        let mut seen = HashSet::new();
        for section in &self.required_sections {
            if section.trim().is_empty() {
                anyhow::bail!("required_sections contains an empty name");
            }
            if section.contains('/') || section.contains('\\') {
                anyhow::bail!(
                    "required_sections entry '{}' must be a file name, not a path",
                    section
                );
            }
            if !seen.insert(section.as_str()) {
                anyhow::bail!("required_sections lists '{}' more than once", section);
            }
        }

        if self.sections_dir.trim().is_empty() {
            anyhow::bail!("sections_dir must not be empty");
        }
        if self.index_file.trim().is_empty() {
            anyhow::bail!("index_file must not be empty");
        }

        if !self.include_directive.contains(SECTION_PLACEHOLDER) {
            anyhow::bail!(
                "include_directive must contain the {} placeholder, got '{}'",
                SECTION_PLACEHOLDER,
                self.include_directive
            );
        }

        self.heading_regex()?;

        Ok(())
    }

    /// Compile `heading_pattern` into a regex where `^` and `$` match at line
    /// boundaries, whether or not the pattern sets `(?m)` itself
    pub fn heading_regex(&self) -> Result<Regex> {
        RegexBuilder::new(&self.heading_pattern)
            .multi_line(true)
            .build()
            .with_context(|| format!("Invalid heading_pattern '{}'", self.heading_pattern))
    }

    /// Build the include directive the index must contain for `section`
    pub fn include_directive_for(&self, section: &str) -> String {
        self.include_directive
            .replace(SECTIONS_DIR_PLACEHOLDER, &self.sections_dir)
            .replace(SECTION_PLACEHOLDER, section)
    }
}
