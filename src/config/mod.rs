//! Configuration for the structure validator.
//!
//! Every option has a default, so a documentation tree that follows the
//! standard layout needs no config file at all. A config file is a Markdown
//! document whose YAML frontmatter overrides any subset of the options:
//!
//! ```markdown
//! ---
//! required_sections:
//!   - overview.md
//!   - usage.md
//! min_content_length: 40
//! ---
//!
//! # Docs checks
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter::split_frontmatter;
use crate::paths::CONFIG_FILE;

pub mod defaults;
pub mod validation;

pub use defaults::*;
pub use validation::*;

/// Options recognized by the structure validator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Ordered section file names that must exist under `sections_dir`
    #[serde(default = "default_required_sections")]
    pub required_sections: Vec<String>,
    /// Directory holding section files, relative to the base directory
    #[serde(default = "default_sections_dir")]
    pub sections_dir: String,
    /// Index file that must include every section, relative to the base directory
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// A section must have strictly more characters than this
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,
    /// Template of the include marker expected in the index
    #[serde(default = "default_include_directive")]
    pub include_directive: String,
    /// Line-anchored regex that detects a Markdown heading
    #[serde(default = "default_heading_pattern")]
    pub heading_pattern: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            required_sections: default_required_sections(),
            sections_dir: default_sections_dir(),
            index_file: default_index_file(),
            min_content_length: default_min_content_length(),
            include_directive: default_include_directive(),
            heading_pattern: default_heading_pattern(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration for a documentation tree.
    ///
    /// Lookup order:
    /// 1. `explicit` path, when given (must exist)
    /// 2. `<base_dir>/sitecheck.md`, when present
    /// 3. Built-in defaults
    pub fn load(base_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let local = base_config_path(base_dir);
        if local.exists() {
            return Self::load_from(&local);
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: ValidatorConfig = if frontmatter.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Directory holding section files under `base_dir`
    pub fn sections_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.sections_dir)
    }
}

/// Path of the optional config file inside a documentation tree
pub fn base_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE)
}
