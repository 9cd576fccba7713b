//! # Sitecheck - documentation structure validation
//!
//! Sitecheck verifies the source tree of a static documentation site that is
//! assembled from Markdown fragments. A site has one index page and a
//! directory of section files; the index pulls each section in through an
//! include directive understood by the site generator.
//!
//! ## Checks
//!
//! Five checks run in a fixed order and stop at the first failure:
//!
//! 1. every required section file exists
//! 2. the index file exists
//! 3. the index includes every section
//! 4. every section has more than the minimum amount of content
//! 5. every section has at least one Markdown heading
//!
//! ## Modules
//!
//! - [`config`] - Validator options, defaults and config file loading
//! - [`docs`] - Section and index file observations
//! - [`validation`] - Check stages, failure kinds and the report
//! - [`validator`] - The [`validator::StructureValidator`] itself
//! - [`output`] - Line-oriented progress output
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use sitecheck::config::ValidatorConfig;
//! use sitecheck::validator::StructureValidator;
//!
//! let validator = StructureValidator::new(Path::new("docs"), ValidatorConfig::default())
//!     .expect("Failed to build validator");
//!
//! if !validator.validate() {
//!     std::process::exit(1);
//! }
//! ```

pub mod config;
pub mod docs;
pub mod frontmatter;
pub mod output;
pub mod ui;
pub mod validation;
pub mod validator;

/// Default path constants for the documentation tree.
pub mod paths {
    /// Directory holding section fragments, relative to the base directory: `_sections`
    pub const SECTIONS_DIR: &str = "_sections";
    /// Index page that includes every section: `index.md`
    pub const INDEX_FILE: &str = "index.md";
    /// Optional config file looked up in the base directory: `sitecheck.md`
    pub const CONFIG_FILE: &str = "sitecheck.md";
}
