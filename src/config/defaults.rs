//! Default values for validator options.

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(
    default_required_sections,
    Vec<String>,
    [
        "features.md",
        "installation.md",
        "usage.md",
        "requirements.md",
        "faq.md",
        "support.md",
        "changelog.md",
        "license.md",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
);
default_fn!(
    default_sections_dir,
    String,
    crate::paths::SECTIONS_DIR.to_string()
);
default_fn!(default_index_file, String, crate::paths::INDEX_FILE.to_string());
default_fn!(default_min_content_length, usize, 100);
default_fn!(
    default_include_directive,
    String,
    "{% include_relative {sections_dir}/{section} %}".to_string()
);
default_fn!(default_heading_pattern, String, r"^#+[^\S\n]+\S".to_string());
