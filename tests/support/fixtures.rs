/// The default required sections, in check order.
pub const SECTIONS: [&str; 8] = [
    "features.md",
    "installation.md",
    "usage.md",
    "requirements.md",
    "faq.md",
    "support.md",
    "changelog.md",
    "license.md",
];

/// A section body that passes the content and heading checks.
pub fn section_content(name: &str) -> String {
    let title = name.trim_end_matches(".md");
    format!(
        "## {}\n\nThis page covers {} for the project. It is long enough to satisfy \
         the minimum content length and starts with a level two heading.\n",
        title, title
    )
}

/// The include directive the index must carry for `name`.
pub fn include_directive(name: &str) -> String {
    format!("{{% include_relative _sections/{} %}}", name)
}

/// An index page that includes every default section.
pub fn index_content() -> String {
    let mut index = String::from("---\nlayout: default\n---\n\n# Project documentation\n\n");
    for name in SECTIONS {
        index.push_str(&include_directive(name));
        index.push_str("\n\n");
    }
    index
}
