//! CLI argument definitions for sitecheck.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitecheck")]
#[command(version)]
#[command(about = "Validate the structure of a Markdown-fragment documentation site", long_about = None)]
#[command(
    after_help = "LAYOUT:\n    <base>/index.md              Index page including every section\n    <base>/_sections/<name>.md   One file per required section\n\n    <base> defaults to the directory containing the sitecheck executable."
)]
pub struct Cli {
    /// Documentation base directory (default: $SITECHECK_BASE_DIR, then the executable's directory)
    #[arg(long, value_name = "DIR", global = true)]
    pub base_dir: Option<String>,

    /// Config file with YAML frontmatter (default: <base>/sitecheck.md if present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Only print failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the structure checks (the default when no subcommand is given)
    Check,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
