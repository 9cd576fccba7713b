//! CLI entry point for sitecheck.

mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io::{self, Write};

use cli::{Cli, Commands};
use cmd::check::{cmd_check, CheckOptions};

/// Exit status for usage and configuration errors
const EXIT_CONFIG_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Some(Commands::Completion { shell }) => {
            cmd_completion(shell);
            Ok(0)
        }
        Some(Commands::Check) | None => cmd_check(CheckOptions {
            base_dir: cli.base_dir.as_deref(),
            config: cli.config.as_deref(),
            quiet: cli.quiet,
            no_color: cli.no_color,
        }),
    };

    let _ = io::stdout().flush();

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    }
}

/// Generate shell completion script
fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "sitecheck", &mut io::stdout());
}
