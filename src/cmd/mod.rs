//! Command module structure for the sitecheck CLI

use anyhow::{Context, Result};
use std::path::PathBuf;

pub mod check;

/// Environment variable that overrides the default base directory
pub const BASE_DIR_ENV: &str = "SITECHECK_BASE_DIR";

/// Resolve the documentation base directory.
///
/// Order: `--base-dir` flag, then `SITECHECK_BASE_DIR`, then the directory
/// containing the running executable. The process working directory is never
/// consulted. `~` is expanded in explicit values.
pub fn resolve_base_dir(flag: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(expand(dir));
    }

    if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(expand(&dir));
        }
    }

    let exe = std::env::current_exe().context("Failed to locate the sitecheck executable")?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .with_context(|| format!("Executable path has no parent: {}", exe.display()))
}

fn expand(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).to_string())
}
