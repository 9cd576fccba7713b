//! The structure check command.

use anyhow::Result;
use std::path::Path;

use sitecheck::config::ValidatorConfig;
use sitecheck::output::Output;
use sitecheck::ui;
use sitecheck::validator::StructureValidator;

/// Options for a check run, taken from the command line
pub struct CheckOptions<'a> {
    pub base_dir: Option<&'a str>,
    pub config: Option<&'a Path>,
    pub quiet: bool,
    pub no_color: bool,
}

/// Run the structure checks and return the process exit code.
///
/// Returns `Ok(0)` when every check passes and `Ok(1)` when one fails.
/// Configuration problems are returned as errors.
pub fn cmd_check(opts: CheckOptions<'_>) -> Result<i32> {
    let base_dir = super::resolve_base_dir(opts.base_dir)?;
    let config = ValidatorConfig::load(&base_dir, opts.config)?;

    let mut out = Output::new(ui::output_mode(opts.quiet));
    if opts.no_color {
        out = out.without_color();
    }

    let validator = StructureValidator::new(&base_dir, config)?.with_output(out);
    let report = validator.run();

    Ok(report.exit_code())
}
