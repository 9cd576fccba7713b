//! Output mode selection and color choices shared by the CLI.

use colored::Color;

use crate::output::OutputMode;

/// Environment variable that enables quiet mode
pub const QUIET_ENV: &str = "SITECHECK_QUIET";

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Resolve the output mode from the `--quiet` flag and the environment.
pub fn output_mode(quiet_flag: bool) -> OutputMode {
    if quiet_flag || is_quiet() {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    }
}

/// Color of the closing banner.
///
/// - passed: green
/// - failed: red
pub fn verdict_color(passed: bool) -> Color {
    if passed {
        Color::Green
    } else {
        Color::Red
    }
}
