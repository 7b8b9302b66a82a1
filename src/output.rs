//! Output formatting and styling module.
//!
//! Builds the styled strings used for all user-facing messages (success,
//! error, warning, info, banners). The functions here only format; the result
//! is routed through a [`crate::console::Console`] by the caller, which keeps
//! formatting decisions in one place without tying this module to a terminal.

use colored::*;

/// Formats a success message in green with a checkmark.
pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

/// Formats an error message in red with an X mark.
pub fn error(message: &str) -> String {
    format!("{} {}", "✗".red(), message)
}

/// Formats a warning message in yellow with a warning symbol.
pub fn warning(message: &str) -> String {
    format!("{} {}", "⚠".yellow(), message)
}

/// Formats an info message in cyan.
pub fn info(message: &str) -> String {
    message.cyan().to_string()
}

/// Formats a section header in bold.
pub fn header(text: &str) -> String {
    format!("\n{}", text.bold())
}

/// Formats a banner block around a title.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(43);
    format!("{}\n        {}\n{}", rule, title.bold(), rule)
}

/// Returns the menu separator line.
pub fn separator() -> String {
    "-".repeat(43)
}
