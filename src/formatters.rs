//! Output formatters for validation results
//!
//! Transforms validation outcomes into terminal text. Color handling is
//! delegated to `colored`, which disables itself on non-TTY output.

use colored::Colorize;

use rutcheck::rut::ValidationResult;

use crate::cmd::batch::BatchSummary;

/// Format a single validation outcome as a result line.
///
/// Valid identifiers show their normalized form; invalid ones echo the raw
/// input with the failure message.
pub fn format_check_line(raw: &str, result: &ValidationResult) -> String {
    if result.valid {
        format!("{} {}", "✓".green(), result.normalized.cyan())
    } else {
        format!("{} {}  {}", "✗".red(), raw, result.message.dimmed())
    }
}

/// Format batch counts with aligned labels
pub fn format_batch_summary(summary: &BatchSummary) -> String {
    let invalid = if summary.invalid > 0 {
        summary.invalid.to_string().red().to_string()
    } else {
        summary.invalid.to_string()
    };

    format!(
        "  {:<9} {}\n  {:<9} {}\n  {:<9} {}",
        "Total:",
        summary.total,
        "Valid:",
        summary.valid.to_string().green(),
        "Invalid:",
        invalid,
    )
}
