//! Color theme for consistent output

use crate::categorize::CategorizeOutcome;
use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for error messages
pub fn error(msg: &str) -> ColoredString {
    msg.red()
}

/// Color for warning messages
pub fn warning(msg: &str) -> ColoredString {
    msg.yellow()
}

/// Color for info messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Color for category names
pub fn category(name: &str) -> ColoredString {
    name.bold()
}

/// Colored label for a categorization outcome
pub fn outcome_badge(outcome: CategorizeOutcome) -> ColoredString {
    let label = outcome.as_str();
    match outcome {
        CategorizeOutcome::Updated => label.green(),
        CategorizeOutcome::Unchanged => label.dimmed(),
        CategorizeOutcome::NoCategoryLine => label.yellow(),
        CategorizeOutcome::SkippedMissing => label.dimmed(),
        CategorizeOutcome::SkippedUnreadable => label.red(),
    }
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for error
pub fn error_symbol() -> &'static str {
    "✗"
}

/// Symbol for warning
pub fn warning_symbol() -> &'static str {
    "⚠"
}

/// Symbol for info
pub fn info_symbol() -> &'static str {
    "→"
}
