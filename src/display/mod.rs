//! Terminal display formatting
//!
//! Formats reports and warnings for the interactive session. Styling is
//! purely presentational; everything functional lives in the text itself.

pub mod register;
pub mod totals;

pub use register::{format_entry_row, format_register};
pub use totals::format_totals;

use crossterm::style::Stylize;

use crate::storage::SkippedRow;

/// Format a warning line for a store row that could not be parsed
pub fn format_skipped_warning(skipped: &SkippedRow) -> String {
    format!(
        "{}",
        format!("warning: skipped line {}: {}", skipped.line, skipped.reason).dark_yellow()
    )
}
