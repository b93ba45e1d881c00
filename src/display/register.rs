//! Chronological listing formatting
//!
//! Renders entries one row per record, in store order, with the date
//! reduced to day precision.

use crossterm::style::Stylize;

use crate::models::{Entry, DATE_FORMAT};

/// Format a single entry as a register row
pub fn format_entry_row(entry: &Entry, currency_symbol: &str) -> String {
    format!(
        "{:<10}{:>12}  {:<12}{}",
        entry.category.label(),
        entry.amount.format_with_symbol(currency_symbol),
        entry.recorded_date().format(DATE_FORMAT),
        entry.notes
    )
}

/// Format a list of entries as a register
pub fn format_register(entries: &[Entry], currency_symbol: &str) -> String {
    if entries.is_empty() {
        return "No entries recorded yet.\n".to_string();
    }

    let header = format!(
        "{:<10}{:>12}  {:<12}{}",
        "Category", "Amount", "Date", "Notes"
    );

    let mut output = String::new();
    output.push_str(&format!("{}\n", header.bold()));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry, currency_symbol));
        output.push('\n');
    }

    output
}
