//! Interactive entry recorder
//!
//! Prompts for category, amount, and notes, re-prompting until each
//! input is acceptable, then appends exactly one record to the store.

use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use crate::audit::AuditEvent;
use crate::error::TrackerResult;
use crate::models::{Amount, Category, Entry};

use super::prompt::prompt_line;
use super::App;

/// Outcome of an interactive recording session
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The entry was appended to the store
    Recorded(Entry),
    /// End-of-input arrived before the entry was complete
    Cancelled,
}

/// Record one income entry interactively
///
/// The category and amount prompts retry without bound until the input
/// is acceptable; the notes prompt accepts anything, empty included.
/// The entry is built fully in memory, stamped with the current local
/// time, and appended in a single operation.
pub fn record_entry<R, W>(app: &App, input: &mut R, output: &mut W) -> TrackerResult<RecordOutcome>
where
    R: BufRead,
    W: Write,
{
    let category_prompt = format!("{} ", "Cash or Deposit (c/d):".bold().yellow());
    let category = loop {
        let Some(line) = prompt_line(input, output, &category_prompt)? else {
            return Ok(RecordOutcome::Cancelled);
        };
        match Category::parse_selector(&line) {
            Some(category) => break category,
            None => writeln!(
                output,
                "Invalid input. Please enter 'c' for Cash or 'd' for Deposit."
            )?,
        }
    };

    let amount_prompt = format!("{} ", "Amount of money?".bold().yellow());
    let amount = loop {
        let Some(line) = prompt_line(input, output, &amount_prompt)? else {
            return Ok(RecordOutcome::Cancelled);
        };
        match Amount::parse(&line) {
            Ok(amount) => break amount,
            Err(_) => writeln!(output, "Invalid input. Please enter a numeric value.")?,
        }
    };

    let notes_prompt = format!("{} ", "Any notes?".bold().yellow());
    let Some(notes) = prompt_line(input, output, &notes_prompt)? else {
        return Ok(RecordOutcome::Cancelled);
    };

    let entry = Entry::new(category, amount, notes);
    app.store.append(&entry)?;
    app.audit.log(&AuditEvent::entry_recorded(&entry))?;

    writeln!(
        output,
        "Recorded {} entry for {}.",
        entry.category,
        entry
            .amount
            .format_with_symbol(&app.settings.currency_symbol)
    )?;

    Ok(RecordOutcome::Recorded(entry))
}
