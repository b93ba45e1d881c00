//! Interactive menu loop
//!
//! Dispatches the four menu options until the user exits or input ends.

use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use crate::error::TrackerResult;

use super::prompt::prompt_line;
use super::record::{record_entry, RecordOutcome};
use super::report::{show_register, show_totals};
use super::App;

/// One of the four menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Record a new income entry
    AddIncome,
    /// Print aggregate totals
    ShowTotals,
    /// Print the chronological listing
    ListEntries,
    /// Terminate normally
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; anything but `1`-`4` is invalid
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddIncome),
            "2" => Some(Self::ShowTotals),
            "3" => Some(Self::ListEntries),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the interactive menu loop until exit or end-of-input
pub fn run<R, W>(app: &App, input: &mut R, output: &mut W) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "{}",
        "Welcome to Your Personal Income Tracker".bold().green()
    )?;

    let pick_prompt = format!("{} ", "Pick 1-4:".bold().yellow());

    loop {
        writeln!(output)?;
        writeln!(output, "Options:")?;
        writeln!(output, "{}", "1. Add income".bold().red())?;
        writeln!(output, "{}", "2. Show total income".bold().red())?;
        writeln!(output, "{}", "3. Display previous logs".bold().red())?;
        writeln!(output, "{}", "4. Exit".bold().red())?;

        let Some(line) = prompt_line(input, output, &pick_prompt)? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::AddIncome) => {
                if record_entry(app, input, output)? == RecordOutcome::Cancelled {
                    break;
                }
            }
            Some(MenuChoice::ShowTotals) => show_totals(app, output)?,
            Some(MenuChoice::ListEntries) => show_register(app, output)?,
            Some(MenuChoice::Exit) => {
                writeln!(output, "{}", "Exiting.".bold().green())?;
                break;
            }
            None => writeln!(
                output,
                "{}",
                "Invalid choice. Please select a valid option.".blue()
            )?,
        }
    }

    Ok(())
}
