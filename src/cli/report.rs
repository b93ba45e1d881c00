//! Report handlers
//!
//! Both handlers read the full store per invocation and treat a missing
//! store file as the empty-state condition rather than an error.

use std::io::Write;

use crossterm::style::Stylize;

use crate::display;
use crate::error::TrackerResult;
use crate::reports::TotalsReport;

use super::App;

/// Print aggregate income totals
///
/// Rows with an unknown category code are skipped silently; other
/// malformed rows are skipped with a warning.
pub fn show_totals<W: Write>(app: &App, output: &mut W) -> TrackerResult<()> {
    let Some(reading) = app.store.read()? else {
        writeln!(output, "{}", "No data found. Start making money!".bold())?;
        return Ok(());
    };

    for skipped in reading
        .skipped
        .iter()
        .filter(|s| !s.reason.is_unknown_category())
    {
        writeln!(output, "{}", display::format_skipped_warning(skipped))?;
    }

    let report = TotalsReport::from_entries(&reading.entries);
    write!(
        output,
        "{}",
        display::format_totals(&report, &app.settings.currency_symbol)
    )?;

    Ok(())
}

/// Print the chronological listing of all entries
pub fn show_register<W: Write>(app: &App, output: &mut W) -> TrackerResult<()> {
    let Some(reading) = app.store.read()? else {
        writeln!(
            output,
            "{}",
            "No data found. Please start logging some income.".bold()
        )?;
        return Ok(());
    };

    for skipped in &reading.skipped {
        writeln!(output, "{}", display::format_skipped_warning(skipped))?;
    }

    writeln!(output, "{}", "All income entries:".bold())?;
    write!(
        output,
        "{}",
        display::format_register(&reading.entries, &app.settings.currency_symbol)
    )?;

    Ok(())
}
