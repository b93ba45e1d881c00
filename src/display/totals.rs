//! Totals report formatting

use crossterm::style::Stylize;

use crate::reports::TotalsReport;

/// Format the aggregate totals for terminal display
pub fn format_totals(report: &TotalsReport, currency_symbol: &str) -> String {
    let cash_line = format!(
        "{:<15}{:>12}",
        "Total Cash:",
        report.cash_total.format_with_symbol(currency_symbol)
    );
    let deposit_line = format!(
        "{:<15}{:>12}",
        "Total Deposit:",
        report.deposit_total.format_with_symbol(currency_symbol)
    );
    let subtotal_line = format!(
        "{:<15}{:>12}",
        "Subtotal:",
        report.subtotal().format_with_symbol(currency_symbol)
    );

    format!(
        "{}\n{}\n{}\n",
        cash_line.bold().blue(),
        deposit_line.bold().yellow(),
        subtotal_line.bold().green()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, Entry, TIMESTAMP_FORMAT};
    use chrono::NaiveDateTime;

    fn entry(category: Category, amount: f64) -> Entry {
        let recorded_at =
            NaiveDateTime::parse_from_str("2024-03-01 09:15:32", TIMESTAMP_FORMAT).unwrap();
        Entry::with_recorded_at(category, Amount::new(amount), recorded_at, "")
    }

    #[test]
    fn test_format_totals() {
        let entries = vec![entry(Category::Cash, 50.0), entry(Category::Deposit, 25.5)];
        let report = TotalsReport::from_entries(&entries);

        let formatted = format_totals(&report, "$");
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("$25.50"));
        assert!(formatted.contains("$75.50"));
    }

    #[test]
    fn test_format_totals_zero_state() {
        let formatted = format_totals(&TotalsReport::default(), "$");
        assert!(formatted.contains("Total Cash:"));
        assert!(formatted.contains("$0.00"));
    }
}
