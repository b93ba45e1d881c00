//! Aggregate totals report
//!
//! Sums recorded amounts grouped by category into two running totals.

use crate::models::{Amount, Category, Entry};

/// Aggregate income totals by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalsReport {
    /// Sum of all Cash entries
    pub cash_total: Amount,
    /// Sum of all Deposit entries
    pub deposit_total: Amount,
}

impl TotalsReport {
    /// Compute totals over entries in store order
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut report = Self::default();

        for entry in entries {
            match entry.category {
                Category::Cash => report.cash_total += entry.amount,
                Category::Deposit => report.deposit_total += entry.amount,
            }
        }

        report
    }

    /// Sum of both totals
    pub fn subtotal(&self) -> Amount {
        self.cash_total + self.deposit_total
    }
}
