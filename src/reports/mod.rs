//! Report generation
//!
//! Read-only aggregations over the record store.

pub mod totals;

pub use totals::TotalsReport;
