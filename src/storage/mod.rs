//! Storage layer for the income tracker
//!
//! Provides the CSV-backed record store: append-only writes with a fixed
//! header row, and lenient full-store reads.

pub mod store;

pub use store::{EntryStore, RowError, SkippedRow, StoreReading, STORE_HEADERS};
