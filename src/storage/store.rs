//! CSV-backed income record store
//!
//! The store is an append-only, comma-separated text file with a fixed
//! four-column schema and a header row. It is the sole persisted state:
//! the file is opened, used, and closed within each discrete operation,
//! with no handle kept across user interactions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Category, Entry, TIMESTAMP_FORMAT};

/// Column names of the record store, in schema order
///
/// Fixed across versions; there is no migration step.
pub const STORE_HEADERS: [&str; 4] = ["type", "amount", "date", "notes"];

/// Why a stored row could not be turned into an [`Entry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Category code outside the known `c`/`d` enumerants
    UnknownCategory(String),
    /// Amount column does not parse as a real number
    BadAmount(String),
    /// Date column does not parse as a store timestamp
    BadTimestamp(String),
    /// Row is missing a required column
    MissingField(&'static str),
}

impl RowError {
    /// Unknown-category rows are skipped silently by the totals report;
    /// every other kind is surfaced as a warning.
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(code) => write!(f, "unknown category code '{}'", code),
            Self::BadAmount(value) => write!(f, "unparseable amount '{}'", value),
            Self::BadTimestamp(value) => write!(f, "unparseable timestamp '{}'", value),
            Self::MissingField(name) => write!(f, "missing '{}' column", name),
        }
    }
}

/// A stored row that was skipped while reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the store file (the header is line 1)
    pub line: u64,
    /// Why the row was skipped
    pub reason: RowError,
}

/// Result of reading the full store
#[derive(Debug, Clone, Default)]
pub struct StoreReading {
    /// Entries in store order (which equals chronological order)
    pub entries: Vec<Entry>,
    /// Rows that could not be parsed, in store order
    pub skipped: Vec<SkippedRow>,
}

/// The persisted income record store
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store handle for the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the backing file with its header row if it is absent
    ///
    /// Idempotent: an existing file is left untouched and its content is
    /// not validated.
    pub fn ensure_exists(&self) -> TrackerResult<()> {
        if self.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrackerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // create_new guards against a concurrent creation between the
        // exists() check and the open.
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => {
                return Err(TrackerError::Storage(format!(
                    "Failed to create {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(STORE_HEADERS)?;
        writer.flush().map_err(|e| {
            TrackerError::Storage(format!("Failed to write store header: {}", e))
        })?;

        Ok(())
    }

    /// Append one entry to the store
    ///
    /// The record is serialized to memory first and written with a single
    /// append, so no partial record can reach the file.
    pub fn append(&self, entry: &Entry) -> TrackerResult<()> {
        self.ensure_exists()?;

        let amount_field = entry.amount.value().to_string();
        let timestamp_field = entry.timestamp_string();

        let mut buffer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        buffer.write_record([
            entry.category.code(),
            amount_field.as_str(),
            timestamp_field.as_str(),
            entry.notes.as_str(),
        ])?;
        let bytes = buffer
            .into_inner()
            .map_err(|e| TrackerError::Storage(format!("Failed to serialize record: {}", e)))?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TrackerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        file.write_all(&bytes).map_err(|e| {
            TrackerError::Storage(format!("Failed to append to {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    /// Read every record in the store
    ///
    /// Returns `None` if the backing file does not exist (the empty-state
    /// condition). Rows that cannot be parsed are collected in
    /// [`StoreReading::skipped`] rather than aborting the whole read.
    pub fn read(&self) -> TrackerResult<Option<StoreReading>> {
        if !self.exists() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                TrackerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut reading = StoreReading::default();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            match parse_record(&record) {
                Ok(entry) => reading.entries.push(entry),
                Err(reason) => reading.skipped.push(SkippedRow { line, reason }),
            }
        }

        Ok(Some(reading))
    }
}

/// Parse a single store record into an entry
fn parse_record(record: &StringRecord) -> Result<Entry, RowError> {
    let code = record.get(0).ok_or(RowError::MissingField("type"))?;
    let category =
        Category::from_code(code).ok_or_else(|| RowError::UnknownCategory(code.to_string()))?;

    let amount_str = record.get(1).ok_or(RowError::MissingField("amount"))?;
    let amount =
        Amount::parse(amount_str).map_err(|_| RowError::BadAmount(amount_str.to_string()))?;

    let timestamp_str = record.get(2).ok_or(RowError::MissingField("date"))?;
    let recorded_at = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT)
        .map_err(|_| RowError::BadTimestamp(timestamp_str.to_string()))?;

    // A row cut short after the date keeps its entry; notes default to empty.
    let notes = record.get(3).unwrap_or("").to_string();

    Ok(Entry::with_recorded_at(category, amount, recorded_at, notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, EntryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::new(temp_dir.path().join("income_log.csv"));
        (temp_dir, store)
    }

    fn sample_entry(code: Category, amount: f64, notes: &str) -> Entry {
        let recorded_at =
            NaiveDateTime::parse_from_str("2024-03-01 09:15:32", TIMESTAMP_FORMAT).unwrap();
        Entry::with_recorded_at(code, Amount::new(amount), recorded_at, notes)
    }

    #[test]
    fn test_ensure_exists_writes_header() {
        let (_temp_dir, store) = temp_store();

        store.ensure_exists().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "type,amount,date,notes\n");
    }

    #[test]
    fn test_ensure_exists_is_idempotent() {
        let (_temp_dir, store) = temp_store();

        store.ensure_exists().unwrap();
        let first = fs::read(store.path()).unwrap();

        store.ensure_exists().unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_ensure_exists_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::new(temp_dir.path().join("data").join("income_log.csv"));

        store.ensure_exists().unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_append_and_read_round_trip() {
        let (_temp_dir, store) = temp_store();
        store.ensure_exists().unwrap();

        let entry = sample_entry(Category::Cash, 125.5, "lunch shift tips");
        store.append(&entry).unwrap();

        let reading = store.read().unwrap().expect("store exists");
        assert_eq!(reading.entries, vec![entry]);
        assert!(reading.skipped.is_empty());
    }

    #[test]
    fn test_append_keeps_prior_lines_unchanged() {
        let (_temp_dir, store) = temp_store();
        store.ensure_exists().unwrap();

        store
            .append(&sample_entry(Category::Cash, 50.0, "tips"))
            .unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        store
            .append(&sample_entry(Category::Deposit, 25.5, "paycheck"))
            .unwrap();
        let after = fs::read_to_string(store.path()).unwrap();

        assert!(after.starts_with(&before));
        assert_eq!(after.lines().count(), before.lines().count() + 1);
    }

    #[test]
    fn test_append_quotes_notes_with_commas() {
        let (_temp_dir, store) = temp_store();
        store.ensure_exists().unwrap();

        store
            .append(&sample_entry(Category::Cash, 10.0, "tips, and change"))
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\"tips, and change\""));

        let reading = store.read().unwrap().unwrap();
        assert_eq!(reading.entries[0].notes, "tips, and change");
    }

    #[test]
    fn test_read_missing_store_is_empty_state() {
        let (_temp_dir, store) = temp_store();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_read_header_only_store() {
        let (_temp_dir, store) = temp_store();
        store.ensure_exists().unwrap();

        let reading = store.read().unwrap().unwrap();
        assert!(reading.entries.is_empty());
        assert!(reading.skipped.is_empty());
    }

    #[test]
    fn test_read_skips_unknown_category() {
        let (_temp_dir, store) = temp_store();
        fs::write(
            store.path(),
            "type,amount,date,notes\n\
             x,10.0,2024-03-01 09:15:32,mystery\n\
             c,50.0,2024-03-01 10:00:00,tips\n",
        )
        .unwrap();

        let reading = store.read().unwrap().unwrap();
        assert_eq!(reading.entries.len(), 1);
        assert_eq!(reading.entries[0].category, Category::Cash);
        assert_eq!(reading.skipped.len(), 1);
        assert_eq!(reading.skipped[0].line, 2);
        assert!(reading.skipped[0].reason.is_unknown_category());
    }

    #[test]
    fn test_read_skips_malformed_amount_and_timestamp() {
        let (_temp_dir, store) = temp_store();
        fs::write(
            store.path(),
            "type,amount,date,notes\n\
             c,not-a-number,2024-03-01 09:15:32,bad amount\n\
             d,80.0,yesterday,bad date\n\
             d,25.5,2024-03-02 14:00:00,paycheck\n",
        )
        .unwrap();

        let reading = store.read().unwrap().unwrap();
        assert_eq!(reading.entries.len(), 1);
        assert_eq!(reading.entries[0].notes, "paycheck");

        assert_eq!(reading.skipped.len(), 2);
        assert_eq!(
            reading.skipped[0].reason,
            RowError::BadAmount("not-a-number".to_string())
        );
        assert_eq!(
            reading.skipped[1].reason,
            RowError::BadTimestamp("yesterday".to_string())
        );
    }

    #[test]
    fn test_read_tolerates_missing_notes_column() {
        let (_temp_dir, store) = temp_store();
        fs::write(
            store.path(),
            "type,amount,date,notes\nc,50.0,2024-03-01 09:15:32\n",
        )
        .unwrap();

        let reading = store.read().unwrap().unwrap();
        assert_eq!(reading.entries.len(), 1);
        assert_eq!(reading.entries[0].notes, "");
    }

    #[test]
    fn test_read_preserves_store_order() {
        let (_temp_dir, store) = temp_store();
        store.ensure_exists().unwrap();

        for (amount, notes) in [(1.0, "first"), (2.0, "second"), (3.0, "third")] {
            store
                .append(&sample_entry(Category::Cash, amount, notes))
                .unwrap();
        }

        let reading = store.read().unwrap().unwrap();
        let notes: Vec<&str> = reading.entries.iter().map(|e| e.notes.as_str()).collect();
        assert_eq!(notes, vec!["first", "second", "third"]);
    }
}
