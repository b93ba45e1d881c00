//! Income entry model
//!
//! One recorded income event: category, amount, timestamp, and free-text
//! notes. Entries are created at the moment the user confirms input and
//! are immutable from then on; the store only ever appends them.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::category::Category;

/// Timestamp format used in the record store (sorts lexicographically)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Day-precision date format used in the listing report
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded income event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Cash or Deposit classification
    pub category: Category,

    /// Recorded value, full precision
    pub amount: Amount,

    /// When the entry was recorded (local time, second precision)
    #[serde(with = "timestamp_format")]
    pub recorded_at: NaiveDateTime,

    /// Free-form notes, may be empty
    pub notes: String,
}

impl Entry {
    /// Create a new entry stamped with the current local time
    pub fn new(category: Category, amount: Amount, notes: impl Into<String>) -> Self {
        Self {
            category,
            amount,
            recorded_at: Local::now().naive_local(),
            notes: notes.into(),
        }
    }

    /// Create an entry with an explicit timestamp
    pub fn with_recorded_at(
        category: Category,
        amount: Amount,
        recorded_at: NaiveDateTime,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            category,
            amount,
            recorded_at,
            notes: notes.into(),
        }
    }

    /// The day this entry was recorded
    pub fn recorded_date(&self) -> NaiveDate {
        self.recorded_at.date()
    }

    /// The timestamp as stored in the record store
    pub fn timestamp_string(&self) -> String {
        self.recorded_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Serde adapter for the store's timestamp format
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
