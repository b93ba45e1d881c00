//! Audit event data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// Types of operations that can be audited
///
/// Entries are immutable once recorded, so recording is the only
/// operation the tracker performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An income entry was recorded
    Record,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Record => write!(f, "RECORD"),
        }
    }
}

/// A single audit log event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// The recorded entry
    pub entry: Entry,
}

impl AuditEvent {
    /// Build the event for a freshly recorded entry
    pub fn entry_recorded(entry: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Record,
            entry: entry.clone(),
        }
    }
}
