//! Interactive command-line interface
//!
//! The menu loop, the entry recorder, and the report handlers. All of
//! them are generic over their reader/writer so tests can drive full
//! sessions through in-memory buffers.

pub mod menu;
pub mod prompt;
pub mod record;
pub mod report;

pub use menu::MenuChoice;
pub use record::RecordOutcome;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::storage::EntryStore;

/// Process-wide immutable context shared by all handlers
pub struct App {
    /// The record store
    pub store: EntryStore,
    /// Display settings
    pub settings: Settings,
    /// Audit trail for recorded entries
    pub audit: AuditLogger,
}
