//! Audit logging for recorded entries
//!
//! Keeps a line-delimited JSON trail of every entry the tracker records,
//! separate from the record store itself.

pub mod event;
pub mod logger;

pub use event::{AuditEvent, Operation};
pub use logger::AuditLogger;
