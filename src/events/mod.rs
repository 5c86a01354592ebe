//! Access event auditing
//!
//! This module contains the structured audit record produced for every
//! access decision and the in-memory audit trail that collects them.

pub mod access_event;
pub mod audit_log;

// Re-export all public types for convenience
pub use access_event::AccessEvent;
pub use audit_log::AuditLog;
