//! In-memory audit trail
//!
//! Ordered list of access decisions with counters and a JSON Lines export.

use crate::events::AccessEvent;
use crate::types::AccessOutcome;
use std::io::Write;

/// Ordered audit trail of access decisions
///
/// Owned by the door system for the lifetime of the process; nothing is
/// persisted unless explicitly exported.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    events: Vec<AccessEvent>,
}

impl AuditLog {
    /// Create an empty audit log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the trail
    pub fn record(&mut self, event: AccessEvent) {
        self.events.push(event);
    }

    /// All recorded events in decision order
    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the trail is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of granted decisions
    pub fn granted_count(&self) -> usize {
        self.events.iter().filter(|e| e.outcome.is_granted()).count()
    }

    /// Number of denied decisions
    pub fn denied_count(&self) -> usize {
        self.events.iter().filter(|e| e.outcome.is_denied()).count()
    }

    /// Number of ignored (already-unlocked) decisions
    pub fn ignored_count(&self) -> usize {
        self.events.iter().filter(|e| e.outcome == AccessOutcome::Ignored).count()
    }

    /// One-line summary of the trail
    pub fn summary(&self) -> String {
        format!(
            "{} access decisions: {} granted, {} denied, {} ignored",
            self.len(),
            self.granted_count(),
            self.denied_count(),
            self.ignored_count()
        )
    }

    /// Write the trail as JSON Lines, one event per line
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        for event in &self.events {
            let line = serde_json::to_string(event)?;
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}
