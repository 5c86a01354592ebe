//! Person identity and PIN secret types
//!
//! This module contains the shared identity record for admins and users, and
//! the PIN secret wrapper that keeps the stored secret out of reach of
//! everything except the equality check.

use crate::types::PersonId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity shared by admins and users
///
/// Immutable once created. The simulator never owns the people themselves;
/// identities are copied into audit events and the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name of the person
    pub name: String,
    /// Operator-assigned identifier
    pub id: PersonId,
}

impl Identity {
    /// Create a new identity
    pub fn new(name: impl Into<String>, id: impl Into<PersonId>) -> Self {
        Self { name: name.into(), id: id.into() }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Stored PIN secret
///
/// The secret never leaves this type: there is no accessor and the `Debug`
/// output is redacted. Comparison is an exact string match with no
/// normalization and no constant-time guarantee; a production lock would need
/// constant-time comparison and hashed storage. The gap is kept deliberately
/// to match the simulated device.
#[derive(Clone)]
pub struct Pin(String);

impl Pin {
    /// Create a PIN from the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Check an entered PIN against the stored secret (exact string match)
    pub fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(<redacted>)")
    }
}
