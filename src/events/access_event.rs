//! Structured audit record for access decisions
//!
//! Every access decision produces one [`AccessEvent`] in addition to the
//! human-readable trace line. Explicit lock operations are operational, not
//! access decisions, and are traced but not audited.

use crate::access::Identity;
use crate::types::{AccessChannel, AccessOutcome, DenialReason, EventId, LockState, PersonId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audited access decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Unique identifier of this event
    pub event_id: EventId,
    /// When the decision was made
    pub timestamp: DateTime<Utc>,
    /// Id of the requesting person
    pub person_id: PersonId,
    /// Name of the requesting person
    pub person_name: String,
    /// Role tag of the request, when one was established. Remote-channel
    /// denials are rejected before any role dispatch and carry none.
    pub role: Option<Role>,
    /// Channel the request arrived on
    pub channel: AccessChannel,
    /// The decision
    #[serde(flatten)]
    pub outcome: AccessOutcome,
    /// Lock state observed after the decision
    pub lock_state_after: LockState,
}

impl AccessEvent {
    /// Record a granted access
    pub fn granted(person: &Identity, role: Role, lock_state_after: LockState) -> Self {
        Self::new(person, Some(role), AccessChannel::Keypad, AccessOutcome::Granted, lock_state_after)
    }

    /// Record a denied access
    pub fn denied(
        person: &Identity,
        role: Option<Role>,
        channel: AccessChannel,
        reason: DenialReason,
        lock_state_after: LockState,
    ) -> Self {
        Self::new(person, role, channel, AccessOutcome::Denied(reason), lock_state_after)
    }

    /// Record a request ignored because the door was already unlocked
    pub fn ignored(person: &Identity, role: Role, lock_state_after: LockState) -> Self {
        Self::new(person, Some(role), AccessChannel::Keypad, AccessOutcome::Ignored, lock_state_after)
    }

    fn new(
        person: &Identity,
        role: Option<Role>,
        channel: AccessChannel,
        outcome: AccessOutcome,
        lock_state_after: LockState,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            timestamp: Utc::now(),
            person_id: person.id.clone(),
            person_name: person.name.clone(),
            role,
            channel,
            outcome,
            lock_state_after,
        }
    }
}
