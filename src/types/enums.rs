//! Core enumeration types for the door lock simulator
//!
//! This module contains the closed vocabularies of the lock domain: the
//! access-request role tag, the lock state machine states, the simulated
//! motor direction, access channels, and access decision outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role tag distinguishing the admin and user access paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator: unlocks without a PIN, triggers auto-relock
    Admin,
    /// PIN-holding user: unlocks with a verified PIN, no auto-relock
    User,
}

impl Role {
    /// Whether an unlock on this path auto-relocks after the access window
    pub fn auto_relocks(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// State of the door lock
///
/// The lock is a strict two-value state machine: it is always exactly one of
/// these, with no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    /// The door is locked (initial state)
    Locked,
    /// The door is unlocked
    Unlocked,
}

impl LockState {
    /// Whether the door is currently locked
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked)
    }
}

impl Default for LockState {
    fn default() -> Self {
        LockState::Locked
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockState::Locked => write!(f, "LOCKED"),
            LockState::Unlocked => write!(f, "UNLOCKED"),
        }
    }
}

/// Simulated motor rotation direction reported in trace output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotorDirection {
    /// Locking rotation
    Clockwise,
    /// Unlocking rotation
    Anticlockwise,
}

impl fmt::Display for MotorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorDirection::Clockwise => write!(f, "CLOCKWISE"),
            MotorDirection::Anticlockwise => write!(f, "ANTICLOCKWISE"),
        }
    }
}

/// Channel through which an access request arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessChannel {
    /// On-site request: keypad PIN entry or the admin console
    Keypad,
    /// Remote request: categorically denied, no protocol behind it
    Remote,
}

impl fmt::Display for AccessChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessChannel::Keypad => write!(f, "keypad"),
            AccessChannel::Remote => write!(f, "remote"),
        }
    }
}

/// Reason an access request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Entered PIN did not match the stored secret
    WrongPin,
    /// Remote access is unsupported for users
    RemoteAccessNotAllowed,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::WrongPin => write!(f, "wrong PIN"),
            DenialReason::RemoteAccessNotAllowed => write!(f, "remote access is not allowed"),
        }
    }
}

/// Outcome of an access decision
///
/// Invalid input (wrong PIN, remote access, unlock-when-unlocked) is an
/// ordinary outcome, not an error: the core never raises for these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum AccessOutcome {
    /// Access was granted and the door unlocked
    Granted,
    /// Access was denied for the given reason; the lock state is untouched
    Denied(DenialReason),
    /// The request arrived while the door was already unlocked; no-op
    Ignored,
}

impl AccessOutcome {
    /// Whether this outcome granted access
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessOutcome::Granted)
    }

    /// Whether this outcome denied access
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessOutcome::Denied(_))
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessOutcome::Granted => write!(f, "granted"),
            AccessOutcome::Denied(reason) => write!(f, "denied ({})", reason),
            AccessOutcome::Ignored => write!(f, "ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_role_auto_relock_policy() {
        assert!(Role::Admin.auto_relocks());
        assert!(!Role::User.auto_relocks());
    }

    #[test]
    fn test_lock_state_default_is_locked() {
        assert_eq!(LockState::default(), LockState::Locked);
        assert!(LockState::default().is_locked());
        assert!(!LockState::Unlocked.is_locked());
    }

    #[test]
    fn test_lock_state_display() {
        assert_eq!(LockState::Locked.to_string(), "LOCKED");
        assert_eq!(LockState::Unlocked.to_string(), "UNLOCKED");
    }

    #[test]
    fn test_motor_direction_display() {
        assert_eq!(MotorDirection::Clockwise.to_string(), "CLOCKWISE");
        assert_eq!(MotorDirection::Anticlockwise.to_string(), "ANTICLOCKWISE");
    }

    #[test]
    fn test_access_outcome_predicates() {
        assert!(AccessOutcome::Granted.is_granted());
        assert!(!AccessOutcome::Granted.is_denied());
        assert!(AccessOutcome::Denied(DenialReason::WrongPin).is_denied());
        assert!(!AccessOutcome::Ignored.is_granted());
        assert!(!AccessOutcome::Ignored.is_denied());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_access_outcome_serialization() {
        let denied = AccessOutcome::Denied(DenialReason::WrongPin);
        let json = serde_json::to_string(&denied).unwrap();
        assert!(json.contains("denied"));
        assert!(json.contains("wrong_pin"));

        let back: AccessOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, denied);
    }
}
