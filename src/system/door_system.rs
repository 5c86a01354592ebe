//! Door system facade
//!
//! Composes the lock mechanism, the user directory, and the audit trail, and
//! routes every access request through one place.

use crate::access::{Identity, UserDirectory};
use crate::events::{AccessEvent, AuditLog};
use crate::lock::{DoorLock, UnlockOutcome};
use crate::types::{
    AccessChannel, AccessOutcome, DenialReason, LockState, Role, SimulationConfig,
};
use std::time::Duration;
use tracing::warn;

/// Facade over the lock, the user directory, and the audit trail
///
/// Exclusively owns all three; lives for the duration of the process.
/// Principals are created externally and passed in by reference — the system
/// owns only the registered copies inside the directory.
#[derive(Debug)]
pub struct DoorSystem {
    lock: DoorLock,
    directory: UserDirectory,
    audit: AuditLog,
}

impl DoorSystem {
    /// Create a door system from the simulation configuration
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_relock_delay(config.relock_delay())
    }

    /// Create a door system with an explicit admin auto-relock window
    pub fn with_relock_delay(relock_delay: Duration) -> Self {
        Self {
            lock: DoorLock::new(relock_delay),
            directory: UserDirectory::new(),
            audit: AuditLog::new(),
        }
    }

    /// Route an unlock request to the lock and audit the decision
    pub fn unlock_door(&mut self, role: Role, person: &Identity) -> UnlockOutcome {
        let outcome = self.lock.unlock(role, person);

        let event = match outcome {
            UnlockOutcome::Granted { .. } => {
                AccessEvent::granted(person, role, self.lock.state())
            }
            UnlockOutcome::AlreadyUnlocked => {
                AccessEvent::ignored(person, role, self.lock.state())
            }
        };
        self.audit.record(event);

        outcome
    }

    /// Deny a request whose entered PIN did not match
    ///
    /// The lock state is untouched; the denial is traced and audited.
    pub fn deny_wrong_pin(&mut self, person: &Identity) -> AccessOutcome {
        warn!(person = %person, "Access denied: wrong PIN entered by user");

        self.audit.record(AccessEvent::denied(
            person,
            Some(Role::User),
            AccessChannel::Keypad,
            DenialReason::WrongPin,
            self.lock.state(),
        ));

        AccessOutcome::Denied(DenialReason::WrongPin)
    }

    /// Deny a remote-channel request
    ///
    /// Remote access is categorically unsupported: the request is rejected
    /// before any role dispatch and the lock state is untouched.
    pub fn remote_access_not_allowed(&mut self, person: &Identity) -> AccessOutcome {
        warn!(person = %person, "Access denied: remote access is not allowed");

        self.audit.record(AccessEvent::denied(
            person,
            None,
            AccessChannel::Remote,
            DenialReason::RemoteAccessNotAllowed,
            self.lock.state(),
        ));

        AccessOutcome::Denied(DenialReason::RemoteAccessNotAllowed)
    }

    /// Explicitly relock the door
    ///
    /// Returns whether a transition happened; relocking a locked door is a
    /// silent no-op and leaves no audit entry.
    pub fn lock_door_again(&mut self) -> bool {
        self.lock.lock()
    }

    /// Current lock state
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    /// Registered user directory
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Mutable access to the user directory (admin registration)
    pub fn directory_mut(&mut self) -> &mut UserDirectory {
        &mut self.directory
    }

    /// The audit trail of access decisions
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}
