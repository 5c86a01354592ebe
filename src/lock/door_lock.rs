//! Door lock state machine
//!
//! The lock is a strict two-value state machine: `Locked` and `Unlocked`,
//! starting locked. All operations are total; invalid requests are no-ops
//! with an informational trace, never errors.

use crate::access::Identity;
use crate::types::{LockState, MotorDirection, Role};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Result of an unlock request against the lock mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The door was unlocked. `auto_relocked` is true on the admin path,
    /// where the lock returns to `Locked` before the call returns.
    Granted {
        /// Whether the lock relocked itself within this call
        auto_relocked: bool,
    },
    /// The door was already unlocked; the request was ignored
    AlreadyUnlocked,
}

impl UnlockOutcome {
    /// Whether the request unlocked the door
    pub fn was_granted(&self) -> bool {
        matches!(self, UnlockOutcome::Granted { .. })
    }

    /// Map the mechanism-level outcome to the access-decision vocabulary
    pub fn into_access_outcome(self) -> crate::types::AccessOutcome {
        match self {
            UnlockOutcome::Granted { .. } => crate::types::AccessOutcome::Granted,
            UnlockOutcome::AlreadyUnlocked => crate::types::AccessOutcome::Ignored,
        }
    }
}

/// The lock mechanism
///
/// Holds the sole piece of mutable shared state in the simulator. The admin
/// access window is a blocking sleep in the calling thread: no cancellation,
/// no concurrency, exactly one request in flight at a time.
#[derive(Debug)]
pub struct DoorLock {
    state: LockState,
    relock_delay: Duration,
}

impl DoorLock {
    /// Create a locked door with the given admin auto-relock window
    pub fn new(relock_delay: Duration) -> Self {
        Self { state: LockState::Locked, relock_delay }
    }

    /// Current lock state
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Whether the door is currently locked
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// The configured admin auto-relock window
    pub fn relock_delay(&self) -> Duration {
        self.relock_delay
    }

    /// Unlock the door for the given role
    ///
    /// If the door is already unlocked the request is ignored with a notice.
    /// Otherwise the door unlocks; on the admin path the call then blocks for
    /// the relock window and relocks before returning (auto-relock), while
    /// the user path leaves the door unlocked until an explicit [`lock`].
    ///
    /// [`lock`]: DoorLock::lock
    pub fn unlock(&mut self, role: Role, person: &Identity) -> UnlockOutcome {
        if !self.is_locked() {
            info!("Ignored: door is already {}.", LockState::Unlocked);
            return UnlockOutcome::AlreadyUnlocked;
        }

        match role {
            Role::Admin => {
                info!(person = %person, "Admin access: PIN check bypassed. Access granted");
            }
            Role::User => {
                info!(person = %person, "User access: PIN verified. Access granted");
            }
        }
        info!(
            "Motor rotating {}. Door {}.",
            MotorDirection::Anticlockwise,
            LockState::Unlocked
        );
        self.state = LockState::Unlocked;

        if role.auto_relocks() {
            // Timed access window: a plain blocking wait in the calling
            // thread, after which the door relocks unconditionally.
            thread::sleep(self.relock_delay);
            self.lock();
            UnlockOutcome::Granted { auto_relocked: true }
        } else {
            UnlockOutcome::Granted { auto_relocked: false }
        }
    }

    /// Lock the door
    ///
    /// Returns whether a transition happened. Locking an already locked door
    /// is a silent no-op: no trace line, asymmetric with the unlock path's
    /// logged "already unlocked" notice. The asymmetry is intentional.
    pub fn lock(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        info!("Motor rotating {}. Door {}.", MotorDirection::Clockwise, LockState::Locked);
        self.state = LockState::Locked;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_lock() -> DoorLock {
        // Zero window keeps the admin path from sleeping in tests
        DoorLock::new(Duration::ZERO)
    }

    fn admin() -> Identity {
        Identity::new("Sarim", "S001")
    }

    fn user() -> Identity {
        Identity::new("Zara", "Z101")
    }

    #[test]
    fn test_initial_state_is_locked() {
        let lock = test_lock();
        assert_eq!(lock.state(), LockState::Locked);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_admin_unlock_auto_relocks_within_one_call() {
        let mut lock = test_lock();

        let outcome = lock.unlock(Role::Admin, &admin());

        assert_eq!(outcome, UnlockOutcome::Granted { auto_relocked: true });
        assert!(lock.is_locked());
    }

    #[test]
    fn test_user_unlock_stays_unlocked() {
        let mut lock = test_lock();

        let outcome = lock.unlock(Role::User, &user());

        assert_eq!(outcome, UnlockOutcome::Granted { auto_relocked: false });
        assert_eq!(lock.state(), LockState::Unlocked);
    }

    #[test]
    fn test_unlock_when_already_unlocked_is_ignored() {
        let mut lock = test_lock();
        lock.unlock(Role::User, &user());

        let outcome = lock.unlock(Role::User, &user());

        assert_eq!(outcome, UnlockOutcome::AlreadyUnlocked);
        assert_eq!(lock.state(), LockState::Unlocked);
    }

    #[test]
    fn test_lock_transitions_unlocked_to_locked() {
        let mut lock = test_lock();
        lock.unlock(Role::User, &user());

        assert!(lock.lock());
        assert!(lock.is_locked());
    }

    #[test]
    fn test_lock_when_already_locked_is_silent_noop() {
        let mut lock = test_lock();

        assert!(!lock.lock());
        assert!(lock.is_locked());
    }

    #[test]
    fn test_state_is_always_one_of_two_values() {
        let mut lock = test_lock();

        // Arbitrary interleaving of operations never escapes the two states
        let people = [admin(), user()];
        for step in 0..12 {
            match step % 4 {
                0 => {
                    lock.unlock(Role::User, &people[1]);
                }
                1 => {
                    lock.lock();
                }
                2 => {
                    lock.unlock(Role::Admin, &people[0]);
                }
                _ => {
                    lock.lock();
                }
            }
            assert!(matches!(lock.state(), LockState::Locked | LockState::Unlocked));
        }
    }

    #[test]
    fn test_unlock_outcome_access_mapping() {
        assert!(UnlockOutcome::Granted { auto_relocked: true }.was_granted());
        assert!(!UnlockOutcome::AlreadyUnlocked.was_granted());
        assert_eq!(
            UnlockOutcome::AlreadyUnlocked.into_access_outcome(),
            crate::types::AccessOutcome::Ignored
        );
    }
}
