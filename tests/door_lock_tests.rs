//! Unit tests for the door lock state machine
//!
//! Covers the two-state invariant, idempotence on both paths, and the
//! admin auto-relock behavior.

use smart_door_lock_simulator::*;
use std::time::{Duration, Instant};

fn admin() -> Identity {
    Identity::new("Sarim", "S001")
}

fn user() -> Identity {
    Identity::new("Zara", "Z101")
}

/// The lock starts locked
#[test]
fn test_lock_starts_locked() {
    let lock = DoorLock::new(Duration::ZERO);
    assert_eq!(lock.state(), LockState::Locked);
    assert!(lock.is_locked());
}

/// Admin unlock transitions Locked -> Unlocked -> Locked within one call
#[test]
fn test_admin_unlock_auto_relocks() {
    let mut lock = DoorLock::new(Duration::ZERO);

    let outcome = lock.unlock(Role::Admin, &admin());

    assert_eq!(outcome, UnlockOutcome::Granted { auto_relocked: true });
    assert!(lock.is_locked());
}

/// The admin access window actually blocks for the configured delay
#[test]
fn test_admin_relock_window_blocks() {
    let delay = Duration::from_millis(50);
    let mut lock = DoorLock::new(delay);

    let start = Instant::now();
    lock.unlock(Role::Admin, &admin());
    let elapsed = start.elapsed();

    assert!(elapsed >= delay);
    assert!(lock.is_locked());
}

/// User unlock leaves the door unlocked until an explicit lock
#[test]
fn test_user_unlock_requires_explicit_lock() {
    let mut lock = DoorLock::new(Duration::ZERO);

    let outcome = lock.unlock(Role::User, &user());
    assert_eq!(outcome, UnlockOutcome::Granted { auto_relocked: false });
    assert_eq!(lock.state(), LockState::Unlocked);

    assert!(lock.lock());
    assert!(lock.is_locked());
}

/// Unlock is idempotent when already unlocked: no state change
#[test]
fn test_unlock_idempotent_when_unlocked() {
    let mut lock = DoorLock::new(Duration::ZERO);
    lock.unlock(Role::User, &user());

    assert_eq!(lock.unlock(Role::User, &user()), UnlockOutcome::AlreadyUnlocked);
    assert_eq!(lock.unlock(Role::Admin, &admin()), UnlockOutcome::AlreadyUnlocked);
    assert_eq!(lock.state(), LockState::Unlocked);
}

/// Lock is idempotent when already locked: no transition reported
#[test]
fn test_lock_idempotent_when_locked() {
    let mut lock = DoorLock::new(Duration::ZERO);

    assert!(!lock.lock());
    assert!(!lock.lock());
    assert!(lock.is_locked());
}

/// An admin request while the door is user-unlocked is ignored and does not
/// trigger an auto-relock
#[test]
fn test_admin_request_on_unlocked_door_does_not_relock() {
    let mut lock = DoorLock::new(Duration::ZERO);
    lock.unlock(Role::User, &user());

    let outcome = lock.unlock(Role::Admin, &admin());

    assert_eq!(outcome, UnlockOutcome::AlreadyUnlocked);
    assert_eq!(lock.state(), LockState::Unlocked);
}

/// For any sequence of operations the state is exactly one of the two values
#[test]
fn test_state_space_is_closed() {
    let mut lock = DoorLock::new(Duration::ZERO);
    let people = [admin(), user()];

    for round in 0..20 {
        match round % 5 {
            0 => {
                lock.unlock(Role::User, &people[1]);
            }
            1 => {
                lock.unlock(Role::Admin, &people[0]);
            }
            2 | 3 => {
                lock.lock();
            }
            _ => {
                lock.unlock(Role::User, &people[1]);
            }
        }
        assert!(matches!(lock.state(), LockState::Locked | LockState::Unlocked));
    }
}
