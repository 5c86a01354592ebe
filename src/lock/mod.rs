//! Lock mechanism
//!
//! This module contains the two-state door lock and its unlock outcomes.

pub mod door_lock;

// Re-export all public types for convenience
pub use door_lock::{DoorLock, UnlockOutcome};
