//! Door system facade
//!
//! This module contains the facade that composes the lock mechanism, the
//! user directory, and the audit trail.

pub mod door_system;

// Re-export all public types for convenience
pub use door_system::DoorSystem;
