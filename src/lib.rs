//! Smart Door Lock Simulator
//!
//! A simulation of a smart door lock: an administrator and PIN-holding users
//! request access, the lock grants or denies entry, and the door relocks
//! itself after an admin session.
//!
//! # Overview
//!
//! This library models the state transition logic and access-control checks
//! of a keypad door lock. The lock is a strict two-state machine; invalid
//! requests (wrong PIN, remote access, redundant lock operations) are
//! ordinary denied or ignored outcomes, never errors. Every access decision
//! is traced and captured in an in-memory audit trail that can be exported
//! as JSON Lines.
//!
//! ## Key Features
//!
//! - **Role-based access**: admins unlock without a PIN, users verify a PIN
//! - **Auto-relock**: admin sessions relock the door after a timed window
//! - **User directory**: ordered registry with first-match-wins lookup
//! - **Audit trail**: structured event per decision, JSONL export
//! - **Scripted scenarios**: the demonstration flow as a runnable value
//!
//! ## Quick Start
//!
//! ```rust
//! use smart_door_lock_simulator::access::Principal;
//! use smart_door_lock_simulator::system::DoorSystem;
//! use smart_door_lock_simulator::types::LockState;
//! use std::time::Duration;
//!
//! let mut system = DoorSystem::with_relock_delay(Duration::ZERO);
//!
//! let admin = Principal::admin("Sarim", "S001");
//! let zara = Principal::user("Zara", "Z101", "8585");
//!
//! admin.register_user(system.directory_mut(), zara.clone());
//!
//! // Admin access unlocks and auto-relocks within the call
//! admin.open_door(&mut system, None);
//! assert_eq!(system.lock_state(), LockState::Locked);
//!
//! // User access stays unlocked until an explicit relock
//! zara.open_door(&mut system, Some("8585"));
//! assert_eq!(system.lock_state(), LockState::Unlocked);
//! system.lock_door_again();
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, domain enums, and configuration
//! - [`access`]: identities, credentials, and the user directory
//! - [`lock`]: the two-state lock mechanism
//! - [`events`]: audit events and the audit trail
//! - [`system`]: the door system facade
//! - [`simulation`]: scenario runner, logging, and harness errors
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod access;
pub mod events;
pub mod lock;
pub mod simulation;
pub mod system;
pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{
    AccessChannel,
    AccessOutcome,
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    DenialReason,
    // Identifiers
    EventId,
    // Enums
    LockState,
    MotorDirection,
    PersonId,
    Role,
    SimulationConfig,
};

// Access control
pub use access::{Credential, Identity, Pin, Principal, UserDirectory};

// Lock mechanism
pub use lock::{DoorLock, UnlockOutcome};

// Audit events
pub use events::{AccessEvent, AuditLog};

// Door system facade
pub use system::DoorSystem;

// Simulation harness
pub use simulation::{
    LoggingConfig, Scenario, ScenarioReport, ScenarioStep, SimulationError, SimulationResult,
};
