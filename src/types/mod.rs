//! Core types for the door lock simulator
//!
//! This module contains the identifier types, domain enums, and configuration
//! structures used throughout the simulator.

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::{CliArgs, ConfigError, ConfigFile, ConfigValidationError, SimulationConfig};
pub use enums::{AccessChannel, AccessOutcome, DenialReason, LockState, MotorDirection, Role};
pub use identifiers::{EventId, PersonId};
