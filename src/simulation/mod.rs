//! Simulation harness: scenario runner, logging, and errors
//!
//! This module contains everything around the core lock logic: the scripted
//! scenario runner, the tracing subscriber setup, and the harness error
//! types.

pub mod error;
pub mod logging;
pub mod scenario;

// Re-export all public types for convenience
pub use error::{SimulationError, SimulationResult};
pub use logging::LoggingConfig;
pub use scenario::{Scenario, ScenarioReport, ScenarioStep};
