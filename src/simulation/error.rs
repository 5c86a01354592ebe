//! Error types and handling
//!
//! This module contains error types for the simulation harness. The core
//! lock and access logic never raises: wrong PINs, remote requests, and
//! redundant lock operations are ordinary outcomes. Errors here cover the
//! harness around it — configuration, the scenario runner, and audit export.

use thiserror::Error;

/// Errors that can occur while running the simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Scenario execution failed
    #[error("Scenario execution failed: {0}")]
    ScenarioError(String),

    /// Audit export failed
    #[error("Audit export failed: {0}")]
    AuditError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<String> for SimulationError {
    fn from(s: String) -> Self {
        SimulationError::ScenarioError(s)
    }
}

impl From<&str> for SimulationError {
    fn from(s: &str) -> Self {
        SimulationError::ScenarioError(s.to_string())
    }
}

impl From<anyhow::Error> for SimulationError {
    fn from(error: anyhow::Error) -> Self {
        SimulationError::ScenarioError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a scenario error
    pub fn scenario_error(msg: impl Into<String>) -> Self {
        Self::ScenarioError(msg.into())
    }

    /// Create an audit export error
    pub fn audit_error(msg: impl Into<String>) -> Self {
        Self::AuditError(msg.into())
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::ConfigurationError(_) => false,
            SimulationError::ScenarioError(_) => false,
            SimulationError::AuditError(_) => true,
            SimulationError::IoError(_) => true,
            SimulationError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::ScenarioError(_) => "Scenario",
            SimulationError::AuditError(_) => "Audit",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
