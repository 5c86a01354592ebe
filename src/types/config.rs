//! Configuration structures for the door lock simulator
//!
//! This module contains the simulation configuration structure and validation
//! logic used to control the lock behavior and the scenario run.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Relock window constants
pub mod relock {
    /// Default admin auto-relock window in milliseconds (matches the
    /// simulated timed access window of the physical lock)
    pub const DEFAULT_DELAY_MS: u64 = 3_000;

    /// Maximum permitted relock window in milliseconds. The wait is a
    /// blocking sleep in the scenario thread, so an unbounded window would
    /// hang the whole run.
    pub const MAX_DELAY_MS: u64 = 60_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smart-door-lock-simulator",
    version = "0.1.0",
    about = "Smart Door Lock Simulator - role-based access control with admin auto-relock",
    long_about = "Simulates a smart door lock: an administrator and PIN-holding users request \
access, the lock grants or denies entry, and the door auto-relocks after an admin session.

EXAMPLES:
    # Run the demonstration scenario with default settings
    smart-door-lock-simulator

    # Use a configuration file
    smart-door-lock-simulator --config config.json

    # Shorten the admin auto-relock window
    smart-door-lock-simulator --relock-delay-ms 500

    # Export the audit trail as JSON Lines
    smart-door-lock-simulator --audit-output audit.jsonl

    # Generate a configuration template
    smart-door-lock-simulator --print-config > my-config.json

    # Validate configuration without running
    smart-door-lock-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Admin auto-relock window in milliseconds
    #[arg(
        long,
        help = "Admin auto-relock window in milliseconds",
        long_help = "How long the door stays unlocked after an admin access before it relocks \
automatically. The wait blocks the scenario thread. Range: 0-60000. Default: 3000"
    )]
    pub relock_delay_ms: Option<u64>,

    /// Output path for the audit trail (JSONL format)
    #[arg(
        long,
        help = "Output path for the audit trail JSONL file",
        long_help = "Write every access decision as a JSON line to this file after the scenario \
completes. Omit to keep the audit trail in memory only."
    )]
    pub audit_output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the scenario
    #[arg(long, help = "Validate configuration without running the scenario")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Admin auto-relock window in milliseconds
    pub relock_delay_ms: Option<u64>,

    /// Output path for the audit trail (JSONL format)
    pub audit_output: Option<String>,
}

/// Configuration for the door lock simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Admin auto-relock window in milliseconds
    pub relock_delay_ms: u64,

    /// Output path for the audit trail (JSONL format)
    pub audit_output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Relock window exceeds the permitted maximum
    #[error("Relock delay must be at most {max} ms, got {value} ms")]
    RelockDelayTooLong {
        /// The configured relock delay in milliseconds
        value: u64,
        /// The maximum permitted relock delay in milliseconds
        max: u64,
    },

    /// Audit output path is empty
    #[error("Audit output path must not be empty")]
    EmptyAuditOutputPath,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { relock_delay_ms: relock::DEFAULT_DELAY_MS, audit_output: None }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            relock_delay_ms: config_file.relock_delay_ms.unwrap_or(defaults.relock_delay_ms),
            audit_output: config_file.audit_output.or(defaults.audit_output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.relock_delay_ms {
            config.relock_delay_ms = value;
        }
        if let Some(value) = args.audit_output {
            config.audit_output = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.relock_delay_ms > relock::MAX_DELAY_MS {
            return Err(ConfigValidationError::RelockDelayTooLong {
                value: self.relock_delay_ms,
                max: relock::MAX_DELAY_MS,
            });
        }

        if let Some(path) = &self.audit_output {
            if path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyAuditOutputPath);
            }
        }

        Ok(())
    }

    /// Get the relock window as a `Duration`
    pub fn relock_delay(&self) -> Duration {
        Duration::from_millis(self.relock_delay_ms)
    }
}
