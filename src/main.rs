// Smart Door Lock Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/smart-door-lock-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/smart-door-lock-simulator --relock-delay-ms 500 --audit-output audit.jsonl --verbose
// ```

use clap::Parser;
use smart_door_lock_simulator::simulation::{LoggingConfig, Scenario};
use smart_door_lock_simulator::system::DoorSystem;
use smart_door_lock_simulator::types::config::CliArgs;
use smart_door_lock_simulator::types::SimulationConfig;
use smart_door_lock_simulator::SimulationResult;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: show decision traces without span noise
        LoggingConfig::new().with_level(tracing::Level::INFO).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Smart Door Lock Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - scenario will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    // Print startup banner and configuration
    print_startup_banner(&config);

    // Run the demonstration scenario
    if let Err(e) = run_scenario(&config) {
        error!("Scenario failed: {}", e);
        process::exit(1);
    }

    info!("Smart Door Lock Simulator completed successfully");
}

/// Run the demonstration scenario and export the audit trail if requested
fn run_scenario(config: &SimulationConfig) -> SimulationResult<()> {
    let mut system = DoorSystem::new(config);
    let scenario = Scenario::standard();

    let report = scenario.run(&mut system)?;

    // Export the audit trail as JSON Lines if requested
    if let Some(output_path) = &config.audit_output {
        write_audit_output(&system, output_path)?;
        eprintln!("Audit trail written to: {}", output_path);
    }

    // Print the final summary
    eprintln!();
    eprintln!("Scenario Results:");
    eprintln!("  Steps Executed: {}", report.steps_executed);
    eprintln!("  Registered Users: {}", report.registered_users);
    eprintln!("  Final Lock State: {}", report.final_lock_state);
    eprintln!("  Access Granted: {}", report.granted);
    eprintln!("  Access Denied: {}", report.denied);
    eprintln!("  Requests Ignored: {}", report.ignored);

    Ok(())
}

/// Write the audit trail to a JSONL file, one event per line
fn write_audit_output(system: &DoorSystem, output_path: &str) -> SimulationResult<()> {
    use std::fs::File;
    use std::io::BufWriter;

    info!("Writing audit trail to: {}", output_path);

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    system.audit().write_jsonl(writer)?;

    info!("Wrote {} audit events to {}", system.audit().len(), output_path);
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Smart Door Lock Simulator");
    eprintln!("=========================");
    eprintln!("Role-based access control with admin auto-relock");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Relock Delay: {} ms", config.relock_delay_ms);
    match &config.audit_output {
        Some(path) => eprintln!("  Audit Output: {}", path),
        None => eprintln!("  Audit Output: (in-memory only)"),
    }
    eprintln!();
}
