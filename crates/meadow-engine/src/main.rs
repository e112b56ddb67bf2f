//! Engine binary for the Meadow colony simulation.
//!
//! This is the main entry point that wires together configuration, world
//! setup, and the bounded run loop.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `meadow-config.yaml` (or the path given as
//!    the first argument)
//! 2. Initialize structured logging (tracing) at the configured level
//! 3. Build the world: species table, colonies, leaders, members, rooms
//! 4. Run the simulation loop
//! 5. Log the result, and print it as JSON if requested

mod error;
mod tick_logger;

use std::path::{Path, PathBuf};

use meadow_core::config::{LoggingConfig, SimulationConfig};
use meadow_core::runner;
use meadow_core::scenario;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::tick_logger::TickLogger;

const DEFAULT_CONFIG_PATH: &str = "meadow-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, world setup, or the final report
/// fails.
fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);

    info!("meadow-engine starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        world_name = config.world.name.as_str(),
        seed = config.world.seed,
        species_count = config.world.species_count,
        max_ticks = config.simulation.max_ticks,
        colonies = config.colonies.len(),
        "Configuration ready"
    );

    // 3. Build the world.
    let mut world = scenario::build_world(&config)?;

    // 4. Run the simulation loop.
    let mut callback = TickLogger::new();
    let result = runner::run_simulation(&mut world, &config.simulation, &mut callback);

    // 5. Report.
    runner::log_simulation_end(&result);
    info!(
        colonies_exhausted = callback.exhausted(),
        "meadow-engine finished"
    );
    if config.logging.json_report {
        let report = serde_json::to_string_pretty(&result)?;
        println!("{report}");
    }

    Ok(())
}

/// Load configuration from `path`, falling back to defaults when the
/// file does not exist. Environment overrides apply either way, and a
/// malformed override is an error.
///
/// Returns the config and whether it came from the file.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        Ok((SimulationConfig::from_file(path)?, true))
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok((config, false))
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    if logging.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
