// argus_sim/src/main.rs

use argus_sim::cli::Cli;
use argus_sim::error::SimError;
use argus_sim::simulation::config::load_scenario;
use argus_sim::simulation::runner::Simulation;
use argus_sim::simulation::telemetry::TracingSink;
use argus_sim::DEFAULT_LOG_FILTER;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.log_filter.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let config = load_scenario(&cli.scenario)?;

    if cli.dump_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut simulation = Simulation::from_config(config)?;
    let cycles = cli.cycles.unwrap_or_else(|| simulation.planned_cycles());
    info!("Running {} cycles at {} Hz", cycles, simulation.rate_hz());

    let summary = simulation.run(cycles, &mut TracingSink);
    info!(
        cycles = summary.cycles,
        tag_sightings = summary.tag_sightings,
        object_sightings = summary.object_sightings,
        "Simulation complete"
    );
    if let Some(error_m) = summary.mean_position_error_m {
        info!("Mean vision pose error: {:.4} m", error_m);
    }
    Ok(())
}
