// argus_sim/src/simulation/config/mod.rs

//! This module handles loading and validating the scenario configuration from
//! disk, with environment overrides layered on top.

pub mod structs;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;
use tracing::{info, warn};

use crate::error::SimError;
pub use structs::ScenarioConfig;

/// Environment variables with this prefix override scenario values, with `__`
/// separating nested keys (e.g. `ARGUS_SIMULATION__SEED=7`).
pub const ENV_PREFIX: &str = "ARGUS_";

/// Loads `scenario_path`, applies environment overrides and validates the
/// result. A missing file is not an error: every section has defaults.
pub fn load_scenario(scenario_path: &Path) -> Result<ScenarioConfig, SimError> {
    if !scenario_path.exists() {
        warn!(
            "Scenario file not found at {:?}, running with defaults.",
            scenario_path
        );
    } else {
        info!("Loading scenario from: {:?}", scenario_path);
    }

    let figment = Figment::new()
        .merge(Toml::file(scenario_path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));
    extract_scenario(figment)
}

/// Parses a scenario from TOML text, without environment overrides.
pub fn parse_scenario(toml_text: &str) -> Result<ScenarioConfig, SimError> {
    extract_scenario(Figment::new().merge(Toml::string(toml_text)))
}

fn extract_scenario(figment: Figment) -> Result<ScenarioConfig, SimError> {
    let config: ScenarioConfig = figment.extract()?;
    config.validate()?;
    Ok(config)
}
