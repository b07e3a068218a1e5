// argus_sim/src/error.rs

use argus_core::error::VisionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to load scenario: {0}")]
    Config(#[from] figment::Error),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error(transparent)]
    Vision(#[from] VisionError),

    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),
}
