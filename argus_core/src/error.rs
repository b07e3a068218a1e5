// argus_core/src/error.rs

use thiserror::Error;

/// Failures that can only happen while building the static parts of the
/// estimator (the landmark table and the camera mount). Nothing at steady
/// state returns one of these; missing sensor data is modelled with defaults.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VisionError {
    #[error("landmark id {id} appears more than once in the table")]
    DuplicateLandmark { id: i32 },

    #[error("landmark id {id} has a non-finite position")]
    NonFiniteLandmark { id: i32 },

    #[error("invalid object camera mount: {reason}")]
    InvalidMount { reason: String },
}
