// argus_core/src/lib.rs

// This file defines the public modules of the library.
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod landmarks;
pub mod prelude;
pub mod sensor;
pub mod telemetry;
pub mod types;
