// argus_sim/src/lib.rs

// This prelude is for convenience for other files WITHIN the argus_sim crate.
pub mod prelude;

// This module contains all the simulation-specific logic.
pub mod cli;
pub mod error;
pub mod simulation;

/// Log directives used when neither `--log-filter` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "info,argus_sim=debug,argus_core=debug";
