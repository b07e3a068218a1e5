// argus_sim/src/prelude.rs

// Re-export the entire argus_core prelude so you can easily access
// pure types like `Pose2D`, `TargetSensor`, `PoseEstimator`, etc.
pub use argus_core::prelude::*;

// Re-export common simulation-specific types for easy access in other modules.
pub use crate::error::SimError;
pub use crate::simulation::config::structs::*;
pub use crate::simulation::core::feed::SnapshotFeed;
pub use crate::simulation::core::ground_truth::GroundTruth;
pub use crate::simulation::core::prng::SimulationRng;
pub use crate::simulation::runner::{CycleReport, RunSummary, Simulation};
pub use crate::simulation::telemetry::{LogInputsTask, LogSink, MemorySink, TracingSink};
