// argus_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::sensor::{TargetSensor, TrackerSnapshot};
pub use crate::telemetry::{LogTable, LogValue, Loggable, VisionTelemetry};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::geometry::{normalize_angle, normalize_degrees, Pose2D, Rotation, Translation};
pub use crate::landmarks::LandmarkTable;
pub use crate::types::{AllianceColor, FieldDimensions};

// --- Estimation ---
pub use crate::error::VisionError;
pub use crate::estimator::{
    LateralOffsetSource, ObjectCameraMount, PoseEstimator, REFERENCE_ALLIANCE,
};
