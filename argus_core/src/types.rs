// argus_core/src/types.rs

use crate::geometry::{Pose2D, Rotation, Translation};
use serde::{Deserialize, Serialize};

// --- Core Identifier ---
/// Which end of the field is treated as the coordinate origin.
///
/// Supplied by the match-state layer; the estimator never derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllianceColor {
    #[default]
    Blue,
    Red,
}

impl AllianceColor {
    pub fn opposite(self) -> Self {
        match self {
            AllianceColor::Blue => AllianceColor::Red,
            AllianceColor::Red => AllianceColor::Blue,
        }
    }
}

/// Outer dimensions of the playing field, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDimensions {
    /// Extent along the field's long axis (the x axis of either origin).
    pub length: f64,
    /// Extent along the short axis.
    pub width: f64,
}

impl FieldDimensions {
    pub const STANDARD: FieldDimensions = FieldDimensions {
        length: 16.4846,
        width: 8.1026,
    };

    /// Offset from the field centre to the blue-origin corner.
    pub fn half_extent(&self) -> Translation {
        Translation::new(self.length / 2.0, self.width / 2.0)
    }

    /// Converts a pose between the two alliance origins. The red origin sits
    /// in the opposite corner, facing the other way, so the conversion is a
    /// half-turn about the field centre and is its own inverse.
    pub fn flip_origin(&self, pose: &Pose2D) -> Pose2D {
        Pose2D::new(
            Translation::new(self.length - pose.x(), self.width - pose.y()),
            pose.rotation() + Rotation::HALF_TURN,
        )
    }
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}
