// argus_core/src/sensor.rs

use crate::geometry::{Pose2D, Rotation};
use crate::types::AllianceColor;
use dyn_clone::DynClone;
use std::fmt::Debug;

// --- TARGET SENSOR TRAIT ---
/// The read-only contract of one camera tracker.
///
/// Implementations only hand back values the driver already cached for the
/// current control cycle; none of these calls may block. Every optional value
/// is `None` when the tracker has nothing for this cycle.
pub trait TargetSensor: DynClone + Debug + Send + Sync {
    /// True when the tracker currently holds a valid target.
    fn has_valid_target(&self) -> bool;

    /// Angle from the crosshair to the target centre, positive to the left.
    fn horizontal_offset(&self) -> Option<Rotation>;

    /// Angle from the crosshair to the target centre, positive when the
    /// target sits *below* the crosshair.
    ///
    /// This is the depression convention the ground projection works in. A
    /// driver for hardware that reports positive-upward angles negates the
    /// value before caching it.
    fn vertical_offset(&self) -> Option<Rotation>;

    /// Fraction of the image covered by the target, in percent.
    fn target_area(&self) -> Option<f64>;

    fn skew(&self) -> Option<Rotation>;

    /// Fiducial id of the primary target, for trackers that decode ids.
    fn target_id(&self) -> Option<i32>;

    /// The tracker's own solve of the robot pose, measured from the field
    /// origin of `origin`.
    fn pose_estimate(&self, origin: AllianceColor) -> Option<Pose2D>;
}

// This macro automatically generates the implementation of `Clone` for `Box<dyn TargetSensor>`.
dyn_clone::clone_trait_object!(TargetSensor);

// =========================================================================
// == Cached Tracker Reading ==
// =========================================================================

/// Everything one tracker reported during a single cycle.
///
/// This is the shape a driver caches between polls, and it is also the
/// simplest `TargetSensor` there is: it just returns its fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerSnapshot {
    pub has_target: bool,
    pub horizontal_offset: Option<Rotation>,
    pub vertical_offset: Option<Rotation>,
    pub target_area: Option<f64>,
    pub skew: Option<Rotation>,
    pub target_id: Option<i32>,
    /// Pose solve measured from the blue-alliance origin.
    pub blue_origin_pose: Option<Pose2D>,
    /// Pose solve measured from the red-alliance origin.
    pub red_origin_pose: Option<Pose2D>,
}

impl TrackerSnapshot {
    /// A reading with no target and no data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A reading that has a target but no values yet.
    pub fn with_target() -> Self {
        Self {
            has_target: true,
            ..Self::default()
        }
    }

    pub fn offsets(mut self, horizontal: Rotation, vertical: Rotation) -> Self {
        self.horizontal_offset = Some(horizontal);
        self.vertical_offset = Some(vertical);
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.target_area = Some(area);
        self
    }

    pub fn skewed(mut self, skew: Rotation) -> Self {
        self.skew = Some(skew);
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.target_id = Some(id);
        self
    }

    pub fn pose(mut self, origin: AllianceColor, pose: Pose2D) -> Self {
        match origin {
            AllianceColor::Blue => self.blue_origin_pose = Some(pose),
            AllianceColor::Red => self.red_origin_pose = Some(pose),
        }
        self
    }
}

impl TargetSensor for TrackerSnapshot {
    fn has_valid_target(&self) -> bool {
        self.has_target
    }

    fn horizontal_offset(&self) -> Option<Rotation> {
        self.horizontal_offset
    }

    fn vertical_offset(&self) -> Option<Rotation> {
        self.vertical_offset
    }

    fn target_area(&self) -> Option<f64> {
        self.target_area
    }

    fn skew(&self) -> Option<Rotation> {
        self.skew
    }

    fn target_id(&self) -> Option<i32> {
        self.target_id
    }

    fn pose_estimate(&self, origin: AllianceColor) -> Option<Pose2D> {
        match origin {
            AllianceColor::Blue => self.blue_origin_pose,
            AllianceColor::Red => self.red_origin_pose,
        }
    }
}
