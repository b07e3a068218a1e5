// argus_core/src/estimator.rs

use crate::error::VisionError;
use crate::geometry::{Pose2D, Rotation, Translation};
use crate::landmarks::LandmarkTable;
use crate::sensor::TargetSensor;
use crate::telemetry::{LogTable, Loggable, VisionTelemetry};
use crate::types::AllianceColor;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The alliance whose origin the landmark table is written against. Relative
/// poses are always solved in this frame, whichever side the robot plays.
pub const REFERENCE_ALLIANCE: AllianceColor = AllianceColor::Blue;

/// Below this magnitude a cosine or tangent is treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-9;

// =========================================================================
// == Configuration ==
// =========================================================================

/// Which angular offset feeds the lateral term of the ground projection.
///
/// The fielded code multiplies the forward distance by the tangent of the
/// *vertical* offset. The horizontal offset is what the geometry calls for,
/// but the tracker's axis convention has not been confirmed, so both are
/// kept and the fielded behaviour stays the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateralOffsetSource {
    #[default]
    AsObserved,
    Horizontal,
}

/// Physical placement of the object-tracking camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectCameraMount {
    /// Lens height above the floor, in metres.
    pub height_m: f64,
    /// Half the height of the tracked object, in metres.
    pub target_half_height_m: f64,
    /// Depression of the optical axis below the horizon: positive looks
    /// down, negative looks up. Measured in the same sense as the tracker's
    /// vertical offset, so `pitch + vertical_offset` is the depression of the
    /// sight line to the target.
    pub pitch: Rotation,
}

impl ObjectCameraMount {
    pub const DEFAULT_HEIGHT_M: f64 = 0.232;
    pub const DEFAULT_TARGET_HALF_HEIGHT_M: f64 = 0.16;
    /// The fielded value. As a depression this tilts the camera 12° above
    /// the horizon.
    pub const DEFAULT_PITCH_DEG: f64 = -12.0;

    /// # Errors
    /// Returns `VisionError::InvalidMount` for non-finite values or a camera
    /// pitched straight up or down.
    pub fn new(
        height_m: f64,
        target_half_height_m: f64,
        pitch: Rotation,
    ) -> Result<Self, VisionError> {
        if !(height_m.is_finite() && target_half_height_m.is_finite() && pitch.radians().is_finite())
        {
            return Err(VisionError::InvalidMount {
                reason: "mount values must be finite".to_string(),
            });
        }
        if pitch.cos().abs() < DEGENERATE_EPSILON {
            return Err(VisionError::InvalidMount {
                reason: format!("pitch of {:.1}° points along the vertical", pitch.degrees()),
            });
        }
        Ok(Self {
            height_m,
            target_half_height_m,
            pitch,
        })
    }

    /// Height of the line of sight to the object's visual centre.
    pub fn effective_height(&self) -> f64 {
        self.height_m - self.target_half_height_m
    }
}

impl Default for ObjectCameraMount {
    fn default() -> Self {
        Self {
            height_m: Self::DEFAULT_HEIGHT_M,
            target_half_height_m: Self::DEFAULT_TARGET_HALF_HEIGHT_M,
            pitch: Rotation::from_degrees(Self::DEFAULT_PITCH_DEG),
        }
    }
}

/// Inverse projection of a tracked object onto a flat floor.
///
/// Both angles are depressions (positive below the horizon). With the lens
/// above the object's visual centre, an object on the floor ahead of the
/// robot has a positive sight-line depression and therefore a positive
/// forward distance `effective_height / tan(pitch + vertical_offset)`.
///
/// Returns `None` when the sight line is vertical, parallel to the floor, or
/// the result would not be finite.
pub fn project_to_ground(
    mount: &ObjectCameraMount,
    vertical_offset: Rotation,
    lateral_offset: Rotation,
) -> Option<Translation> {
    let sight_line = mount.pitch + vertical_offset;
    if sight_line.cos().abs() < DEGENERATE_EPSILON {
        return None;
    }
    let denominator = sight_line.tan();
    if !denominator.is_finite() || denominator.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let forward = mount.effective_height() / denominator;
    let lateral = forward * lateral_offset.tan();
    let offset = Translation::new(forward, lateral);
    offset.is_finite().then_some(offset)
}

// =========================================================================
// == Pose Estimator ==
// =========================================================================

/// Fuses the tag tracker and the object tracker into robot poses and object
/// offsets.
///
/// Holds no state of its own: every query is a function of what the two
/// trackers report right now plus the arguments. When there is nothing to
/// report, each query hands back the caller's default.
#[derive(Debug, Clone)]
pub struct PoseEstimator {
    tag_tracker: Box<dyn TargetSensor>,
    object_tracker: Box<dyn TargetSensor>,
    mount: ObjectCameraMount,
    landmarks: LandmarkTable,
    match_alliance: AllianceColor,
    lateral_source: LateralOffsetSource,
}

impl PoseEstimator {
    /// Creates an estimator with the standard landmark table and the
    /// compiled-in camera mount.
    pub fn new(
        tag_tracker: Box<dyn TargetSensor>,
        object_tracker: Box<dyn TargetSensor>,
        match_alliance: AllianceColor,
    ) -> Self {
        Self {
            tag_tracker,
            object_tracker,
            mount: ObjectCameraMount::default(),
            landmarks: LandmarkTable::standard(),
            match_alliance,
            lateral_source: LateralOffsetSource::default(),
        }
    }

    pub fn with_mount(mut self, mount: ObjectCameraMount) -> Self {
        self.mount = mount;
        self
    }

    pub fn with_landmarks(mut self, landmarks: LandmarkTable) -> Self {
        self.landmarks = landmarks;
        self
    }

    pub fn with_lateral_offset_source(mut self, source: LateralOffsetSource) -> Self {
        self.lateral_source = source;
        self
    }

    // --- Accessors ---

    pub fn tag_tracker(&self) -> &dyn TargetSensor {
        self.tag_tracker.as_ref()
    }

    pub fn object_tracker(&self) -> &dyn TargetSensor {
        self.object_tracker.as_ref()
    }

    pub fn mount(&self) -> &ObjectCameraMount {
        &self.mount
    }

    pub fn landmarks(&self) -> &LandmarkTable {
        &self.landmarks
    }

    pub fn match_alliance(&self) -> AllianceColor {
        self.match_alliance
    }

    pub fn lateral_offset_source(&self) -> LateralOffsetSource {
        self.lateral_source
    }

    pub fn sees_tag(&self) -> bool {
        self.tag_tracker.has_valid_target()
    }

    pub fn sees_object(&self) -> bool {
        self.object_tracker.has_valid_target()
    }

    // --- Estimates ---

    /// Ground offset of the tracked object in the robot frame (+x forward,
    /// +y left), or `default` when there is no usable sighting.
    pub fn estimate_offset(&self, default: Translation) -> Translation {
        if !self.sees_object() {
            return default;
        }
        let Some(vertical) = self.object_tracker.vertical_offset() else {
            return default;
        };
        let lateral = match self.lateral_source {
            LateralOffsetSource::AsObserved => vertical,
            LateralOffsetSource::Horizontal => match self.object_tracker.horizontal_offset() {
                Some(horizontal) => horizontal,
                None => return default,
            },
        };

        match project_to_ground(&self.mount, vertical, lateral) {
            Some(offset) => offset,
            None => {
                trace!(
                    vertical_deg = vertical.degrees(),
                    "degenerate sight line, using default offset"
                );
                default
            }
        }
    }

    /// Id of the landmark the tag tracker is looking at. Ids are not checked
    /// against the landmark table.
    pub fn current_tag_id(&self, default: i32) -> i32 {
        if !self.sees_tag() {
            return default;
        }
        self.tag_tracker.target_id().unwrap_or(default)
    }

    /// The tag tracker's robot pose, measured from the match alliance's origin.
    pub fn robot_pose(&self, default: Pose2D) -> Pose2D {
        self.robot_pose_from(default, self.match_alliance)
    }

    /// The tag tracker's robot pose measured from `origin`, passed through
    /// unchanged.
    pub fn robot_pose_from(&self, default: Pose2D, origin: AllianceColor) -> Pose2D {
        self.tag_tracker.pose_estimate(origin).unwrap_or(default)
    }

    /// The robot pose in the frame of the landmark currently in view.
    ///
    /// The table stores each landmark's own facing; the result is the pose as
    /// seen looking at the landmark, so the heading is turned by a half turn
    /// and wrapped back into `(-180°, 180°]`.
    pub fn relative_pose(&self, default: Pose2D) -> Pose2D {
        if !self.sees_tag() {
            return default;
        }
        let absolute = self.robot_pose_from(Pose2D::default(), REFERENCE_ALLIANCE);
        let landmark = self.landmarks.pose(self.current_tag_id(0));
        absolute
            .relative_to(&landmark)
            .rotate_heading(Rotation::HALF_TURN)
    }

    // --- Raw object tracker readings ---

    pub fn horizontal_offset(&self, default: Rotation) -> Rotation {
        if !self.sees_object() {
            return default;
        }
        self.object_tracker.horizontal_offset().unwrap_or(default)
    }

    pub fn vertical_offset(&self, default: Rotation) -> Rotation {
        if !self.sees_object() {
            return default;
        }
        self.object_tracker.vertical_offset().unwrap_or(default)
    }

    pub fn target_area(&self, default: f64) -> f64 {
        if !self.sees_object() {
            return default;
        }
        self.object_tracker.target_area().unwrap_or(default)
    }

    pub fn skew(&self, default: Rotation) -> Rotation {
        if !self.sees_object() {
            return default;
        }
        self.object_tracker.skew().unwrap_or(default)
    }

    /// This cycle's telemetry values.
    pub fn telemetry(&self) -> VisionTelemetry {
        VisionTelemetry {
            tag_id: self.current_tag_id(0),
            sees_tag: self.sees_tag(),
            sees_object: self.sees_object(),
            robot_pose: self.robot_pose(Pose2D::default()),
            relative_tag_pose: self.relative_pose(Pose2D::default()),
        }
    }
}

impl Loggable for PoseEstimator {
    fn log_data(&self, table: &mut LogTable) {
        self.telemetry().write_to(table);
    }

    fn table_name(&self) -> &str {
        "Vision"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::TrackerSnapshot;
    use crate::telemetry::LogValue;
    use approx::assert_abs_diff_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const EPSILON: f64 = 1e-9;

    // --- Test helpers ---

    fn assert_heading_eq(actual_deg: f64, expected_deg: f64) {
        let diff = crate::geometry::normalize_degrees(actual_deg - expected_deg);
        assert!(
            diff.abs() < 1e-7,
            "headings differ: {} vs {}",
            actual_deg,
            expected_deg
        );
    }

    fn estimator(tag: TrackerSnapshot, object: TrackerSnapshot) -> PoseEstimator {
        PoseEstimator::new(Box::new(tag), Box::new(object), AllianceColor::Blue)
    }

    /// Counts every data query made past `has_valid_target`.
    #[derive(Debug, Clone, Default)]
    struct CountingSensor {
        snapshot: TrackerSnapshot,
        data_queries: Arc<AtomicUsize>,
    }

    impl CountingSensor {
        fn hit(&self) {
            self.data_queries.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl TargetSensor for CountingSensor {
        fn has_valid_target(&self) -> bool {
            self.snapshot.has_target
        }
        fn horizontal_offset(&self) -> Option<Rotation> {
            self.hit();
            self.snapshot.horizontal_offset
        }
        fn vertical_offset(&self) -> Option<Rotation> {
            self.hit();
            self.snapshot.vertical_offset
        }
        fn target_area(&self) -> Option<f64> {
            self.hit();
            self.snapshot.target_area
        }
        fn skew(&self) -> Option<Rotation> {
            self.hit();
            self.snapshot.skew
        }
        fn target_id(&self) -> Option<i32> {
            self.hit();
            self.snapshot.target_id
        }
        fn pose_estimate(&self, origin: AllianceColor) -> Option<Pose2D> {
            self.snapshot.pose_estimate(origin)
        }
    }

    // --- Object ground offset ---

    #[test]
    fn test_estimate_offset_forward_distance_matches_projection() {
        let mount = ObjectCameraMount::default();
        for v_deg in [-20.0, -5.0, 3.0, 25.0, 60.0] {
            let vertical = Rotation::from_degrees(v_deg);
            let object = TrackerSnapshot::with_target().offsets(Rotation::ZERO, vertical);
            let offset = estimator(TrackerSnapshot::empty(), object)
                .estimate_offset(Translation::new(-1.0, -1.0));

            let expected = mount.effective_height() / (mount.pitch + vertical).tan();
            assert_abs_diff_eq!(offset.x, expected, epsilon = EPSILON);
            assert_abs_diff_eq!(offset.y, expected * vertical.tan(), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_floor_object_ahead_of_downward_camera_is_in_front() {
        // Camera looking 12° down; the object sits 1.5 m ahead on the floor.
        let mount = ObjectCameraMount::new(0.232, 0.16, Rotation::from_degrees(12.0)).unwrap();
        let sight_line = Rotation::from_radians(mount.effective_height().atan2(1.5));
        let vertical = sight_line - mount.pitch;
        // Shallower than the optical axis, so it shows up above the crosshair.
        assert!(vertical.degrees() < 0.0);
        assert_abs_diff_eq!(vertical.degrees(), -9.2519, epsilon = 1e-3);

        let object = TrackerSnapshot::with_target().offsets(Rotation::ZERO, vertical);
        let offset = estimator(TrackerSnapshot::empty(), object)
            .with_mount(mount)
            .with_lateral_offset_source(LateralOffsetSource::Horizontal)
            .estimate_offset(Translation::new(-1.0, -1.0));
        assert!(offset.x > 0.0);
        assert_abs_diff_eq!(offset.x, 1.5, epsilon = EPSILON);
        assert_abs_diff_eq!(offset.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_target_below_crosshair_of_level_camera_is_in_front() {
        let mount = ObjectCameraMount::new(0.5, 0.1, Rotation::ZERO).unwrap();
        let object =
            TrackerSnapshot::with_target().offsets(Rotation::ZERO, Rotation::from_degrees(45.0));
        let offset = estimator(TrackerSnapshot::empty(), object)
            .with_mount(mount)
            .estimate_offset(Translation::zero());
        assert_abs_diff_eq!(offset.x, 0.4, epsilon = EPSILON);

        // Above the crosshair of a level camera means above the lens: not on
        // the floor in front, so the projection lands behind the robot.
        let object =
            TrackerSnapshot::with_target().offsets(Rotation::ZERO, Rotation::from_degrees(-45.0));
        let behind = estimator(TrackerSnapshot::empty(), object)
            .with_mount(mount)
            .estimate_offset(Translation::zero());
        assert!(behind.x < 0.0);
    }

    #[test]
    fn test_estimate_offset_horizontal_lateral_source() {
        let vertical = Rotation::from_degrees(-10.0);
        let horizontal = Rotation::from_degrees(15.0);
        let object = TrackerSnapshot::with_target().offsets(horizontal, vertical);
        let offset = estimator(TrackerSnapshot::empty(), object)
            .with_lateral_offset_source(LateralOffsetSource::Horizontal)
            .estimate_offset(Translation::zero());

        let forward = 0.072 / Rotation::from_degrees(-22.0).tan();
        assert_abs_diff_eq!(offset.x, forward, epsilon = EPSILON);
        assert_abs_diff_eq!(offset.y, forward * horizontal.tan(), epsilon = EPSILON);
    }

    #[test]
    fn test_estimate_offset_singular_sight_line_returns_default() {
        let default = Translation::new(4.0, -2.0);
        // pitch -12° + 102° = 90°, and -12° - 78° = -90°.
        for v_deg in [102.0, -78.0] {
            let object = TrackerSnapshot::with_target()
                .offsets(Rotation::ZERO, Rotation::from_degrees(v_deg));
            let offset = estimator(TrackerSnapshot::empty(), object).estimate_offset(default);
            assert_eq!(offset, default);
        }
    }

    #[test]
    fn test_estimate_offset_level_sight_line_returns_default() {
        let default = Translation::new(4.0, -2.0);
        let object =
            TrackerSnapshot::with_target().offsets(Rotation::ZERO, Rotation::from_degrees(12.0));
        let offset = estimator(TrackerSnapshot::empty(), object).estimate_offset(default);
        assert_eq!(offset, default);
    }

    #[test]
    fn test_estimate_offset_nan_input_returns_default() {
        let default = Translation::new(0.5, 0.5);
        let object = TrackerSnapshot::with_target()
            .offsets(Rotation::ZERO, Rotation::from_radians(f64::NAN));
        let offset = estimator(TrackerSnapshot::empty(), object).estimate_offset(default);
        assert_eq!(offset, default);
    }

    #[test]
    fn test_estimate_offset_missing_vertical_returns_default() {
        let default = Translation::new(1.0, 2.0);
        let object = TrackerSnapshot::with_target();
        let offset = estimator(TrackerSnapshot::empty(), object).estimate_offset(default);
        assert_eq!(offset, default);
    }

    // --- Tag id and absolute pose ---

    #[test]
    fn test_current_tag_id_follows_valid_target() {
        let seen = estimator(TrackerSnapshot::with_target().id(5), TrackerSnapshot::empty());
        assert_eq!(seen.current_tag_id(-1), 5);

        let stale = TrackerSnapshot::empty().id(5);
        let unseen = estimator(stale, TrackerSnapshot::empty());
        assert_eq!(unseen.current_tag_id(-1), -1);
    }

    #[test]
    fn test_robot_pose_is_identity_passthrough() {
        let blue = Pose2D::from_xyh_degrees(3.0, 4.0, 45.0);
        let red = Pose2D::from_xyh_degrees(13.4846, 4.1026, -135.0);
        let default = Pose2D::from_xyh_degrees(-1.0, -1.0, 0.0);
        let tag = TrackerSnapshot::with_target()
            .pose(AllianceColor::Blue, blue)
            .pose(AllianceColor::Red, red);
        let est = estimator(tag, TrackerSnapshot::empty());

        assert_eq!(est.robot_pose_from(default, AllianceColor::Blue), blue);
        assert_eq!(est.robot_pose_from(default, AllianceColor::Red), red);
        assert_eq!(est.robot_pose(default), blue);
    }

    #[test]
    fn test_robot_pose_uses_match_alliance_and_defaults_when_absent() {
        let blue = Pose2D::from_xyh_degrees(3.0, 4.0, 45.0);
        let default = Pose2D::from_xyh_degrees(-1.0, -1.0, 10.0);
        let tag = TrackerSnapshot::with_target().pose(AllianceColor::Blue, blue);
        let est = PoseEstimator::new(
            Box::new(tag),
            Box::new(TrackerSnapshot::empty()),
            AllianceColor::Red,
        );
        assert_eq!(est.robot_pose(default), default);
        assert_eq!(est.robot_pose_from(default, AllianceColor::Blue), blue);
    }

    // --- Landmark-relative pose ---

    #[test]
    fn test_relative_pose_at_every_landmark_is_zero_and_half_turn() {
        let table = LandmarkTable::standard();
        for (id, landmark) in table.iter() {
            let tag = TrackerSnapshot::with_target()
                .id(id)
                .pose(REFERENCE_ALLIANCE, landmark);
            let rel = estimator(tag, TrackerSnapshot::empty()).relative_pose(Pose2D::default());
            assert_abs_diff_eq!(rel.x(), 0.0, epsilon = EPSILON);
            assert_abs_diff_eq!(rel.y(), 0.0, epsilon = EPSILON);
            assert_heading_eq(rel.heading(), 180.0);
            assert!(rel.heading() > -180.0 && rel.heading() <= 180.0);
        }
    }

    #[test]
    fn test_relative_pose_landmark_three_fixture() {
        let landmark = LandmarkTable::standard().pose(3);
        // One metre along landmark 3's own x axis, facing the same way.
        let robot = landmark.transform_by(Translation::new(1.0, 0.0), Rotation::ZERO);
        assert_abs_diff_eq!(robot.x(), landmark.x() - 1.0, epsilon = EPSILON);

        let tag = TrackerSnapshot::with_target()
            .id(3)
            .pose(AllianceColor::Blue, robot);
        let rel = estimator(tag, TrackerSnapshot::empty()).relative_pose(Pose2D::default());
        assert_abs_diff_eq!(rel.x(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rel.y(), 0.0, epsilon = EPSILON);
        assert_heading_eq(rel.heading(), 180.0);
    }

    #[test]
    fn test_relative_pose_ignores_match_alliance() {
        let landmark = LandmarkTable::standard().pose(6);
        let robot = landmark.transform_by(Translation::new(2.0, 0.5), Rotation::from_degrees(20.0));
        let tag = TrackerSnapshot::with_target()
            .id(6)
            .pose(AllianceColor::Blue, robot)
            .pose(AllianceColor::Red, Pose2D::from_xyh_degrees(9.0, 9.0, 9.0));
        let est = PoseEstimator::new(
            Box::new(tag),
            Box::new(TrackerSnapshot::empty()),
            AllianceColor::Red,
        );
        let rel = est.relative_pose(Pose2D::default());
        assert_abs_diff_eq!(rel.x(), 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rel.y(), 0.5, epsilon = EPSILON);
        assert_heading_eq(rel.heading(), -160.0);
    }

    #[test]
    fn test_relative_pose_unknown_id_uses_origin_landmark() {
        let robot = Pose2D::from_xyh_degrees(2.0, 3.0, 0.0);
        let tag = TrackerSnapshot::with_target()
            .id(42)
            .pose(AllianceColor::Blue, robot);
        let rel = estimator(tag, TrackerSnapshot::empty()).relative_pose(Pose2D::default());
        assert_abs_diff_eq!(rel.x(), 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rel.y(), 3.0, epsilon = EPSILON);
        assert_heading_eq(rel.heading(), 180.0);
    }

    // --- Passthroughs ---

    #[test]
    fn test_passthroughs_return_tracker_values() {
        let object = TrackerSnapshot::with_target()
            .offsets(Rotation::from_degrees(4.0), Rotation::from_degrees(-7.0))
            .area(2.5)
            .skewed(Rotation::from_degrees(-30.0));
        let est = estimator(TrackerSnapshot::empty(), object);
        assert_abs_diff_eq!(est.horizontal_offset(Rotation::ZERO).degrees(), 4.0, epsilon = EPSILON);
        assert_abs_diff_eq!(est.vertical_offset(Rotation::ZERO).degrees(), -7.0, epsilon = EPSILON);
        assert_eq!(est.target_area(0.0), 2.5);
        assert_abs_diff_eq!(est.skew(Rotation::ZERO).degrees(), -30.0, epsilon = EPSILON);
    }

    #[test]
    fn test_passthroughs_default_when_value_missing() {
        let est = estimator(TrackerSnapshot::empty(), TrackerSnapshot::with_target());
        let d = Rotation::from_degrees(1.0);
        assert_eq!(est.horizontal_offset(d), d);
        assert_eq!(est.vertical_offset(d), d);
        assert_eq!(est.target_area(9.0), 9.0);
        assert_eq!(est.skew(d), d);
    }

    // --- No target anywhere ---

    #[test]
    fn test_no_targets_every_accessor_defaults_without_querying() {
        let tag_queries = Arc::new(AtomicUsize::new(0));
        let object_queries = Arc::new(AtomicUsize::new(0));
        let stale = TrackerSnapshot {
            has_target: false,
            ..TrackerSnapshot::with_target()
                .offsets(Rotation::from_degrees(3.0), Rotation::from_degrees(3.0))
                .area(1.0)
                .skewed(Rotation::from_degrees(3.0))
                .id(2)
        };
        let tag = CountingSensor {
            snapshot: stale.clone(),
            data_queries: tag_queries.clone(),
        };
        let object = CountingSensor {
            snapshot: stale,
            data_queries: object_queries.clone(),
        };
        let est = PoseEstimator::new(Box::new(tag), Box::new(object), AllianceColor::Blue);

        let t = Translation::new(7.0, 7.0);
        let p = Pose2D::from_xyh_degrees(1.0, 2.0, 3.0);
        let r = Rotation::from_degrees(-4.0);
        assert_eq!(est.estimate_offset(t), t);
        assert_eq!(est.current_tag_id(-9), -9);
        assert_eq!(est.robot_pose(p), p);
        assert_eq!(est.robot_pose_from(p, AllianceColor::Red), p);
        assert_eq!(est.relative_pose(p), p);
        assert_eq!(est.horizontal_offset(r), r);
        assert_eq!(est.vertical_offset(r), r);
        assert_eq!(est.target_area(0.25), 0.25);
        assert_eq!(est.skew(r), r);

        assert_eq!(tag_queries.load(Ordering::SeqCst), 0);
        assert_eq!(object_queries.load(Ordering::SeqCst), 0);
    }

    // --- Telemetry ---

    #[test]
    fn test_loggable_writes_vision_table() {
        let landmark = LandmarkTable::standard().pose(1);
        let tag = TrackerSnapshot::with_target()
            .id(1)
            .pose(AllianceColor::Blue, landmark);
        let est = estimator(tag, TrackerSnapshot::empty());

        let mut table = LogTable::new();
        est.log_data(&mut table);
        assert_eq!(est.table_name(), "Vision");
        assert_eq!(table.get(VisionTelemetry::TAG_ID_KEY), Some(&LogValue::Int(1)));
        assert_eq!(table.get(VisionTelemetry::SEES_TAG_KEY), Some(&LogValue::Bool(true)));
        assert_eq!(table.get(VisionTelemetry::SEES_OBJECT_KEY), Some(&LogValue::Bool(false)));
        assert_eq!(
            table.get(VisionTelemetry::ROBOT_POSE_KEY),
            Some(&LogValue::Pose(landmark))
        );
    }

    #[test]
    fn test_mount_validation() {
        assert!(ObjectCameraMount::new(0.3, 0.1, Rotation::from_degrees(-15.0)).is_ok());
        assert!(ObjectCameraMount::new(f64::NAN, 0.1, Rotation::ZERO).is_err());
        assert!(matches!(
            ObjectCameraMount::new(0.3, 0.1, Rotation::from_degrees(90.0)),
            Err(VisionError::InvalidMount { .. })
        ));
    }
}
