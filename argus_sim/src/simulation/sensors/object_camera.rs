// argus_sim/src/simulation/sensors/object_camera.rs

use argus_core::estimator::ObjectCameraMount;
use argus_core::geometry::{Pose2D, Rotation, Translation};
use argus_core::sensor::TrackerSnapshot;
use rand::Rng;

use super::GaussianNoise;
use crate::error::SimError;
use crate::simulation::config::structs::ObjectCameraConfig;

/// Image fraction (percent) covered by a game piece one metre away.
const AREA_AT_ONE_METRE: f64 = 4.0;

/// The angled game-piece tracker.
///
/// Reports the nearest object in view. The vertical offset is generated from
/// the same flat-floor model the estimator inverts, so with zero noise the
/// estimator recovers the object's forward distance exactly.
#[derive(Debug, Clone)]
pub struct SimulatedObjectCamera {
    config: ObjectCameraConfig,
    mount: ObjectCameraMount,
    objects: Vec<Translation>,
    angle_noise: GaussianNoise,
}

impl SimulatedObjectCamera {
    pub fn new(
        config: ObjectCameraConfig,
        mount: ObjectCameraMount,
        objects: Vec<Translation>,
    ) -> Result<Self, SimError> {
        Ok(Self {
            angle_noise: GaussianNoise::new(config.angle_noise_stddev_deg)?,
            config,
            mount,
            objects,
        })
    }

    /// Vertical offset at which the camera sees an object `forward_m` ahead.
    ///
    /// Depression convention, as the tracker reports it: the sight line to
    /// the object's centre dips `atan2(effective_height, forward)` below the
    /// horizon, and the crosshair already sits `pitch` below it, so the
    /// object appears the difference below the crosshair.
    pub fn vertical_offset_for(&self, forward_m: f64) -> Rotation {
        Rotation::from_radians(self.mount.effective_height().atan2(forward_m)) - self.mount.pitch
    }

    /// The nearest visible object, in the robot frame.
    pub fn visible_object(&self, truth: &Pose2D) -> Option<Translation> {
        let half_hfov = (self.config.horizontal_fov_deg / 2.0).to_radians();
        let half_vfov = (self.config.vertical_fov_deg / 2.0).to_radians();
        self.objects
            .iter()
            .map(|position| Pose2D::new(*position, Rotation::ZERO).relative_to(truth).translation())
            .filter(|local| {
                local.x > 0.0
                    && local.norm() <= self.config.max_range_m
                    && local.y.atan2(local.x).abs() <= half_hfov
                    && self.vertical_offset_for(local.x).radians().abs() <= half_vfov
            })
            .min_by(|a, b| a.norm().total_cmp(&b.norm()))
    }

    pub fn observe<R: Rng + ?Sized>(&self, truth: &Pose2D, rng: &mut R) -> TrackerSnapshot {
        let Some(local) = self.visible_object(truth) else {
            return TrackerSnapshot::empty();
        };

        let horizontal = Rotation::from_radians(local.y.atan2(local.x))
            + Rotation::from_degrees(self.angle_noise.sample(rng));
        let vertical =
            self.vertical_offset_for(local.x) + Rotation::from_degrees(self.angle_noise.sample(rng));
        let area = (AREA_AT_ONE_METRE / local.norm().powi(2).max(f64::EPSILON)).min(100.0);

        TrackerSnapshot::with_target()
            .offsets(horizontal, vertical)
            .area(area)
            .skewed(Rotation::from_degrees(self.angle_noise.sample(rng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::core::prng::SimulationRng;
    use argus_core::prelude::{AllianceColor, LateralOffsetSource, PoseEstimator};
    use approx::assert_abs_diff_eq;

    fn noiseless_camera(objects: Vec<Translation>) -> SimulatedObjectCamera {
        let config = ObjectCameraConfig {
            angle_noise_stddev_deg: 0.0,
            ..ObjectCameraConfig::default()
        };
        SimulatedObjectCamera::new(config, ObjectCameraMount::default(), objects).unwrap()
    }

    #[test]
    fn test_picks_nearest_object_in_view() {
        let truth = Pose2D::from_xyh_degrees(2.0, 2.0, 0.0);
        let camera = noiseless_camera(vec![
            Translation::new(4.0, 2.0),
            Translation::new(3.0, 2.2),
            // Behind the robot.
            Translation::new(1.0, 2.0),
        ]);
        let local = camera.visible_object(&truth).unwrap();
        assert_abs_diff_eq!(local.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(local.y, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_no_objects_reports_no_target() {
        let camera = noiseless_camera(Vec::new());
        let mut rng = SimulationRng::new(Some(9));
        let snapshot = camera.observe(&Pose2D::default(), &mut rng.0);
        assert_eq!(snapshot, TrackerSnapshot::empty());
    }

    #[test]
    fn test_estimator_recovers_object_offset() {
        let truth = Pose2D::from_xyh_degrees(5.0, 3.0, 30.0);
        let object = truth
            .transform_by(Translation::new(1.2, -0.3), Rotation::ZERO)
            .translation();
        let camera = noiseless_camera(vec![object]);
        let mut rng = SimulationRng::new(Some(2));
        let snapshot = camera.observe(&truth, &mut rng.0);
        assert!(snapshot.has_target);

        let estimator = PoseEstimator::new(
            Box::new(TrackerSnapshot::empty()),
            Box::new(snapshot),
            AllianceColor::Blue,
        )
        .with_lateral_offset_source(LateralOffsetSource::Horizontal);
        let offset = estimator.estimate_offset(Translation::zero());
        assert_abs_diff_eq!(offset.x, 1.2, epsilon = 1e-9);
        assert_abs_diff_eq!(offset.y, -0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_downward_camera_sees_floor_object_above_crosshair() {
        let mount = ObjectCameraMount::new(0.232, 0.16, Rotation::from_degrees(15.0)).unwrap();
        let config = ObjectCameraConfig {
            angle_noise_stddev_deg: 0.0,
            ..ObjectCameraConfig::default()
        };
        let truth = Pose2D::from_xyh_degrees(4.0, 4.0, 0.0);
        let camera = SimulatedObjectCamera::new(config, mount, vec![Translation::new(5.0, 4.0)])
            .unwrap();
        let mut rng = SimulationRng::new(Some(4));
        let snapshot = camera.observe(&truth, &mut rng.0);

        let vertical = snapshot.vertical_offset.unwrap();
        assert!(vertical.degrees() < 0.0);

        let estimator = PoseEstimator::new(
            Box::new(TrackerSnapshot::empty()),
            Box::new(snapshot),
            AllianceColor::Blue,
        )
        .with_mount(mount);
        let offset = estimator.estimate_offset(Translation::zero());
        assert_abs_diff_eq!(offset.x, 1.0, epsilon = 1e-9);
    }
}
