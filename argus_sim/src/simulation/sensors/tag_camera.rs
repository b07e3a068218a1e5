// argus_sim/src/simulation/sensors/tag_camera.rs

use argus_core::geometry::{Pose2D, Rotation, Translation};
use argus_core::landmarks::LandmarkTable;
use argus_core::sensor::TrackerSnapshot;
use argus_core::types::{AllianceColor, FieldDimensions};
use rand::Rng;

use super::GaussianNoise;
use crate::error::SimError;
use crate::simulation::config::structs::TagCameraConfig;

/// Image fraction (percent) covered by a landmark one metre away.
const AREA_AT_ONE_METRE: f64 = 1.2;

/// A landmark the camera can currently see.
#[derive(Debug, Clone, Copy)]
pub struct Sighting {
    pub id: i32,
    /// Landmark position in the robot frame.
    pub local: Translation,
    pub range_m: f64,
}

/// A fiducial tracker looking straight ahead from the robot centre.
///
/// It reports the nearest landmark that is in range, inside the horizontal
/// field of view and facing the camera, together with a robot pose solve
/// against both alliance origins.
#[derive(Debug, Clone)]
pub struct SimulatedTagCamera {
    config: TagCameraConfig,
    landmarks: LandmarkTable,
    field: FieldDimensions,
    position_noise: GaussianNoise,
    heading_noise: GaussianNoise,
    angle_noise: GaussianNoise,
}

impl SimulatedTagCamera {
    pub fn new(
        config: TagCameraConfig,
        landmarks: LandmarkTable,
        field: FieldDimensions,
    ) -> Result<Self, SimError> {
        Ok(Self {
            position_noise: GaussianNoise::new(config.position_noise_stddev_m)?,
            heading_noise: GaussianNoise::new(config.heading_noise_stddev_deg)?,
            angle_noise: GaussianNoise::new(config.angle_noise_stddev_deg)?,
            config,
            landmarks,
            field,
        })
    }

    /// The landmark the camera would lock onto from `truth`, if any.
    pub fn visible_landmark(&self, truth: &Pose2D) -> Option<Sighting> {
        let half_fov = (self.config.horizontal_fov_deg / 2.0).to_radians();
        self.landmarks
            .iter()
            .filter_map(|(id, landmark)| {
                let local = landmark.relative_to(truth).translation();
                let range_m = local.norm();
                if local.x <= 0.0 || range_m > self.config.max_range_m {
                    return None;
                }
                if local.y.atan2(local.x).abs() > half_fov {
                    return None;
                }
                // Tags are single-sided: the robot has to be in front of it.
                let to_robot = truth.translation() - landmark.translation();
                let facing = Translation::new(landmark.rotation().cos(), landmark.rotation().sin());
                if facing.x * to_robot.x + facing.y * to_robot.y <= 0.0 {
                    return None;
                }
                Some(Sighting { id, local, range_m })
            })
            .min_by(|a, b| a.range_m.total_cmp(&b.range_m))
    }

    /// This cycle's reading for a robot at `truth` (blue-origin coordinates).
    pub fn observe<R: Rng + ?Sized>(&self, truth: &Pose2D, rng: &mut R) -> TrackerSnapshot {
        let Some(sighting) = self.visible_landmark(truth) else {
            return TrackerSnapshot::empty();
        };
        if self.config.dropout_probability > 0.0 && rng.gen_bool(self.config.dropout_probability) {
            return TrackerSnapshot::empty();
        }

        let bearing = sighting.local.y.atan2(sighting.local.x);
        // Level camera; vertical offsets are positive below the crosshair.
        let depression = (self.config.mount_height_m - self.config.landmark_height_m)
            .atan2(sighting.range_m);
        let horizontal = Rotation::from_radians(bearing + self.angle_noise.sample(rng).to_radians());
        let vertical = Rotation::from_radians(depression + self.angle_noise.sample(rng).to_radians());

        let blue_origin = Pose2D::new(
            truth.translation()
                + Translation::new(self.position_noise.sample(rng), self.position_noise.sample(rng)),
            truth.rotation() + Rotation::from_degrees(self.heading_noise.sample(rng)),
        );
        let red_origin = self.field.flip_origin(&blue_origin);

        TrackerSnapshot::with_target()
            .offsets(horizontal, vertical)
            .area(AREA_AT_ONE_METRE / sighting.range_m.powi(2).max(f64::EPSILON))
            .skewed(Rotation::from_degrees(self.angle_noise.sample(rng)))
            .id(sighting.id)
            .pose(AllianceColor::Blue, blue_origin)
            .pose(AllianceColor::Red, red_origin)
    }
}
