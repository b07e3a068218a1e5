// argus_sim/src/simulation/config/structs.rs

use argus_core::estimator::{LateralOffsetSource, ObjectCameraMount};
use argus_core::geometry::{Pose2D, Rotation, Translation};
use argus_core::types::AllianceColor;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::simulation::utils::serde_helpers;

// =========================================================================
// == Top-Level Configuration ==
// =========================================================================

/// # ScenarioConfig
/// Everything needed for one harness run. This struct is the root of the
/// data parsed from a `scenario.toml` file; every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    #[serde(default)] // Use default if the [simulation] section is missing
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub robot: RobotConfig,

    #[serde(default)]
    pub tag_camera: TagCameraConfig,

    #[serde(default)]
    pub object_camera: ObjectCameraConfig,

    #[serde(default)]
    pub estimator: EstimatorConfig,

    // The TOML has `[[objects]]`, which becomes a Vec of ObjectConfig structs.
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

impl ScenarioConfig {
    /// Rejects values the harness cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        let sim = &self.simulation;
        require(sim.rate_hz.is_finite() && sim.rate_hz > 0.0, "simulation.rate_hz must be positive")?;
        require(
            sim.duration_seconds.is_finite() && sim.duration_seconds >= 0.0,
            "simulation.duration_seconds must be non-negative",
        )?;

        let tag = &self.tag_camera;
        require(fov_ok(tag.horizontal_fov_deg), "tag_camera.horizontal_fov_deg must be in (0, 180)")?;
        require(tag.max_range_m > 0.0, "tag_camera.max_range_m must be positive")?;
        require(
            (0.0..=1.0).contains(&tag.dropout_probability),
            "tag_camera.dropout_probability must be within [0, 1]",
        )?;
        require(
            [
                tag.position_noise_stddev_m,
                tag.heading_noise_stddev_deg,
                tag.angle_noise_stddev_deg,
            ]
            .iter()
            .all(|s| noise_ok(*s)),
            "tag_camera noise must be finite and non-negative",
        )?;

        let object = &self.object_camera;
        require(
            fov_ok(object.horizontal_fov_deg) && fov_ok(object.vertical_fov_deg),
            "object_camera field of view must be in (0, 180)",
        )?;
        require(object.max_range_m > 0.0, "object_camera.max_range_m must be positive")?;
        require(
            noise_ok(object.angle_noise_stddev_deg),
            "object_camera noise must be finite and non-negative",
        )?;
        require(
            self.objects.iter().all(|o| o.position.is_finite()),
            "object positions must be finite",
        )?;
        Ok(())
    }
}

fn require(condition: bool, message: &str) -> Result<(), SimError> {
    if condition {
        Ok(())
    } else {
        Err(SimError::InvalidScenario(message.to_string()))
    }
}

fn fov_ok(deg: f64) -> bool {
    deg.is_finite() && deg > 0.0 && deg < 180.0
}

fn noise_ok(stddev: f64) -> bool {
    stddev.is_finite() && stddev >= 0.0
}

// =========================================================================
// == Configuration Sub-Structs ==
// These map directly to the sections in your scenario.toml file.
// =========================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SimulationSettings {
    /// Optional seed for the pseudo-random number generator for determinism.
    pub seed: Option<u64>,
    /// Control-loop rate in Hz.
    pub rate_hz: f64,
    /// Duration of the run in seconds.
    pub duration_seconds: f64,
    /// Alliance reported by the match-state layer.
    pub match_alliance: AllianceColor,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            rate_hz: 50.0,
            duration_seconds: 10.0,
            match_alliance: AllianceColor::Blue,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RobotConfig {
    /// Starting pose in blue-origin coordinates, written `[x, y, heading_deg]`.
    #[serde(with = "serde_helpers::pose_from_xyh_deg")]
    pub start_pose: Pose2D,
    /// Forward speed in m/s, held for the whole run.
    pub linear_velocity_mps: f64,
    /// Turn rate in deg/s, held for the whole run.
    pub angular_velocity_dps: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            // Facing the blue wall, in front of landmarks 6 and 7.
            start_pose: Pose2D::from_xyh_degrees(3.0, 4.0, 180.0),
            linear_velocity_mps: 0.15,
            angular_velocity_dps: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TagCameraConfig {
    pub horizontal_fov_deg: f64,
    pub max_range_m: f64,
    /// Lens height, used for the reported vertical offset only.
    pub mount_height_m: f64,
    /// Height of the landmark centres.
    pub landmark_height_m: f64,
    pub position_noise_stddev_m: f64,
    pub heading_noise_stddev_deg: f64,
    pub angle_noise_stddev_deg: f64,
    /// Chance that a cycle is reported as "no target" even with one in view.
    pub dropout_probability: f64,
}

impl Default for TagCameraConfig {
    fn default() -> Self {
        Self {
            horizontal_fov_deg: 63.3,
            max_range_m: 6.0,
            mount_height_m: 0.5,
            landmark_height_m: 0.46,
            position_noise_stddev_m: 0.02,
            heading_noise_stddev_deg: 0.5,
            angle_noise_stddev_deg: 0.1,
            dropout_probability: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ObjectCameraConfig {
    pub horizontal_fov_deg: f64,
    pub vertical_fov_deg: f64,
    pub max_range_m: f64,
    pub angle_noise_stddev_deg: f64,
    /// Overrides the compiled-in mount when present.
    pub mount: Option<MountConfig>,
}

impl Default for ObjectCameraConfig {
    fn default() -> Self {
        Self {
            horizontal_fov_deg: 63.3,
            vertical_fov_deg: 49.7,
            max_range_m: 4.0,
            angle_noise_stddev_deg: 0.1,
            mount: None,
        }
    }
}

impl ObjectCameraConfig {
    /// The mount the estimator and the simulated camera both use.
    pub fn resolve_mount(&self) -> Result<ObjectCameraMount, SimError> {
        match &self.mount {
            Some(m) => Ok(ObjectCameraMount::new(
                m.height_m,
                m.target_half_height_m,
                Rotation::from_degrees(m.pitch_deg),
            )?),
            None => Ok(ObjectCameraMount::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MountConfig {
    pub height_m: f64,
    pub target_half_height_m: f64,
    /// Depression of the optical axis in degrees; positive looks down.
    pub pitch_deg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EstimatorConfig {
    pub lateral_offset_source: LateralOffsetSource,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectConfig {
    /// Field position in blue-origin coordinates, written `[x, y]`.
    #[serde(with = "serde_helpers::translation_from_xy")]
    pub position: Translation,
}
