// argus_sim/src/simulation/core/ground_truth.rs

use argus_core::geometry::{Pose2D, Rotation, Translation};

use crate::simulation::config::structs::RobotConfig;

/// The robot's true pose, driven by a constant body-frame twist.
#[derive(Debug, Clone)]
pub struct GroundTruth {
    pose: Pose2D,
    linear_velocity_mps: f64,
    angular_velocity: Rotation,
    time_s: f64,
}

impl GroundTruth {
    pub fn new(pose: Pose2D, linear_velocity_mps: f64, angular_velocity: Rotation) -> Self {
        Self {
            pose,
            linear_velocity_mps,
            angular_velocity,
            time_s: 0.0,
        }
    }

    pub fn from_config(config: &RobotConfig) -> Self {
        Self::new(
            config.start_pose,
            config.linear_velocity_mps,
            Rotation::from_degrees(config.angular_velocity_dps),
        )
    }

    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Moves the robot forward by one step of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        let step = Translation::new(self.linear_velocity_mps * dt, 0.0);
        let turn = Rotation::from_radians(self.angular_velocity.radians() * dt);
        self.pose = self.pose.transform_by(step, turn);
        self.time_s += dt;
    }
}
