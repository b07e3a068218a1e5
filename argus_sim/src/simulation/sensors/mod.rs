// argus_sim/src/simulation/sensors/mod.rs

//! Simulated tracker drivers. Each one turns ground truth into the
//! `TrackerSnapshot` a real camera would have cached for the cycle.

pub mod object_camera;
pub mod tag_camera;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::SimError;

/// Zero-mean Gaussian noise. A standard deviation of zero yields exact
/// readings without touching the generator.
#[derive(Debug, Clone, Copy)]
pub struct GaussianNoise(Option<Normal<f64>>);

impl GaussianNoise {
    pub fn new(stddev: f64) -> Result<Self, SimError> {
        if stddev == 0.0 {
            return Ok(Self(None));
        }
        Normal::new(0.0, stddev)
            .map(|dist| Self(Some(dist)))
            .map_err(|e| SimError::InvalidScenario(format!("noise stddev {}: {}", stddev, e)))
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.0 {
            Some(dist) => dist.sample(rng),
            None => 0.0,
        }
    }
}
