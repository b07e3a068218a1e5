// argus_sim/src/simulation/core/feed.rs

use argus_core::geometry::{Pose2D, Rotation};
use argus_core::sensor::{TargetSensor, TrackerSnapshot};
use argus_core::types::AllianceColor;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// The driver-side cache of one tracker.
///
/// The simulated camera publishes a fresh `TrackerSnapshot` once per cycle;
/// every clone of the feed (including the one boxed inside the estimator)
/// reads that same snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotFeed {
    latest: Arc<RwLock<TrackerSnapshot>>,
}

impl SnapshotFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached reading.
    pub fn publish(&self, snapshot: TrackerSnapshot) {
        let mut latest = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        *latest = snapshot;
    }

    pub fn latest(&self) -> TrackerSnapshot {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, TrackerSnapshot> {
        // A panicked writer leaves a whole snapshot behind; keep serving it.
        self.latest.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TargetSensor for SnapshotFeed {
    fn has_valid_target(&self) -> bool {
        self.read().has_valid_target()
    }

    fn horizontal_offset(&self) -> Option<Rotation> {
        self.read().horizontal_offset()
    }

    fn vertical_offset(&self) -> Option<Rotation> {
        self.read().vertical_offset()
    }

    fn target_area(&self) -> Option<f64> {
        self.read().target_area()
    }

    fn skew(&self) -> Option<Rotation> {
        self.read().skew()
    }

    fn target_id(&self) -> Option<i32> {
        self.read().target_id()
    }

    fn pose_estimate(&self, origin: AllianceColor) -> Option<Pose2D> {
        self.read().pose_estimate(origin)
    }
}
