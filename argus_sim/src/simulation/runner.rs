// argus_sim/src/simulation/runner.rs

use argus_core::estimator::PoseEstimator;
use argus_core::geometry::{Pose2D, Translation};
use argus_core::landmarks::LandmarkTable;
use argus_core::telemetry::VisionTelemetry;
use argus_core::types::{AllianceColor, FieldDimensions};
use tracing::{debug, info};

use crate::error::SimError;
use crate::simulation::config::structs::ScenarioConfig;
use crate::simulation::core::{feed::SnapshotFeed, ground_truth::GroundTruth, prng::SimulationRng};
use crate::simulation::sensors::{
    object_camera::SimulatedObjectCamera, tag_camera::SimulatedTagCamera,
};
use crate::simulation::telemetry::{LogInputsTask, LogSink};

/// What happened during one control cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleReport {
    pub time_s: f64,
    pub truth: Pose2D,
    pub telemetry: VisionTelemetry,
    /// Estimated object offset, when the object tracker had a target.
    pub object_offset: Option<Translation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub cycles: u64,
    pub tag_sightings: u64,
    pub object_sightings: u64,
    /// Mean distance between the tag tracker's pose solve and ground truth,
    /// over cycles with a tag in view.
    pub mean_position_error_m: Option<f64>,
}

/// The fixed-cadence loop: advance truth, publish both tracker readings,
/// then let the log task pull from the estimator.
pub struct Simulation {
    rate_hz: f64,
    planned_cycles: u64,
    rng: SimulationRng,
    truth: GroundTruth,
    tag_camera: SimulatedTagCamera,
    object_camera: SimulatedObjectCamera,
    tag_feed: SnapshotFeed,
    object_feed: SnapshotFeed,
    estimator: PoseEstimator,
    log_task: LogInputsTask,
}

impl Simulation {
    pub fn from_config(config: ScenarioConfig) -> Result<Self, SimError> {
        config.validate()?;
        let landmarks = LandmarkTable::standard();
        let field = FieldDimensions::STANDARD;
        let mount = config.object_camera.resolve_mount()?;

        let tag_feed = SnapshotFeed::new();
        let object_feed = SnapshotFeed::new();

        // One estimator for the whole run. The log task gets its own handle;
        // both read the same feeds.
        let estimator = PoseEstimator::new(
            Box::new(tag_feed.clone()),
            Box::new(object_feed.clone()),
            config.simulation.match_alliance,
        )
        .with_mount(mount)
        .with_landmarks(landmarks.clone())
        .with_lateral_offset_source(config.estimator.lateral_offset_source);
        let log_task = LogInputsTask::new(vec![Box::new(estimator.clone())]);

        let objects = config.objects.iter().map(|o| o.position).collect();
        let sim = &config.simulation;
        info!(
            "Built simulation: {} objects, match alliance {:?}, seed {:?}",
            config.objects.len(),
            sim.match_alliance,
            sim.seed
        );

        Ok(Self {
            rate_hz: sim.rate_hz,
            planned_cycles: (sim.duration_seconds * sim.rate_hz).round() as u64,
            rng: SimulationRng::new(sim.seed),
            truth: GroundTruth::from_config(&config.robot),
            tag_camera: SimulatedTagCamera::new(config.tag_camera.clone(), landmarks, field)?,
            object_camera: SimulatedObjectCamera::new(config.object_camera.clone(), mount, objects)?,
            tag_feed,
            object_feed,
            estimator,
            log_task,
        })
    }

    pub fn rate_hz(&self) -> f64 {
        self.rate_hz
    }

    pub fn planned_cycles(&self) -> u64 {
        self.planned_cycles
    }

    pub fn estimator(&self) -> &PoseEstimator {
        &self.estimator
    }

    pub fn ground_truth(&self) -> &GroundTruth {
        &self.truth
    }

    /// Runs one control cycle.
    pub fn step(&mut self, sink: &mut dyn LogSink) -> CycleReport {
        let truth = self.truth.pose();
        let time_s = self.truth.time_s();

        self.tag_feed
            .publish(self.tag_camera.observe(&truth, &mut self.rng.0));
        self.object_feed
            .publish(self.object_camera.observe(&truth, &mut self.rng.0));

        self.log_task.run(sink);

        let telemetry = self.estimator.telemetry();
        let object_offset = self
            .estimator
            .sees_object()
            .then(|| self.estimator.estimate_offset(Translation::zero()));

        self.truth.advance(1.0 / self.rate_hz);

        CycleReport {
            time_s,
            truth,
            telemetry,
            object_offset,
        }
    }

    /// Runs `cycles` control cycles and summarizes them.
    pub fn run(&mut self, cycles: u64, sink: &mut dyn LogSink) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut error_sum = 0.0;

        for _ in 0..cycles {
            let report = self.step(sink);
            summary.cycles += 1;
            if report.telemetry.sees_object {
                summary.object_sightings += 1;
            }
            if report.telemetry.sees_tag {
                summary.tag_sightings += 1;
                let solved = self
                    .estimator
                    .robot_pose_from(Pose2D::default(), AllianceColor::Blue);
                error_sum += (solved.translation() - report.truth.translation()).norm();
            }
            if summary.cycles % self.rate_hz.max(1.0).round() as u64 == 0 {
                debug!(
                    "t={:.2}s truth={} tag={} relative={}",
                    report.time_s,
                    report.truth,
                    report.telemetry.tag_id,
                    report.telemetry.relative_tag_pose
                );
            }
        }

        if summary.tag_sightings > 0 {
            summary.mean_position_error_m = Some(error_sum / summary.tag_sightings as f64);
        }
        summary
    }
}
