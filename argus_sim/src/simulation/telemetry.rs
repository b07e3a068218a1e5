// argus_sim/src/simulation/telemetry.rs

//! The periodic logging task: once per cycle it pulls a `LogTable` from every
//! registered `Loggable` and hands it to a sink.

use argus_core::telemetry::{LogTable, Loggable};
use tracing::debug;

/// Where recorded tables end up.
pub trait LogSink {
    fn record(&mut self, table_name: &str, cycle: u64, table: &LogTable);
}

/// Emits every table as a `debug` event on the `telemetry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&mut self, table_name: &str, cycle: u64, table: &LogTable) {
        debug!(target: "telemetry", table = table_name, cycle, "{}", table);
    }
}

/// Keeps every recorded table in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub records: Vec<(String, u64, LogTable)>,
}

impl LogSink for MemorySink {
    fn record(&mut self, table_name: &str, cycle: u64, table: &LogTable) {
        self.records
            .push((table_name.to_string(), cycle, table.clone()));
    }
}

pub struct LogInputsTask {
    targets: Vec<Box<dyn Loggable>>,
    scratch: LogTable,
    cycle: u64,
}

impl LogInputsTask {
    pub fn new(targets: Vec<Box<dyn Loggable>>) -> Self {
        Self {
            targets,
            scratch: LogTable::new(),
            cycle: 0,
        }
    }

    pub fn add_target(&mut self, target: Box<dyn Loggable>) {
        self.targets.push(target);
    }

    /// Number of times `run` has completed.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn run(&mut self, sink: &mut dyn LogSink) {
        for target in &self.targets {
            self.scratch.clear();
            target.log_data(&mut self.scratch);
            sink.record(target.table_name(), self.cycle, &self.scratch);
        }
        self.cycle += 1;
    }
}
