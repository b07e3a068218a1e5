// argus_core/src/telemetry.rs

//! The pull-based telemetry contract. Components describe what they want
//! recorded each cycle; an external scheduler decides when to ask and where
//! the values go.

use crate::geometry::Pose2D;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LogValue {
    Int(i64),
    Bool(bool),
    Double(f64),
    Pose(Pose2D),
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Int(v) => write!(f, "{}", v),
            LogValue::Bool(v) => write!(f, "{}", v),
            LogValue::Double(v) => write!(f, "{:.4}", v),
            LogValue::Pose(p) => write!(f, "{}", p),
        }
    }
}

impl From<i32> for LogValue {
    fn from(v: i32) -> Self {
        LogValue::Int(v.into())
    }
}

impl From<i64> for LogValue {
    fn from(v: i64) -> Self {
        LogValue::Int(v)
    }
}

impl From<bool> for LogValue {
    fn from(v: bool) -> Self {
        LogValue::Bool(v)
    }
}

impl From<f64> for LogValue {
    fn from(v: f64) -> Self {
        LogValue::Double(v)
    }
}

impl From<Pose2D> for LogValue {
    fn from(v: Pose2D) -> Self {
        LogValue::Pose(v)
    }
}

/// Named values recorded for one component during one cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTable {
    entries: BTreeMap<String, LogValue>,
}

impl LogTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `key`, replacing any earlier value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<LogValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&LogValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LogValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for LogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

/// Anything the periodic logging task can pull values from.
pub trait Loggable {
    /// Writes this cycle's values into `table`.
    fn log_data(&self, table: &mut LogTable);

    /// The namespace the values are recorded under.
    fn table_name(&self) -> &str;
}

/// The fixed set of vision values exposed every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisionTelemetry {
    pub tag_id: i32,
    pub sees_tag: bool,
    pub sees_object: bool,
    pub robot_pose: Pose2D,
    pub relative_tag_pose: Pose2D,
}

impl VisionTelemetry {
    pub const TAG_ID_KEY: &'static str = "Tag ID";
    pub const SEES_TAG_KEY: &'static str = "Sees tag";
    pub const SEES_OBJECT_KEY: &'static str = "Sees gamepiece";
    pub const ROBOT_POSE_KEY: &'static str = "Vision Odometry";
    pub const RELATIVE_POSE_KEY: &'static str = "Relative Tag Pose";

    pub fn write_to(&self, table: &mut LogTable) {
        table.put(Self::TAG_ID_KEY, self.tag_id);
        table.put(Self::SEES_TAG_KEY, self.sees_tag);
        table.put(Self::SEES_OBJECT_KEY, self.sees_object);
        table.put(Self::ROBOT_POSE_KEY, self.robot_pose);
        table.put(Self::RELATIVE_POSE_KEY, self.relative_tag_pose);
    }
}
