// argus_core/src/landmarks.rs

use crate::error::VisionError;
use crate::geometry::{Pose2D, Rotation, Translation};
use crate::types::FieldDimensions;
use std::collections::BTreeMap;

/// Landmarks with an id up to and including this one face back down the
/// field (heading 180°); the rest face 0°. Each landmark faces the alliance
/// that owns it.
pub const LAST_HALF_TURN_ID: i32 = 4;

/// Fiducial positions measured from the field centre, in metres.
const FIELD_CENTRED_LANDMARKS: [(i32, f64, f64); 8] = [
    (1, 7.24310, -2.93659),
    (2, 7.24310, -1.26019),
    (3, 7.24310, 0.41621),
    (4, 7.90832, 2.74161),
    (5, -7.90832, 2.74161),
    (6, -7.24310, 0.41621),
    (7, -7.24310, -1.26019),
    // Same coordinates as 7 in the fielded table; unconfirmed against the
    // field drawings.
    (8, -7.24310, -1.26019),
];

/// Facing of the landmark with the given id.
pub fn landmark_heading(id: i32) -> Rotation {
    if id > LAST_HALF_TURN_ID {
        Rotation::ZERO
    } else {
        Rotation::HALF_TURN
    }
}

fn landmark_pose(id: i32, translation: Translation) -> Pose2D {
    Pose2D::new(translation, landmark_heading(id))
}

/// The fixed ground poses of every field landmark, keyed by fiducial id.
///
/// Built once and never mutated. Lookups of ids that are not in the table
/// resolve to the origin pose instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkTable {
    poses: BTreeMap<i32, Pose2D>,
}

impl LandmarkTable {
    /// The eight-landmark layout of the standard field, in blue-origin
    /// coordinates.
    pub fn standard() -> Self {
        let poses = standard_entries()
            .map(|(id, translation)| (id, landmark_pose(id, translation)))
            .collect();
        Self { poses }
    }

    /// Builds a table from `(id, position)` pairs, applying the id-based
    /// heading rule.
    ///
    /// # Errors
    /// Rejects duplicated ids and non-finite positions. Both are mistakes in
    /// static data and should surface at startup.
    pub fn from_entries<I>(entries: I) -> Result<Self, VisionError>
    where
        I: IntoIterator<Item = (i32, Translation)>,
    {
        let mut poses = BTreeMap::new();
        for (id, translation) in entries {
            if !translation.is_finite() {
                return Err(VisionError::NonFiniteLandmark { id });
            }
            if poses.insert(id, landmark_pose(id, translation)).is_some() {
                return Err(VisionError::DuplicateLandmark { id });
            }
        }
        Ok(Self { poses })
    }

    pub fn get(&self, id: i32) -> Option<Pose2D> {
        self.poses.get(&id).copied()
    }

    /// The pose of landmark `id`, or the origin pose for unknown ids.
    pub fn pose(&self, id: i32) -> Pose2D {
        self.get(id).unwrap_or_default()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.poses.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.poses.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, Pose2D)> + '_ {
        self.poses.iter().map(|(id, pose)| (*id, *pose))
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

impl Default for LandmarkTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Standard landmark positions shifted from field-centred to blue-origin
/// coordinates.
pub fn standard_entries() -> impl Iterator<Item = (i32, Translation)> {
    let shift = FieldDimensions::STANDARD.half_extent();
    FIELD_CENTRED_LANDMARKS
        .into_iter()
        .map(move |(id, x, y)| (id, Translation::new(x, y) + shift))
}
