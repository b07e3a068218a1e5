// argus_sim/src/simulation/utils/serde_helpers.rs

pub mod pose_from_xyh_deg {
    use argus_core::geometry::Pose2D;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(pose: &Pose2D, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let arr = [pose.x(), pose.y(), pose.heading()];
        serializer.collect_seq(arr.iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pose2D, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: [f64; 3] = Deserialize::deserialize(deserializer)?;
        Ok(Pose2D::from_xyh_degrees(arr[0], arr[1], arr[2]))
    }
}

pub mod translation_from_xy {
    use argus_core::geometry::Translation;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(translation: &Translation, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq([translation.x, translation.y].iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Translation, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: [f64; 2] = Deserialize::deserialize(deserializer)?;
        Ok(Translation::new(arr[0], arr[1]))
    }
}
