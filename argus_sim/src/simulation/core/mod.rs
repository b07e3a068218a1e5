// argus_sim/src/simulation/core/mod.rs

pub mod feed;
pub mod ground_truth;
pub mod prng;
