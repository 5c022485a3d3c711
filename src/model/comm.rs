use serde::{Deserialize, Serialize};

/// Computation and communication time of one step, and how much of the two
/// ran concurrently. `overlap <= min(computation, communication)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommOverlapCosts {
    pub computation: f64,
    pub communication: f64,
    pub overlap: f64,
    pub other: f64,
}

/// Collective communication time of one step and the part of it spent
/// waiting for peers. `wait <= total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepCommStats {
    pub total: f64,
    pub wait: f64,
}

/// Cumulative statistics of one communication operator over the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommOpStats {
    pub calls: u64,
    /// bytes
    pub total_size: f64,
    pub total_latency: f64,
    /// time spent actually transferring, latency minus waiting
    pub total_real: f64,
}
