use serde::{Deserialize, Serialize};

/// A kernel launched by a specific operator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelAggByNameOp {
    pub name: String,
    pub op_name: String,
    pub calls: u64,
    pub total_duration: f64,
    pub avg_duration: f64,
    pub max_duration: f64,
    pub min_duration: f64,
}

/// Duration statistics of one kernel name across all operators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelStat {
    pub name: String,
    pub count: f64,
    pub sum: f64,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}
