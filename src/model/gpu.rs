use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// GPU metrics computed upstream. The generators only forward them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuMetrics {
    pub gpu_ids: Vec<u32>,
    pub gpu_utilization: BTreeMap<u32, f64>,
    pub sm_efficiency: BTreeMap<u32, f64>,
    pub occupancy: BTreeMap<u32, f64>,
    /// per GPU: (utilization bucket, count)
    pub gpu_util_buckets: BTreeMap<u32, Vec<(f64, f64)>>,
    /// per GPU: (start, end, efficiency)
    pub approximated_sm_efficiency_ranges: BTreeMap<u32, Vec<(f64, f64, f64)>>,
}
