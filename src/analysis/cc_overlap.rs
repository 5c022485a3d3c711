use crate::model::comm::{CommOverlapCosts, StepCommStats};

/// Split a step into `[computation only, overlapping, communication only, other]`.
pub fn overlap_breakdown(costs: &CommOverlapCosts) -> [f64; 4] {
    [
        costs.computation - costs.overlap,
        costs.overlap,
        costs.communication - costs.overlap,
        costs.other,
    ]
}

/// Split collective communication time into `[waiting, transferring]`.
pub fn wait_breakdown(stats: &StepCommStats) -> [f64; 2] {
    [stats.wait, stats.total - stats.wait]
}
