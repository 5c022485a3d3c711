/// Communication statistics: overlap, wait and per-operator totals
pub mod comm;
/// Per-step cost breakdown
pub mod cost;
/// GPU utilization metrics passed through to the run view
pub mod gpu;
/// Kernel aggregates
pub mod kernel;
/// Operator aggregates
pub mod operator;
/// Everything known about one worker, and the distributed job as a whole
pub mod worker;
