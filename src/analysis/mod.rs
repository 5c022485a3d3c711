/// Compute/communication overlap and collective wait decomposition
pub mod cc_overlap;
/// Stable descending ranking of operators and kernels
pub mod ranking;
/// Rounding the way the dashboard shows numbers
pub mod rounding;
/// Per-step, per-worker timelines with a synthetic average step
pub mod timeline;
