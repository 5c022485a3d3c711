use std::fmt;

use thiserror::Error;

/// Transformation step in which a generator failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Overview,
    OverlapTimeline,
    WaitTimeline,
    CommOpsTable,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Overview => "overview",
            Stage::OverlapTimeline => "overlap timeline",
            Stage::WaitTimeline => "wait timeline",
            Stage::CommOpsTable => "communication operator table",
        };
        f.write_str(s)
    }
}

/// Unrecoverable generation failures. Non-fatal conditions are reported as
/// [`crate::view::Diagnostic`] instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    #[error("degenerate input in {stage} for worker {worker}: {detail}")]
    DegenerateInput {
        stage: Stage,
        worker: String,
        detail: String,
    },

    #[error("{stage} for worker {worker}: {steps} step names but {costs} per-step entries")]
    StepCountMismatch {
        stage: Stage,
        worker: String,
        steps: usize,
        costs: usize,
    },
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read aggregated profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse aggregated profile: {0}")]
    Json(#[from] serde_json::Error),
}
