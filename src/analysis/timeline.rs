use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::config::{GeneratorConfig, MissingStepPolicy};
use crate::error::{GenerateError, Stage};

/// Name of the synthetic step holding each worker's per-step average.
pub const ALL_STEPS: &str = "all";

/// step -> worker -> component vector
pub type Timeline<const N: usize> = IndexMap<String, IndexMap<String, [f64; N]>>;

/// One worker's per-step vectors and their average.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerSeries<const N: usize> {
    pub worker: String,
    pub steps: Vec<(String, [f64; N])>,
    pub all: [f64; N],
}

impl<const N: usize> WorkerSeries<N> {
    /// Average the worker's steps, unweighted. A repeated step name keeps its
    /// last vector; a step the worker named `"all"` is dropped. A worker
    /// without steps is degenerate input and handled by the divisor policy.
    pub fn new(
        worker: &str,
        steps: Vec<(String, [f64; N])>,
        stage: Stage,
        config: &GeneratorConfig,
    ) -> Result<Self, GenerateError> {
        let mut by_name: IndexMap<String, [f64; N]> = IndexMap::new();
        for (name, v) in steps {
            if name == ALL_STEPS {
                warn!(worker, %stage, "reported step {:?} is shadowed by the average", ALL_STEPS);
                continue;
            }
            by_name.insert(name, v);
        }
        let steps: Vec<(String, [f64; N])> = by_name.into_iter().collect();

        let mut sum = [0.0; N];
        for (_, v) in &steps {
            for (acc, x) in sum.iter_mut().zip(v.iter()) {
                *acc += x;
            }
        }
        let n = steps.len() as f64;
        let mut all = [0.0; N];
        for (slot, total) in all.iter_mut().zip(sum.iter()) {
            *slot = config.divide(*total, n, || GenerateError::DegenerateInput {
                stage,
                worker: worker.to_string(),
                detail: "no steps to average".to_string(),
            })?;
        }
        Ok(WorkerSeries {
            worker: worker.to_string(),
            steps,
            all,
        })
    }
}

/// Lay out worker series by step: the synthetic average step first, then
/// every step any worker reported, in order of first appearance.
pub fn build_timeline<const N: usize>(
    series: &[WorkerSeries<N>],
    missing: MissingStepPolicy,
) -> Timeline<N> {
    let mut timeline: Timeline<N> = IndexMap::new();
    timeline.insert(
        ALL_STEPS.to_string(),
        series.iter().map(|s| (s.worker.clone(), s.all)).collect(),
    );

    let step_names: IndexSet<&str> = series
        .iter()
        .flat_map(|s| s.steps.iter().map(|(name, _)| name.as_str()))
        .filter(|name| *name != ALL_STEPS)
        .collect();

    for step in step_names {
        let mut by_worker = IndexMap::new();
        for s in series {
            match s.steps.iter().find(|(name, _)| name == step) {
                Some((_, v)) => {
                    by_worker.insert(s.worker.clone(), *v);
                }
                None if missing == MissingStepPolicy::Zero => {
                    by_worker.insert(s.worker.clone(), [0.0; N]);
                }
                None => {}
            }
        }
        timeline.insert(step.to_string(), by_worker);
    }
    timeline
}
