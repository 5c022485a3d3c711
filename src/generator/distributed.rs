use indexmap::IndexMap;
use tracing::{debug, debug_span, warn};

use crate::analysis::cc_overlap::{overlap_breakdown, wait_breakdown};
use crate::analysis::rounding::round;
use crate::analysis::timeline::{build_timeline, WorkerSeries};
use crate::config::GeneratorConfig;
use crate::environment::device::parse_worker;
use crate::error::{GenerateError, Stage};
use crate::generator::Generate;
use crate::model::comm::CommOpStats;
use crate::model::worker::{DistributedInputs, WorkerProfileData};
use crate::view::distributed::{
    CommOpsTables, DeviceInfo, DeviceInventory, DistributedRunProfileView, GpuInfo, OverlapGraph,
    WaitGraph,
};
use crate::view::{Cell, Column, Diagnostic, Metadata, Table, View};

const COMM_OP_COLUMNS: [&str; 7] = [
    "Calls",
    "Total Size (bytes)",
    "Avg Size (bytes)",
    "Total Latency (us)",
    "Avg Latency (us)",
    "Real Time (us)",
    "Avg Real time (us)",
];

/// Builds the cross-worker view of a distributed job.
pub struct DistributedRunGenerator<'a> {
    workers: &'a DistributedInputs,
    config: GeneratorConfig,
}

impl<'a> DistributedRunGenerator<'a> {
    pub fn new(workers: &'a DistributedInputs) -> DistributedRunGenerator<'a> {
        DistributedRunGenerator::with_config(workers, GeneratorConfig::default())
    }

    pub fn with_config(
        workers: &'a DistributedInputs,
        config: GeneratorConfig,
    ) -> DistributedRunGenerator<'a> {
        DistributedRunGenerator { workers, config }
    }

    /// Devices used by each worker, grouped by node and process.
    fn gpu_info(&self, diagnostics: &mut Vec<Diagnostic>) -> Option<DeviceInfo> {
        let mut inventory: DeviceInventory = IndexMap::new();
        let mut synthetic_index = 0;

        for (worker, data) in self.workers {
            if data.device_props.is_empty() {
                continue;
            }

            let (node, process_id) = match parse_worker(worker) {
                Some(np) => (np.node, np.process_id),
                None => {
                    let process_id = synthetic_index;
                    synthetic_index += 1;
                    let diagnostic = Diagnostic::MalformedWorkerId {
                        worker: worker.clone(),
                        process_id,
                    };
                    warn!("{}", diagnostic);
                    diagnostics.push(diagnostic);
                    (worker.clone(), process_id.to_string())
                }
            };

            let mut devices = IndexMap::new();
            for &used in &data.used_devices {
                let Some(props) = data.device_props.get(used) else {
                    let diagnostic = Diagnostic::DeviceIndexOutOfRange {
                        worker: worker.clone(),
                        device: used,
                        available: data.device_props.len(),
                    };
                    warn!("{}", diagnostic);
                    diagnostics.push(diagnostic);
                    continue;
                };
                if props.is_empty() {
                    continue;
                }
                devices.insert(
                    format!("GPU{}", used),
                    GpuInfo {
                        name: props.display_name().map(str::to_string),
                        memory: props.total_global_mem,
                        compute_capability: props.compute_capability(),
                    },
                );
            }

            inventory
                .entry(node)
                .or_default()
                .insert(format!("Process {}", process_id), devices);
        }

        if inventory.is_empty() {
            return None;
        }
        Some(DeviceInfo {
            metadata: Metadata::titled("Device Info"),
            data: inventory,
        })
    }

    fn overlap_series(
        &self,
        worker: &str,
        data: &WorkerProfileData,
    ) -> Result<WorkerSeries<4>, GenerateError> {
        if data.comm_overlap_costs.len() != data.steps_names.len() {
            return Err(GenerateError::StepCountMismatch {
                stage: Stage::OverlapTimeline,
                worker: worker.to_string(),
                steps: data.steps_names.len(),
                costs: data.comm_overlap_costs.len(),
            });
        }
        let steps = data
            .steps_names
            .iter()
            .zip(&data.comm_overlap_costs)
            .map(|(step, costs)| (step.clone(), overlap_breakdown(costs)))
            .collect();
        WorkerSeries::new(worker, steps, Stage::OverlapTimeline, &self.config)
    }

    fn overlap_graph(&self) -> Result<Option<OverlapGraph>, GenerateError> {
        if self.workers.is_empty() {
            return Ok(None);
        }
        let series = self
            .workers
            .iter()
            .map(|(worker, data)| self.overlap_series(worker, data))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(OverlapGraph {
            metadata: Metadata::chart(
                "Computation/Communication Overview",
                &["Computation", "Overlapping", "Communication", "Other"],
                "us",
            ),
            data: build_timeline(&series, self.config.missing_steps),
        }))
    }

    fn wait_graph(&self) -> Result<Option<WaitGraph>, GenerateError> {
        if self.workers.is_empty() {
            return Ok(None);
        }
        let series = self
            .workers
            .iter()
            .map(|(worker, data)| {
                let steps = data
                    .step_comm_stats
                    .iter()
                    .map(|(step, stats)| (step.clone(), wait_breakdown(stats)))
                    .collect();
                WorkerSeries::new(worker, steps, Stage::WaitTimeline, &self.config)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(WaitGraph {
            metadata: Metadata::chart(
                "Collective Communication Overview",
                &["Waiting Time", "Real Communication time"],
                "us",
            ),
            data: build_timeline(&series, self.config.missing_steps),
        }))
    }

    fn comm_op_row(
        &self,
        worker: &str,
        op: &str,
        stats: &CommOpStats,
    ) -> Result<Vec<Cell>, GenerateError> {
        let calls = stats.calls as f64;
        let per_call = |total: f64| {
            self.config.divide(total, calls, || GenerateError::DegenerateInput {
                stage: Stage::CommOpsTable,
                worker: worker.to_string(),
                detail: format!("communication operator {} has no calls", op),
            })
        };
        Ok(vec![
            Cell::from(op),
            Cell::Int(stats.calls as i64),
            Cell::Int(round(stats.total_size)),
            Cell::Int(round(per_call(stats.total_size)?)),
            Cell::Int(round(stats.total_latency)),
            Cell::Int(round(per_call(stats.total_latency)?)),
            Cell::Int(round(stats.total_real)),
            Cell::Int(round(per_call(stats.total_real)?)),
        ])
    }

    fn comm_ops(&self) -> Result<Option<CommOpsTables>, GenerateError> {
        let mut tables = IndexMap::new();
        for (worker, data) in self.workers {
            let mut columns = vec![Column::string("Name")];
            columns.extend(COMM_OP_COLUMNS.iter().map(|c| Column::number(c)));
            let rows = data
                .total_comm_stats
                .iter()
                .map(|(op, stats)| self.comm_op_row(worker, op, stats))
                .collect::<Result<Vec<_>, _>>()?;
            tables.insert(worker.clone(), Table { columns, rows });
        }
        if tables.is_empty() {
            return Ok(None);
        }
        Ok(Some(CommOpsTables {
            metadata: Metadata::titled("Communication Operations Stats"),
            data: tables,
        }))
    }
}

impl Generate for DistributedRunGenerator<'_> {
    type Output = DistributedRunProfileView;

    fn generate(&self) -> Result<DistributedRunProfileView, GenerateError> {
        let _span = debug_span!("generate_distributed_run_profile", workers = self.workers.len())
            .entered();

        let mut diagnostics = vec![];
        let gpu_info = self.gpu_info(&mut diagnostics);
        debug!(nodes = gpu_info.as_ref().map_or(0, |g| g.data.len()), "device info generated");

        let steps_to_overlap = self.overlap_graph()?;
        let steps_to_wait = self.wait_graph()?;
        debug!("timelines generated");

        let comm_ops = self.comm_ops()?;
        debug!(diagnostics = diagnostics.len(), "distributed run profile generated");

        Ok(DistributedRunProfileView {
            views: vec![View::Distributed],
            gpu_info,
            steps_to_overlap,
            steps_to_wait,
            comm_ops,
            diagnostics,
        })
    }
}
