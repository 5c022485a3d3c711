use indexmap::IndexMap;
use itertools::Itertools;
use tracing::{debug, debug_span};

use crate::analysis::ranking::{rank_descending, rank_positive};
use crate::analysis::rounding::{percentage, round};
use crate::error::{GenerateError, Stage};
use crate::generator::Generate;
use crate::model::cost::{CostBreakdown, ProfileRole};
use crate::model::operator::{OpDuration, OperatorAgg};
use crate::model::worker::WorkerProfileData;
use crate::view::run::{
    KernelPie, OperatorPies, OperatorRow, Overview, PerformanceNode, RunProfileView,
};
use crate::view::{Cell, Column, PieDataset, Table, TablePayload, View};

const KERNEL_DURATION_COLUMNS: [&str; 5] = [
    "Calls",
    "Total Duration (us)",
    "Mean Duration (us)",
    "Max Duration (us)",
    "Min Duration (us)",
];

/// Builds the view model of a single worker.
pub struct RunGenerator<'a> {
    worker: String,
    data: &'a WorkerProfileData,
}

impl<'a> RunGenerator<'a> {
    pub fn new(worker: impl Into<String>, data: &'a WorkerProfileData) -> RunGenerator<'a> {
        RunGenerator {
            worker: worker.into(),
            data,
        }
    }

    /// Buckets shown in the overview, in column order.
    fn overview_roles(&self) -> Vec<ProfileRole> {
        let mut roles = vec![];
        if self.data.show_gpu_overview() {
            roles.extend(ProfileRole::GPU);
        }
        roles.extend(ProfileRole::HOST);
        roles
    }

    fn overview(&self) -> Result<Overview, GenerateError> {
        let data = self.data;
        if data.steps_names.len() != data.steps_costs.len() {
            return Err(GenerateError::StepCountMismatch {
                stage: Stage::Overview,
                worker: self.worker.clone(),
                steps: data.steps_names.len(),
                costs: data.steps_costs.len(),
            });
        }
        let roles = self.overview_roles();

        let mut columns = vec![Column::string("Step")];
        for role in &roles {
            columns.push(Column::number(role.label()));
            columns.push(Column::tooltip());
        }

        let rows = data
            .steps_names
            .iter()
            .zip(&data.steps_costs)
            .map(|(step, costs)| {
                let mut row = vec![Cell::from(step.as_str())];
                for role in &roles {
                    row.push(Cell::Int(round(costs.get(*role))));
                    row.push(Cell::Text(part_tooltip(step, costs, *role)));
                }
                row
            })
            .collect();

        Ok(Overview {
            steps: Table { columns, rows },
            performance: vec![self.performance(&roles)],
            recommendations: recommendations_html(&data.recommendations),
        })
    }

    fn performance(&self, roles: &[ProfileRole]) -> PerformanceNode {
        let avg = &self.data.avg_costs;
        let avg_total = avg.total();
        let children = roles
            .iter()
            .map(|role| PerformanceNode {
                name: role.label().to_string(),
                description: String::new(),
                value: round(avg.get(*role)),
                extra: percentage(avg.get(*role), avg_total),
                children: None,
            })
            .collect();
        PerformanceNode {
            name: "Average Step Time".to_string(),
            description: String::new(),
            value: round(avg_total),
            extra: 100.0,
            children: Some(children),
        }
    }

    fn op_pies(&self, group_by_input_shape: bool) -> OperatorPies {
        let ops = self.data.operators(group_by_input_shape);
        OperatorPies {
            device_total_time: op_pie(ops, OpDuration::DeviceTotal, "Device Total Time (us)"),
            device_self_time: op_pie(ops, OpDuration::DeviceSelf, "Device Self Time (us)"),
            host_total_time: op_pie(ops, OpDuration::HostTotal, "Host Total Time (us)"),
            host_self_time: op_pie(ops, OpDuration::HostSelf, "Host Self Time (us)"),
        }
    }

    /// Operator rows, most expensive first. General tables flag whether a
    /// drill-down exists; drill-down tables carry the call stack itself.
    fn op_table(
        &self,
        ops: &[OperatorAgg],
        group_by_input_shape: bool,
        call_stack: bool,
    ) -> Vec<OperatorRow> {
        let show_gpu = self.data.show_gpu_operators();
        let stacks = self.data.stacks(group_by_input_shape);
        let sort_key = if show_gpu {
            OpDuration::DeviceSelf
        } else {
            OpDuration::HostSelf
        };

        rank_descending(ops, |op| op.duration(sort_key))
            .into_iter()
            .map(|op| {
                let mut row = OperatorRow {
                    name: op.name.clone(),
                    calls: op.calls,
                    host_self_duration: round(op.self_host_duration),
                    host_total_duration: round(op.host_duration),
                    ..Default::default()
                };
                if group_by_input_shape {
                    row.input_shape = Some(op.input_shape.clone().unwrap_or_default());
                }
                if show_gpu {
                    row.device_self_duration = Some(round(op.self_device_duration));
                    row.device_total_duration = Some(round(op.device_duration));
                }
                if call_stack {
                    row.call_stack = op.call_stack().map(str::to_string);
                } else {
                    let identity = op.identity(group_by_input_shape);
                    row.has_call_stack = Some(stacks.contains_key(&identity));
                }
                row
            })
            .collect()
    }

    fn op_table_for_name(&self, group_by_input_shape: bool) -> Option<Vec<OperatorRow>> {
        let ops = self.data.operators(group_by_input_shape);
        if ops.is_empty() {
            return None;
        }
        Some(self.op_table(ops, group_by_input_shape, false))
    }

    fn op_tables_for_stack(
        &self,
        group_by_input_shape: bool,
    ) -> Option<IndexMap<String, Vec<OperatorRow>>> {
        let stacks = self.data.stacks(group_by_input_shape);
        if stacks.is_empty() {
            return None;
        }
        let tables = stacks
            .iter()
            .map(|(identity, ops)| {
                (identity.clone(), self.op_table(ops, group_by_input_shape, true))
            })
            .collect();
        Some(tables)
    }

    fn kernel_op_table(&self) -> Option<TablePayload> {
        let kernels = &self.data.kernel_list_groupby_name_op;
        if kernels.is_empty() {
            return None;
        }
        let mut columns = vec![Column::string("Name"), Column::string("Operator")];
        columns.extend(KERNEL_DURATION_COLUMNS.iter().map(|c| Column::number(c)));

        let rows = rank_descending(kernels, |k| k.total_duration)
            .into_iter()
            .map(|k| {
                vec![
                    Cell::from(k.name.as_str()),
                    Cell::from(k.op_name.as_str()),
                    Cell::Int(k.calls as i64),
                    Cell::Int(round(k.total_duration)),
                    Cell::Int(round(k.avg_duration)),
                    Cell::Int(round(k.max_duration)),
                    Cell::Int(round(k.min_duration)),
                ]
            })
            .collect();
        Some(TablePayload {
            data: Table { columns, rows },
        })
    }

    fn kernel_pie(&self) -> Option<KernelPie> {
        let rows = self
            .data
            .kernel_stat
            .iter()
            .map(|k| (k.name.clone(), round(k.sum)))
            .collect();
        PieDataset::new(None, rows).map(|total| KernelPie { total })
    }

    fn kernel_table(&self) -> Option<TablePayload> {
        let stats = &self.data.kernel_stat;
        if stats.is_empty() {
            return None;
        }
        let mut columns = vec![Column::string("Name")];
        columns.extend(KERNEL_DURATION_COLUMNS.iter().map(|c| Column::number(c)));

        let rows = stats
            .iter()
            .map(|k| {
                vec![
                    Cell::from(k.name.as_str()),
                    Cell::Int(round(k.count)),
                    Cell::Int(round(k.sum)),
                    Cell::Int(round(k.mean)),
                    Cell::Int(round(k.max)),
                    Cell::Int(round(k.min)),
                ]
            })
            .collect();
        Some(TablePayload {
            data: Table { columns, rows },
        })
    }
}

impl Generate for RunGenerator<'_> {
    type Output = RunProfileView;

    fn generate(&self) -> Result<RunProfileView, GenerateError> {
        let _span = debug_span!("generate_run_profile", worker = %self.worker).entered();
        let data = self.data;

        let mut views = vec![View::Overview];
        let overview = self.overview()?;
        debug!(steps = data.steps_names.len(), "overview generated");

        views.push(View::Operator);
        let operation_pie_by_name = self.op_pies(false);
        let operation_table_by_name = self.op_table_for_name(false);
        let operation_stack_by_name = self.op_tables_for_stack(false);
        let operation_pie_by_name_input = self.op_pies(true);
        let operation_table_by_name_input = self.op_table_for_name(true);
        let operation_stack_by_name_input = self.op_tables_for_stack(true);
        debug!(
            operators = data.op_list_groupby_name.len(),
            operators_by_shape = data.op_list_groupby_name_input.len(),
            "operator views generated"
        );

        let (kernel_op_table, kernel_pie, kernel_table) = if data.has_kernel {
            views.push(View::Kernel);
            debug!(kernels = data.kernel_stat.len(), "kernel views generated");
            (self.kernel_op_table(), self.kernel_pie(), self.kernel_table())
        } else {
            (None, None, None)
        };

        views.push(View::Trace);
        let gpu = &data.gpu;

        Ok(RunProfileView {
            worker: self.worker.clone(),
            has_runtime: data.has_runtime,
            has_kernel: data.has_kernel,
            has_communication: data.has_communication,
            has_memcpy_or_memset: data.has_memcpy_or_memset,
            views,
            overview,
            operation_pie_by_name,
            operation_table_by_name,
            operation_stack_by_name,
            operation_pie_by_name_input,
            operation_table_by_name_input,
            operation_stack_by_name_input,
            kernel_op_table,
            kernel_pie,
            kernel_table,
            trace_file_path: data.trace_file_path.clone(),
            gpu_util_buckets: non_empty(&gpu.gpu_util_buckets, |m| m.is_empty()),
            approximated_sm_efficiency_ranges: non_empty(
                &gpu.approximated_sm_efficiency_ranges,
                |m| m.is_empty(),
            ),
            gpu_ids: non_empty(&gpu.gpu_ids, |v| v.is_empty()),
            gpu_utilization: non_empty(&gpu.gpu_utilization, |m| m.is_empty()),
            sm_efficiency: non_empty(&gpu.sm_efficiency, |m| m.is_empty()),
            occupancy: non_empty(&gpu.occupancy, |m| m.is_empty()),
        })
    }
}

fn non_empty<T: Clone>(value: &T, is_empty: impl Fn(&T) -> bool) -> Option<T> {
    if is_empty(value) {
        None
    } else {
        Some(value.clone())
    }
}

fn part_tooltip(step: &str, costs: &CostBreakdown, role: ProfileRole) -> String {
    let total = costs.total();
    let part = costs.get(role);
    format!(
        "<div class=\"visualization-tooltip\" style=\"white-space: nowrap;\">\
         Step {}<br>Total: {}us<br><b>{}: {}us</b><br>Percentage: {}%</div>",
        step,
        round(total),
        role.label(),
        round(part),
        percentage(part, total)
    )
}

fn recommendations_html(recommendations: &[String]) -> String {
    if recommendations.is_empty() {
        return "<ul><li>N/A</li></ul>".to_string();
    }
    format!(
        "<ul>{}</ul>",
        recommendations.iter().map(|r| format!("<li>{}</li>", r)).join("")
    )
}

fn op_pie(ops: &[OperatorAgg], which: OpDuration, title: &str) -> Option<PieDataset> {
    let rows = rank_positive(ops, |op| op.duration(which))
        .into_iter()
        .map(|(op, v)| (op.name.clone(), round(v)))
        .collect();
    PieDataset::new(Some(title), rows)
}
