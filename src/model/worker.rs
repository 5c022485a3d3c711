use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::environment::device::DeviceProps;
use crate::model::comm::{CommOpStats, CommOverlapCosts, StepCommStats};
use crate::model::cost::CostBreakdown;
use crate::model::gpu::GpuMetrics;
use crate::model::kernel::{KernelAggByNameOp, KernelStat};
use crate::model::operator::OperatorAgg;

/// Operator identity -> one aggregate per distinct call stack.
pub type StackIndex = IndexMap<String, Vec<OperatorAgg>>;

/// Aggregated statistics of one worker. Built once by the aggregation
/// collaborator and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerProfileData {
    pub has_runtime: bool,
    pub has_kernel: bool,
    pub has_communication: bool,
    pub has_memcpy_or_memset: bool,

    pub steps_names: Vec<String>,
    pub steps_costs: Vec<CostBreakdown>,
    pub avg_costs: CostBreakdown,

    pub op_list_groupby_name: Vec<OperatorAgg>,
    pub op_list_groupby_name_input: Vec<OperatorAgg>,
    pub stack_lists_group_by_name: StackIndex,
    pub stack_lists_group_by_name_input: StackIndex,

    pub kernel_list_groupby_name_op: Vec<KernelAggByNameOp>,
    pub kernel_stat: Vec<KernelStat>,

    pub recommendations: Vec<String>,
    pub trace_file_path: Option<String>,
    pub gpu: GpuMetrics,

    pub device_props: Vec<DeviceProps>,
    pub used_devices: Vec<usize>,

    /// aligned with `steps_names`
    pub comm_overlap_costs: Vec<CommOverlapCosts>,
    pub step_comm_stats: IndexMap<String, StepCommStats>,
    pub total_comm_stats: IndexMap<String, CommOpStats>,
}

impl WorkerProfileData {
    pub fn show_gpu_overview(&self) -> bool {
        self.has_runtime || self.has_kernel || self.has_memcpy_or_memset
    }

    pub fn show_gpu_operators(&self) -> bool {
        self.has_kernel || self.has_memcpy_or_memset
    }

    /// Group operators by input shape or by name alone.
    pub fn operators(&self, group_by_input_shape: bool) -> &[OperatorAgg] {
        if group_by_input_shape {
            &self.op_list_groupby_name_input
        } else {
            &self.op_list_groupby_name
        }
    }

    pub fn stacks(&self, group_by_input_shape: bool) -> &StackIndex {
        if group_by_input_shape {
            &self.stack_lists_group_by_name_input
        } else {
            &self.stack_lists_group_by_name
        }
    }
}

/// Worker identifier -> statistics, in the order workers were discovered.
pub type DistributedInputs = IndexMap<String, WorkerProfileData>;
