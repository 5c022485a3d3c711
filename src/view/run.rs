use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::view::{PieDataset, Table, TablePayload, View};

/// Everything the dashboard shows for one worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunProfileView {
    pub worker: String,
    pub has_runtime: bool,
    pub has_kernel: bool,
    pub has_communication: bool,
    pub has_memcpy_or_memset: bool,
    pub views: Vec<View>,

    pub overview: Overview,

    pub operation_pie_by_name: OperatorPies,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_table_by_name: Option<Vec<OperatorRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_stack_by_name: Option<IndexMap<String, Vec<OperatorRow>>>,
    pub operation_pie_by_name_input: OperatorPies,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_table_by_name_input: Option<Vec<OperatorRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_stack_by_name_input: Option<IndexMap<String, Vec<OperatorRow>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_op_table: Option<TablePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_pie: Option<KernelPie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_table: Option<TablePayload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_util_buckets: Option<BTreeMap<u32, Vec<(f64, f64)>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximated_sm_efficiency_ranges: Option<BTreeMap<u32, Vec<(f64, f64, f64)>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_utilization: Option<BTreeMap<u32, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm_efficiency: Option<BTreeMap<u32, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<BTreeMap<u32, f64>>,
}

impl RunProfileView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub steps: Table,
    pub performance: Vec<PerformanceNode>,
    /// HTML `<ul>` list
    pub recommendations: String,
}

/// Node of the average step time tree. `extra` is the percentage of the parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceNode {
    pub name: String,
    pub description: String,
    pub value: i64,
    pub extra: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PerformanceNode>>,
}

/// Operator pie charts, one per duration category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperatorPies {
    pub device_total_time: Option<PieDataset>,
    pub device_self_time: Option<PieDataset>,
    pub host_total_time: Option<PieDataset>,
    pub host_self_time: Option<PieDataset>,
}

/// One operator table row. Device durations are only set for workers with
/// device activity; exactly one of `has_call_stack` and `call_stack` is
/// meaningful depending on whether this is a drill-down table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperatorRow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_shape: Option<String>,
    pub calls: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_self_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_total_duration: Option<i64>,
    pub host_self_duration: i64,
    pub host_total_duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_call_stack: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_stack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelPie {
    pub total: PieDataset,
}
