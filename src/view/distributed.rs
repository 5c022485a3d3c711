use indexmap::IndexMap;
use serde::Serialize;

use crate::analysis::timeline::Timeline;
use crate::view::{Diagnostic, Metadata, Table, View};

/// Everything the dashboard shows for a distributed job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributedRunProfileView {
    pub views: Vec<View>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu_info: Option<DeviceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_to_overlap: Option<OverlapGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_to_wait: Option<WaitGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comm_ops: Option<CommOpsTables>,
    /// non-fatal input problems met while generating
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl DistributedRunProfileView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Properties of one GPU. Only known properties are present.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct GpuInfo {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Memory", skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(rename = "Compute Capability", skip_serializing_if = "Option::is_none")]
    pub compute_capability: Option<String>,
}

/// node -> `Process <id>` -> `GPU<index>` -> properties
pub type DeviceInventory = IndexMap<String, IndexMap<String, IndexMap<String, GpuInfo>>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub metadata: Metadata,
    pub data: DeviceInventory,
}

/// `[computation only, overlapping, communication only, other]` per step and worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapGraph {
    pub metadata: Metadata,
    pub data: Timeline<4>,
}

/// `[waiting, transferring]` per step and worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitGraph {
    pub metadata: Metadata,
    pub data: Timeline<2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommOpsTables {
    pub metadata: Metadata,
    /// worker -> table
    pub data: IndexMap<String, Table>,
}
