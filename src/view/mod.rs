use std::fmt;

use serde::Serialize;

/// Distributed run view model
pub mod distributed;
/// Single run view model
pub mod run;

/// Dashboard tabs a view model can populate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum View {
    Overview,
    Operator,
    Kernel,
    Trace,
    Distributed,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ColumnProps {
    pub html: String,
}

/// Column descriptor. Tooltip columns carry no name, a `tooltip` role and
/// HTML cells.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub kind: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<ColumnProps>,
}

impl Column {
    pub fn string(name: &str) -> Column {
        Column {
            kind: ColumnType::String,
            name: Some(name.to_string()),
            role: None,
            p: None,
        }
    }

    pub fn number(name: &str) -> Column {
        Column {
            kind: ColumnType::Number,
            name: Some(name.to_string()),
            role: None,
            p: None,
        }
    }

    pub fn tooltip() -> Column {
        Column {
            kind: ColumnType::String,
            name: None,
            role: Some("tooltip".to_string()),
            p: Some(ColumnProps {
                html: "true".to_string(),
            }),
        }
    }
}

/// One table cell, serialized as a bare JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
}

impl Cell {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            Cell::Int(_) => None,
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Cell {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Cell {
        Cell::Int(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

/// Table wrapped the way the dashboard's table widgets expect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePayload {
    pub data: Table,
}

/// `[name, value]` rows for a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<(String, i64)>,
}

impl PieDataset {
    /// A dataset with the standard name/value columns, or `None` when there
    /// is nothing to plot.
    pub fn new(title: Option<&str>, rows: Vec<(String, i64)>) -> Option<PieDataset> {
        if rows.is_empty() {
            return None;
        }
        Some(PieDataset {
            title: title.map(str::to_string),
            columns: vec![Column::string("name"), Column::number("value")],
            rows,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Metadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legends: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Metadata {
    pub fn titled(title: &str) -> Metadata {
        Metadata {
            title: title.to_string(),
            legends: None,
            units: None,
        }
    }

    pub fn chart(title: &str, legends: &[&str], units: &str) -> Metadata {
        Metadata {
            title: title.to_string(),
            legends: Some(legends.iter().map(|l| l.to_string()).collect()),
            units: Some(units.to_string()),
        }
    }
}

/// Something odd about the input that did not stop generation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The worker identifier is not `<node>/<process-id>`; it was filed under
    /// a node named after the whole identifier and a synthetic process id.
    MalformedWorkerId { worker: String, process_id: usize },
    /// A used device index has no properties entry; the device was skipped.
    DeviceIndexOutOfRange {
        worker: String,
        device: usize,
        available: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedWorkerId { worker, process_id } => write!(
                f,
                "cannot parse node name from worker name {}, using process {}",
                worker, process_id
            ),
            Diagnostic::DeviceIndexOutOfRange {
                worker,
                device,
                available,
            } => write!(
                f,
                "worker {} uses device {} but only {} device properties are known",
                worker, device, available
            ),
        }
    }
}
