use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Properties of one CUDA device as reported in the trace. Any of them may
/// be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProps {
    pub name: Option<String>,
    #[serde(rename = "totalGlobalMem")]
    pub total_global_mem: Option<u64>,
    #[serde(rename = "computeMajor")]
    pub compute_major: Option<u32>,
    #[serde(rename = "computeMinor")]
    pub compute_minor: Option<u32>,
}

impl DeviceProps {
    /// `"<major>.<minor>"`, only when both parts are known.
    pub fn compute_capability(&self) -> Option<String> {
        match (self.compute_major, self.compute_minor) {
            (Some(major), Some(minor)) => Some(format!("{}.{}", major, minor)),
            _ => None,
        }
    }

    /// Device name, treating an empty string as unknown.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.display_name().is_none()
            && self.total_global_mem.is_none()
            && self.compute_capability().is_none()
    }
}

/// Node and process a worker ran on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NodeProcess {
    pub node: String,
    pub process_id: String,
}

fn node_process_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)/(\d+)$").expect("node/process pattern is valid"))
}

/// Split a `<node>/<process-id>` worker identifier.
pub fn parse_worker(worker: &str) -> Option<NodeProcess> {
    let caps = node_process_pattern().captures(worker)?;
    Some(NodeProcess {
        node: caps[1].to_string(),
        process_id: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_worker() {
        let np = parse_worker("nodeA/0").unwrap();
        assert_eq!(np.node, "nodeA");
        assert_eq!(np.process_id, "0");

        let np = parse_worker("host.example/rack/1234").unwrap();
        assert_eq!(np.node, "host.example/rack");
        assert_eq!(np.process_id, "1234");

        assert_eq!(parse_worker("bad-name"), None);
        assert_eq!(parse_worker("nodeA/"), None);
        assert_eq!(parse_worker("/3"), None);
        assert_eq!(parse_worker("nodeA/x1"), None);
    }

    #[test]
    fn test_compute_capability() {
        let p = DeviceProps {
            compute_major: Some(8),
            compute_minor: Some(0),
            ..Default::default()
        };
        assert_eq!(p.compute_capability().as_deref(), Some("8.0"));
        assert!(!p.is_empty());

        let p = DeviceProps {
            compute_major: Some(8),
            ..Default::default()
        };
        assert_eq!(p.compute_capability(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_device_props_json_keys() {
        let p: DeviceProps = serde_json::from_str(
            r#"{"name": "Tesla V100", "totalGlobalMem": 16945512448, "computeMajor": 7, "computeMinor": 0}"#,
        )
        .unwrap();
        assert_eq!(p.name.as_deref(), Some("Tesla V100"));
        assert_eq!(p.total_global_mem, Some(16945512448));
        assert_eq!(p.compute_capability().as_deref(), Some("7.0"));
    }
}
