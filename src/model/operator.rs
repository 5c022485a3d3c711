use serde::{Deserialize, Serialize};

/// Separator between name and input shape in a shape-grouped operator identity.
pub const SHAPE_KEY_SEPARATOR: &str = "###";

/// Durations of one operator (or one operator at one input shape, or one
/// operator at one call stack), accumulated over the whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorAgg {
    pub name: String,
    pub input_shape: Option<String>,
    pub calls: u64,
    pub host_duration: f64,
    pub device_duration: f64,
    pub self_host_duration: f64,
    pub self_device_duration: f64,
    pub call_stacks: Vec<String>,
}

/// Which of the four operator durations to look at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OpDuration {
    DeviceTotal,
    DeviceSelf,
    HostTotal,
    HostSelf,
}

impl OperatorAgg {
    pub fn duration(&self, which: OpDuration) -> f64 {
        match which {
            OpDuration::DeviceTotal => self.device_duration,
            OpDuration::DeviceSelf => self.self_device_duration,
            OpDuration::HostTotal => self.host_duration,
            OpDuration::HostSelf => self.self_host_duration,
        }
    }

    /// Key into the call-stack index: the name, or `name###shape` when
    /// operators are grouped by input shape.
    pub fn identity(&self, group_by_input_shape: bool) -> String {
        if group_by_input_shape {
            format!(
                "{}{}{}",
                self.name,
                SHAPE_KEY_SEPARATOR,
                self.input_shape.as_deref().unwrap_or_default()
            )
        } else {
            self.name.clone()
        }
    }

    /// First recorded call stack. Reading it leaves the aggregate untouched.
    pub fn call_stack(&self) -> Option<&str> {
        self.call_stacks.first().map(String::as_str)
    }
}
