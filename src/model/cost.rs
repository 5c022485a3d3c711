use serde::{Deserialize, Serialize};

/// Bucket of a step's wall time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ProfileRole {
    Kernel,
    Memcpy,
    Memset,
    Communication,
    Runtime,
    DataLoader,
    CpuOp,
    Other,
    Total,
}

impl ProfileRole {
    /// Buckets only meaningful when the worker ran GPU work.
    pub const GPU: [ProfileRole; 5] = [
        ProfileRole::Kernel,
        ProfileRole::Memcpy,
        ProfileRole::Memset,
        ProfileRole::Communication,
        ProfileRole::Runtime,
    ];

    /// Buckets shown for every worker.
    pub const HOST: [ProfileRole; 3] =
        [ProfileRole::DataLoader, ProfileRole::CpuOp, ProfileRole::Other];

    /// Label used in dashboard columns and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            ProfileRole::Kernel => "Kernel",
            ProfileRole::Memcpy => "Memcpy",
            ProfileRole::Memset => "Memset",
            ProfileRole::Communication => "Communication",
            ProfileRole::Runtime => "Runtime",
            ProfileRole::DataLoader => "DataLoader",
            ProfileRole::CpuOp => "CPU Exec",
            ProfileRole::Other => "Other",
            ProfileRole::Total => "Total",
        }
    }
}

/// Durations in microseconds, one per bucket. The total is derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostBreakdown {
    pub kernel: f64,
    pub memcpy: f64,
    pub memset: f64,
    pub communication: f64,
    pub runtime: f64,
    pub data_loader: f64,
    pub cpu_op: f64,
    pub other: f64,
}

impl CostBreakdown {
    pub fn get(&self, role: ProfileRole) -> f64 {
        match role {
            ProfileRole::Kernel => self.kernel,
            ProfileRole::Memcpy => self.memcpy,
            ProfileRole::Memset => self.memset,
            ProfileRole::Communication => self.communication,
            ProfileRole::Runtime => self.runtime,
            ProfileRole::DataLoader => self.data_loader,
            ProfileRole::CpuOp => self.cpu_op,
            ProfileRole::Other => self.other,
            ProfileRole::Total => self.total(),
        }
    }

    fn get_mut(&mut self, role: ProfileRole) -> Option<&mut f64> {
        match role {
            ProfileRole::Kernel => Some(&mut self.kernel),
            ProfileRole::Memcpy => Some(&mut self.memcpy),
            ProfileRole::Memset => Some(&mut self.memset),
            ProfileRole::Communication => Some(&mut self.communication),
            ProfileRole::Runtime => Some(&mut self.runtime),
            ProfileRole::DataLoader => Some(&mut self.data_loader),
            ProfileRole::CpuOp => Some(&mut self.cpu_op),
            ProfileRole::Other => Some(&mut self.other),
            ProfileRole::Total => None,
        }
    }

    pub fn total(&self) -> f64 {
        self.kernel
            + self.memcpy
            + self.memset
            + self.communication
            + self.runtime
            + self.data_loader
            + self.cpu_op
            + self.other
    }

    /// Element-wise mean of `steps`; the zero breakdown when `steps` is empty.
    pub fn mean_of(steps: &[CostBreakdown]) -> CostBreakdown {
        let mut avg = CostBreakdown::default();
        if steps.is_empty() {
            return avg;
        }
        let n = steps.len() as f64;
        for role in ProfileRole::GPU.iter().chain(ProfileRole::HOST.iter()) {
            if let Some(slot) = avg.get_mut(*role) {
                *slot = steps.iter().map(|s| s.get(*role)).sum::<f64>() / n;
            }
        }
        avg
    }
}
