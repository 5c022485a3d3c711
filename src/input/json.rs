use std::io::Read;

use tracing::debug;

use super::ProfileImporter;
use crate::error::ImportError;
use crate::model::worker::{DistributedInputs, WorkerProfileData};

/// Reads `WorkerProfileData` objects, or an object of them keyed by worker
/// identifier. Missing fields take their defaults; key order is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonImporter;

impl JsonImporter {
    pub fn worker_from_str(&self, s: &str) -> Result<WorkerProfileData, ImportError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn distributed_from_str(&self, s: &str) -> Result<DistributedInputs, ImportError> {
        let workers: DistributedInputs = serde_json::from_str(s)?;
        debug!(workers = workers.len(), "imported distributed profile");
        Ok(workers)
    }
}

impl ProfileImporter for JsonImporter {
    fn import_worker_from_reader<R: Read>(&self, reader: R) -> Result<WorkerProfileData, ImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn import_distributed_from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<DistributedInputs, ImportError> {
        let workers: DistributedInputs = serde_json::from_reader(reader)?;
        debug!(workers = workers.len(), "imported distributed profile");
        Ok(workers)
    }
}
