/// Import of already-aggregated statistics serialized as JSON
pub mod json;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::ImportError;
use crate::model::worker::{DistributedInputs, WorkerProfileData};

/// Source of aggregated statistics for the generators.
pub trait ProfileImporter {
    fn import_worker_from_reader<R: Read>(&self, reader: R) -> Result<WorkerProfileData, ImportError>;

    fn import_distributed_from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<DistributedInputs, ImportError>;

    fn import_worker_from(&self, path: &Path) -> Result<WorkerProfileData, ImportError> {
        let file = File::open(path)?;
        self.import_worker_from_reader(BufReader::new(file))
    }

    fn import_distributed_from(&self, path: &Path) -> Result<DistributedInputs, ImportError> {
        let file = File::open(path)?;
        self.import_distributed_from_reader(BufReader::new(file))
    }
}
