//! profview: dashboard view models from aggregated training-run profiles.

/// Numeric helpers: rounding, ranking, overlap and wait decomposition, step timelines
pub mod analysis;

/// Generator configuration: divisor and missing-step policies
pub mod config;

/// Worker environment: device properties and worker identifiers
pub mod environment;

/// Error types for generation and import
pub mod error;

/// View generators: single run and distributed run
pub mod generator;

/// Importers for already-aggregated statistics, currently JSON only
pub mod input;

/// Input data model handed over by the aggregation collaborator
pub mod model;

/// Output view models consumed by the dashboard
pub mod view;

/// Public API: Python
#[cfg(feature = "python")]
pub mod api;

pub use config::{DivisorPolicy, GeneratorConfig, MissingStepPolicy};
pub use error::{GenerateError, ImportError, Stage};
pub use generator::distributed::DistributedRunGenerator;
pub use generator::run::RunGenerator;
pub use generator::Generate;
pub use model::worker::{DistributedInputs, WorkerProfileData};
pub use view::distributed::DistributedRunProfileView;
pub use view::run::RunProfileView;
