/// Cross-worker view: devices, overlap, waiting, communication operators
pub mod distributed;
/// Single worker view: overview, operators, kernels
pub mod run;

use crate::error::GenerateError;

/// A one-shot transformation from aggregated statistics to a view model.
/// Generators borrow their input and never modify it.
pub trait Generate {
    type Output;

    fn generate(&self) -> Result<Self::Output, GenerateError>;
}
