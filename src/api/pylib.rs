use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::GeneratorConfig;
use crate::generator::distributed::DistributedRunGenerator;
use crate::generator::run::RunGenerator;
use crate::generator::Generate;
use crate::input::json::JsonImporter;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Run profile of one worker, as JSON.
#[pyfunction]
fn generate_run_profile(worker: &str, profile_json: &str) -> PyResult<String> {
    let data = JsonImporter.worker_from_str(profile_json).map_err(value_error)?;
    let view = RunGenerator::new(worker, &data)
        .generate()
        .map_err(value_error)?;
    view.to_json().map_err(value_error)
}

/// Distributed run profile of a job, as JSON. `config_json` follows the
/// serialized form of `GeneratorConfig`.
#[pyfunction]
#[pyo3(signature = (workers_json, config_json = None))]
fn generate_distributed_run_profile(
    workers_json: &str,
    config_json: Option<&str>,
) -> PyResult<String> {
    let workers = JsonImporter
        .distributed_from_str(workers_json)
        .map_err(value_error)?;
    let config: GeneratorConfig = match config_json {
        Some(c) => serde_json::from_str(c).map_err(value_error)?,
        None => GeneratorConfig::default(),
    };
    let view = DistributedRunGenerator::with_config(&workers, config)
        .generate()
        .map_err(value_error)?;
    view.to_json().map_err(value_error)
}

#[pymodule]
fn profview(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_run_profile, m)?)?;
    m.add_function(wrap_pyfunction!(generate_distributed_run_profile, m)?)?;
    Ok(())
}
