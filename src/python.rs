use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::config::PipelineConfig;
use crate::constants::{CATALOG_VERSION, MIN_SEASON};
use crate::error::FeatureError;
use crate::pipeline::FeatureBuilder;
use crate::team::shared_catalog;
use crate::weather;

fn to_py_err(e: FeatureError) -> PyErr {
    match e {
        FeatureError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Build the feature table from one CSV into another.
///
/// Returns the number of rows written.
#[pyfunction]
#[pyo3(signature = (input, output, config = None))]
fn build_features_csv(input: &str, output: &str, config: Option<&str>) -> PyResult<usize> {
    let config = match config {
        Some(path) => PipelineConfig::load(path).map_err(to_py_err)?,
        None => PipelineConfig::default(),
    };
    let builder = FeatureBuilder::new(config).map_err(to_py_err)?;
    let report = crate::build_features_csv(input, output, &builder).map_err(to_py_err)?;
    Ok(report.summary.output_rows)
}

/// Model index for a canonical team name, or -1.
#[pyfunction]
fn team_index(name: &str) -> i32 {
    shared_catalog().index_of(name)
}

/// Canonical name for a favorite code; `None` resolves to "Unknown".
#[pyfunction]
#[pyo3(signature = (code = None))]
fn resolve_favorite(code: Option<&str>) -> String {
    shared_catalog().resolve_favorite(code).to_string()
}

#[pyfunction]
#[pyo3(signature = (temperature = None, wind = None, humidity = None))]
fn classify_weather(temperature: Option<i32>, wind: Option<i32>, humidity: Option<i32>) -> u8 {
    weather::classify(temperature, wind, humidity).code()
}

/// Python module definition
#[pymodule]
fn nfl_features(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_features_csv, m)?)?;
    m.add_function(wrap_pyfunction!(team_index, m)?)?;
    m.add_function(wrap_pyfunction!(resolve_favorite, m)?)?;
    m.add_function(wrap_pyfunction!(classify_weather, m)?)?;

    m.add("CATALOG_VERSION", CATALOG_VERSION)?;
    m.add("MIN_SEASON", MIN_SEASON)?;

    Ok(())
}
