use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::analyze_calendar::analyze_calendar_json as analyze_json_core;
use crate::color::bucket_for;

// ──────────────────────────────────────────────────────────────────────────────
// PYFUNCTIONS (JSON inn → JSON ut, feil som ValueError)
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(signature = (records_json, range_json, cfg_json=None))]
fn analyze_calendar_json(
    records_json: &str,
    range_json: &str,
    cfg_json: Option<&str>,
) -> PyResult<String> {
    analyze_json_core(records_json, range_json, cfg_json)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn color_bucket(intensity: i64) -> PyResult<String> {
    bucket_for(intensity)
        .map(|b| b.label().to_string())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn trainingcal_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_calendar_json, m)?)?;
    m.add_function(wrap_pyfunction!(color_bucket, m)?)?;
    Ok(())
}
