//! Python bindings for the entropy engine.
//!
//! Mirrors the Rust entry points with Python defaults: normalized values,
//! whole-sequence ranges, and `IndexError` for out-of-range requests.

use crate::entropy::{resample, running_entropy, whole_sequence_entropy, RunningRequest};
use pyo3::prelude::*;

/// Running-window entropy of `data`.
#[pyfunction]
#[pyo3(name = "running_entropy")]
#[pyo3(signature = (data, window_size=256, normalize=true, offset=0, length=None))]
pub fn running_entropy_py(
    data: &[u8],
    window_size: usize,
    normalize: bool,
    offset: usize,
    length: Option<usize>,
) -> PyResult<Vec<f64>> {
    let mut request = RunningRequest::new(window_size)
        .normalize(normalize)
        .offset(offset);
    request.length = length;
    Ok(running_entropy(data, &request)?.values)
}

/// Entropy of the whole buffer.
#[pyfunction]
#[pyo3(name = "entropy")]
#[pyo3(signature = (data, normalize=true))]
pub fn entropy_py(data: &[u8], normalize: bool) -> PyResult<f64> {
    Ok(whole_sequence_entropy(data, normalize)?)
}

/// Resample an entropy sequence to `number_of_points` values.
#[pyfunction]
#[pyo3(name = "resample")]
#[pyo3(signature = (values, number_of_points=512))]
pub fn resample_py(values: Vec<f64>, number_of_points: usize) -> PyResult<Vec<f64>> {
    Ok(resample(&values, number_of_points)?)
}

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(running_entropy_py, m)?)?;
    m.add_function(wrap_pyfunction!(entropy_py, m)?)?;
    m.add_function(wrap_pyfunction!(resample_py, m)?)?;
    Ok(())
}
