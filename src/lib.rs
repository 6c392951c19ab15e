//! Running-window entropy for binary samples.
//!
//! Computes local Shannon entropy at every position of a sliding byte window,
//! keeps results per window size, and resamples them to fixed-length vectors
//! for comparison across samples of different sizes.

pub mod batch;
pub mod config;
pub mod entropy;
pub mod error;
pub mod features;
pub mod io;
pub mod logging;
pub mod sample;
pub mod timeout;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use crate::entropy::{
    resample, running_entropy, whole_sequence_entropy, EntropyResultSet, EntropySequence,
    RunningRequest,
};
pub use crate::error::{EntropyError, Result};

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pyo3::pymodule]
fn runent(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    python_bindings::register_python_bindings(m)
}
