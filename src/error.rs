//! Error types for the running-window entropy engine.
//!
//! All validation failures are surfaced synchronously at the offending call;
//! nothing is clamped and nothing is retried.

use crate::io::error::IoError;
use thiserror::Error;

/// Main error type for entropy operations.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The window does not fit at the requested offset.
    #[error(
        "Invalid offset for window size: offset {offset} with window {window_size} over {len} bytes"
    )]
    InvalidOffset {
        offset: usize,
        window_size: usize,
        len: usize,
    },

    /// The requested sub-range runs past the end of the data, or cannot hold one window.
    #[error(
        "Invalid length for offset: length {length} at offset {offset} (window {window_size}) over {len} bytes"
    )]
    InvalidLength {
        offset: usize,
        length: usize,
        window_size: usize,
        len: usize,
    },

    /// Non-positive window size or resample point count, or an empty sequence.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No running entropy has been stored for this window size.
    #[error("No running entropy computed for window size {window_size}")]
    NotFound { window_size: usize },

    /// Batch-level per-sample deadline exceeded
    #[error("Entropy computation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Byte source errors
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EntropyError {
    /// True for errors describing an offset/length/window outside the data bounds.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            EntropyError::InvalidOffset { .. } | EntropyError::InvalidLength { .. }
        )
    }
}

/// Result type alias for entropy operations
pub type Result<T> = std::result::Result<T, EntropyError>;

/// Convert entropy errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<EntropyError> for pyo3::PyErr {
    fn from(err: EntropyError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyIndexError, PyKeyError, PyTimeoutError, PyValueError};

        match err {
            e @ (EntropyError::InvalidOffset { .. } | EntropyError::InvalidLength { .. }) => {
                PyIndexError::new_err(e.to_string())
            }
            EntropyError::InvalidArgument(msg) | EntropyError::Config(msg) => {
                PyValueError::new_err(msg)
            }
            EntropyError::NotFound { window_size } => PyKeyError::new_err(window_size),
            EntropyError::Timeout { seconds } => {
                PyTimeoutError::new_err(format!("Operation timed out after {}s", seconds))
            }
            EntropyError::Io(e) => PyIOError::new_err(e.to_string()),
        }
    }
}
