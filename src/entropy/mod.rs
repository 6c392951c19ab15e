//! Running-window entropy engine.
//!
//! This module turns a byte sequence into local entropy signals:
//!
//! - [`core`]: byte histogram and the Shannon formula over it
//! - [`tracker`]: a histogram that slides one byte at a time
//! - [`running`]: entropy at every window position, and the per-window-size
//!   result set
//! - [`resample`]: fixed-length resampling for cross-sample comparison
//! - [`stats`]: summaries of entropy sequences
//!
//! # Example
//!
//! ```
//! use runent::entropy::{EntropyResultSet, RunningRequest};
//!
//! let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
//! let mut results = EntropyResultSet::new();
//! let seq = results
//!     .compute_running_entropy(&data, &RunningRequest::new(256))
//!     .unwrap();
//! assert_eq!(seq.len(), 4096 - 256 + 1);
//! let vector = seq.resample(512).unwrap();
//! assert_eq!(vector.len(), 512);
//! ```

pub mod core;
pub mod resample;
pub mod running;
pub mod stats;
pub mod tracker;

pub use self::core::{entropy_of_slice, shannon_entropy, Histogram, MAX_ENTROPY_BITS};
pub use self::resample::{resample, sample_positions};
pub use self::running::{
    running_entropy, whole_sequence_entropy, EntropyResultSet, EntropySequence, RunningRequest,
};
pub use self::stats::{calculate_median, Stats};
pub use self::tracker::HistogramTracker;
