//! Running-window entropy over a byte sequence.
//!
//! One entropy value is produced for every window position in the selected
//! sub-range, so a range of `length` bytes and a window of `w` bytes gives
//! `length - w + 1` values. The histogram is updated incrementally, keeping
//! the whole computation linear in the range length whatever the window size.

use crate::entropy::resample::resample;
use crate::entropy::stats::Stats;
use crate::entropy::tracker::HistogramTracker;
use crate::error::{EntropyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Parameters of one running-entropy computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningRequest {
    /// Bytes per entropy sample.
    pub window_size: usize,
    /// Divide by 8 bits so values lie in `[0, 1]`.
    pub normalize: bool,
    /// Start of the sub-range within the sequence.
    pub offset: usize,
    /// Length of the sub-range; `None` runs to the end of the sequence.
    pub length: Option<usize>,
}

impl RunningRequest {
    /// A normalized request over the whole sequence.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            normalize: true,
            offset: 0,
            length: None,
        }
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Checks the request against a sequence of `len` bytes and returns the
    /// effective sub-range length.
    pub fn resolve(&self, len: usize) -> Result<usize> {
        let window_size = self.window_size;
        if window_size == 0 {
            return Err(EntropyError::InvalidArgument(
                "window size must be at least 1".to_string(),
            ));
        }
        let fits = self
            .offset
            .checked_add(window_size)
            .is_some_and(|end| end <= len);
        if !fits {
            return Err(EntropyError::InvalidOffset {
                offset: self.offset,
                window_size,
                len,
            });
        }
        match self.length {
            None => Ok(len - self.offset),
            Some(length) => {
                let in_bounds = self
                    .offset
                    .checked_add(length)
                    .is_some_and(|end| end <= len);
                if !in_bounds || length < window_size {
                    return Err(EntropyError::InvalidLength {
                        offset: self.offset,
                        length,
                        window_size,
                        len,
                    });
                }
                Ok(length)
            }
        }
    }
}

/// Entropy values for every window position of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropySequence {
    pub window_size: usize,
    pub offset: usize,
    pub length: usize,
    pub normalized: bool,
    pub values: Vec<f64>,
}

impl EntropySequence {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn stats(&self) -> Option<Stats> {
        Stats::from_values(&self.values)
    }

    /// Resamples the values to `number_of_points` evenly spaced points.
    pub fn resample(&self, number_of_points: usize) -> Result<Vec<f64>> {
        resample(&self.values, number_of_points)
    }
}

/// Computes running entropy for `request` without storing it anywhere.
pub fn running_entropy(data: &[u8], request: &RunningRequest) -> Result<EntropySequence> {
    let length = request.resolve(data.len())?;
    let range = &data[request.offset..request.offset + length];

    let mut tracker = HistogramTracker::initialize(range, 0, request.window_size)?;
    let mut values = Vec::with_capacity(length - request.window_size + 1);
    values.push(tracker.entropy(request.normalize));
    while tracker.slide() {
        values.push(tracker.entropy(request.normalize));
    }

    debug!(
        window_size = request.window_size,
        offset = request.offset,
        length,
        values = values.len(),
        normalized = request.normalize,
        "Computed running entropy"
    );

    Ok(EntropySequence {
        window_size: request.window_size,
        offset: request.offset,
        length,
        normalized: request.normalize,
        values,
    })
}

/// Entropy of the entire sequence as a single value.
///
/// Equivalent to a running computation whose window is the whole sequence.
/// An empty sequence has no window and is rejected.
pub fn whole_sequence_entropy(data: &[u8], normalize: bool) -> Result<f64> {
    if data.is_empty() {
        return Err(EntropyError::InvalidArgument(
            "cannot compute entropy of an empty sequence".to_string(),
        ));
    }
    let sequence = running_entropy(data, &RunningRequest::new(data.len()).normalize(normalize))?;
    Ok(sequence.values[0])
}

/// Running-entropy results for one byte sequence, keyed by window size.
///
/// The set is an ordinary owned value: callers keep one per sequence and
/// nothing is shared between sets. Recomputing a window size replaces only
/// that entry, and a failed computation leaves the set unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntropyResultSet {
    entries: BTreeMap<usize, EntropySequence>,
}

impl EntropyResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes running entropy over `data` and stores it under the window size.
    pub fn compute_running_entropy(
        &mut self,
        data: &[u8],
        request: &RunningRequest,
    ) -> Result<&EntropySequence> {
        let sequence = running_entropy(data, request)?;
        self.entries.insert(request.window_size, sequence);
        self.get_result(request.window_size)
    }

    /// The stored sequence for `window_size`.
    pub fn get_result(&self, window_size: usize) -> Result<&EntropySequence> {
        self.entries
            .get(&window_size)
            .ok_or(EntropyError::NotFound { window_size })
    }

    /// Window sizes with stored results, ascending.
    pub fn window_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &EntropySequence)> {
        self.entries.iter().map(|(&w, s)| (w, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
