//! Incremental histogram over a sliding window.

use crate::entropy::core::Histogram;
use crate::error::{EntropyError, Result};
use tracing::trace;

/// Tracks the byte histogram of a window as it moves over borrowed data.
///
/// Building the first window costs `O(window_size)`; every [`slide`](Self::slide)
/// after that touches exactly two counts.
#[derive(Debug, Clone)]
pub struct HistogramTracker<'a> {
    data: &'a [u8],
    start: usize,
    window_size: usize,
    histogram: Histogram,
}

impl<'a> HistogramTracker<'a> {
    /// Counts the window `data[start..start + window_size]`.
    pub fn initialize(data: &'a [u8], start: usize, window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(EntropyError::InvalidArgument(
                "window size must be at least 1".to_string(),
            ));
        }
        let end = match start.checked_add(window_size) {
            Some(end) if end <= data.len() => end,
            _ => {
                return Err(EntropyError::InvalidOffset {
                    offset: start,
                    window_size,
                    len: data.len(),
                })
            }
        };

        trace!(start, window_size, len = data.len(), "Initializing histogram");

        Ok(Self {
            data,
            start,
            window_size,
            histogram: Histogram::from_bytes(&data[start..end]),
        })
    }

    /// Moves the window one byte forward.
    ///
    /// Returns `false`, leaving the tracker untouched, when the window already
    /// ends at the end of the data.
    #[inline]
    pub fn slide(&mut self) -> bool {
        let incoming_at = self.start + self.window_size;
        if incoming_at >= self.data.len() {
            return false;
        }
        let outgoing = self.data[self.start];
        let incoming = self.data[incoming_at];
        if outgoing != incoming {
            self.histogram.remove(outgoing);
            self.histogram.add(incoming);
        }
        self.start += 1;
        true
    }

    /// Entropy of the current window.
    #[inline]
    pub fn entropy(&self, normalize: bool) -> f64 {
        crate::entropy::core::shannon_entropy(&self.histogram, self.window_size, normalize)
    }

    /// Offset of the current window within the tracked data.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// The bytes currently covered by the window.
    pub fn window(&self) -> &'a [u8] {
        &self.data[self.start..self.start + self.window_size]
    }
}
