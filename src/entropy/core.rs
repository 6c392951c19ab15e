//! Core entropy calculation primitives.
//!
//! A byte [`Histogram`] and the Shannon formula evaluated over it. Everything
//! above this layer (sliding, result storage, resampling) is built on these
//! two pieces.

/// Maximum entropy of a byte alphabet in bits, `log2(256)`.
pub const MAX_ENTROPY_BITS: f64 = 8.0;

/// Byte frequency counts for one window of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; 256],
    total: usize,
}

impl Histogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hist = Self::new();
        for &byte in data {
            hist.add(byte);
        }
        hist
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Removes a byte from the histogram.
    ///
    /// The caller guarantees the byte is present; the tracker only ever
    /// removes the byte it previously added at the window start.
    #[inline]
    pub fn remove(&mut self, byte: u8) {
        debug_assert!(self.counts[byte as usize] > 0, "removing absent byte {byte:#04x}");
        let count = &mut self.counts[byte as usize];
        *count = count.saturating_sub(1);
        self.total = self.total.saturating_sub(1);
    }

    /// Occurrences of `byte` in the window.
    #[inline]
    pub fn count(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    pub fn counts(&self) -> &[usize; 256] {
        &self.counts
    }

    /// Returns the total number of bytes in the histogram.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Shannon entropy of the current counts over their own total.
    #[inline]
    pub fn entropy(&self, normalize: bool) -> f64 {
        shannon_entropy(self, self.total, normalize)
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates `H = -sum(p_i * log2(p_i))` with `p_i = count_i / window_size`.
///
/// Zero counts are skipped, never evaluated. With `normalize` the result is
/// divided by [`MAX_ENTROPY_BITS`] and lies in `[0, 1]` for any window size.
/// A zero `window_size` yields 0.0.
#[inline]
pub fn shannon_entropy(histogram: &Histogram, window_size: usize, normalize: bool) -> f64 {
    if window_size == 0 {
        return 0.0;
    }

    let len = window_size as f64;
    let mut entropy = 0.0;

    for &count in histogram.counts.iter() {
        if count == 0 {
            continue;
        }
        let p = (count as f64) / len;
        entropy -= p * p.log2();
    }

    if normalize {
        entropy / MAX_ENTROPY_BITS
    } else {
        entropy
    }
}

/// Entropy of a byte slice computed from scratch.
///
/// This is the brute-force reference the incremental engine is checked
/// against; it is also the cheapest way to get the entropy of one buffer.
#[inline]
pub fn entropy_of_slice(data: &[u8], normalize: bool) -> f64 {
    shannon_entropy(&Histogram::from_bytes(data), data.len(), normalize)
}
