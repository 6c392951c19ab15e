//! Fixed-length resampling of entropy sequences.
//!
//! Samples of different sizes produce running-entropy sequences of different
//! lengths. Resampling maps each of them onto the same number of points so
//! they can be compared as equal-length feature vectors.

use crate::error::{EntropyError, Result};

/// Positions of `number_of_points` evenly spaced samples over `[0, len - 1]`.
///
/// A single point sits at 0. With `number_of_points == len` every position
/// is an exact integer.
pub fn sample_positions(len: usize, number_of_points: usize) -> Vec<f64> {
    if number_of_points == 0 || len == 0 {
        return Vec::new();
    }
    if number_of_points == 1 {
        return vec![0.0];
    }
    let span = (len - 1) as f64;
    let steps = (number_of_points - 1) as f64;
    (0..number_of_points)
        .map(|i| (i as f64) * span / steps)
        .collect()
}

/// Linearly interpolates `values` at `number_of_points` evenly spaced positions.
///
/// Positions that land on an integer return the original sample exactly.
pub fn resample(values: &[f64], number_of_points: usize) -> Result<Vec<f64>> {
    if number_of_points < 1 {
        return Err(EntropyError::InvalidArgument(
            "number of points must be at least 1".to_string(),
        ));
    }
    if values.is_empty() {
        return Err(EntropyError::InvalidArgument(
            "cannot resample an empty sequence".to_string(),
        ));
    }

    let last = values.len() - 1;
    let resampled = sample_positions(values.len(), number_of_points)
        .into_iter()
        .map(|x| {
            let lo = (x.floor() as usize).min(last);
            let frac = x - lo as f64;
            if frac <= 0.0 || lo == last {
                values[lo]
            } else {
                values[lo] + (values[lo + 1] - values[lo]) * frac
            }
        })
        .collect();
    Ok(resampled)
}
