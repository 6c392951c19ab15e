//! Statistical summaries of entropy sequences.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Statistical summary of entropy values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Stats {
    /// Computes statistical summary from entropy values.
    ///
    /// Returns None if the input is empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let len = values.len() as f64;
        let mean = values.iter().sum::<f64>() / len;

        let variance: f64 = values
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / len;

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Stats {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            median: calculate_median(values),
        })
    }
}

/// Calculates the median of a slice of values.
///
/// Note: This function sorts a copy of the input.
pub fn calculate_median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
