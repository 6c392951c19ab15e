//! Fixed-length feature vectors from running entropy.
//!
//! A feature vector is the running entropy of one window size resampled to a
//! fixed number of points, so samples of any size line up column for column.

use crate::batch::SampleEntropy;
use crate::entropy::{resample, Stats};
use crate::error::{EntropyError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How feature vectors are derived from stored results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Points per resampled vector.
    pub datapoints: usize,
    /// Window size whose running entropy is resampled.
    pub window_size: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            datapoints: 512,
            window_size: 256,
        }
    }
}

/// One long-format row: sample, position in the vector, value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub id: String,
    pub offset: usize,
    pub value: f64,
}

/// Resampled running entropy for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub id: String,
    pub window_size: usize,
    pub values: Vec<f64>,
    /// Summary of the source sequence before resampling.
    pub stats: Stats,
}

impl FeatureVector {
    /// Builds the vector for `cfg.window_size` from a processed sample.
    pub fn from_sample(entropy: &SampleEntropy, cfg: &FeatureConfig) -> Result<Self> {
        let sequence = entropy.results.get_result(cfg.window_size)?;
        let stats = sequence.stats().ok_or_else(|| {
            EntropyError::InvalidArgument("cannot summarize an empty sequence".to_string())
        })?;
        Ok(Self {
            id: entropy.id.clone(),
            window_size: cfg.window_size,
            values: resample(sequence.as_slice(), cfg.datapoints)?,
            stats,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Long-format rows, one per point.
    pub fn rows(&self) -> impl Iterator<Item = FeatureRow> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(offset, &value)| FeatureRow {
                id: self.id.clone(),
                offset,
                value,
            })
    }
}

/// Feature vectors for every processed sample that has the configured window size.
///
/// Samples without that window size are left out and returned by id.
pub fn collect_features(
    samples: &[SampleEntropy],
    cfg: &FeatureConfig,
) -> Result<(Vec<FeatureVector>, Vec<String>)> {
    let mut vectors = Vec::with_capacity(samples.len());
    let mut missing = Vec::new();
    for sample in samples {
        match FeatureVector::from_sample(sample, cfg) {
            Ok(v) => vectors.push(v),
            Err(EntropyError::NotFound { window_size }) => {
                warn!(id = %sample.id, window_size, "Window size not computed for sample");
                missing.push(sample.id.clone());
            }
            Err(e) => return Err(e),
        }
    }
    Ok((vectors, missing))
}
