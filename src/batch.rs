//! Batch running-entropy computation over many samples.
//!
//! Each sample gets its own [`EntropyResultSet`]; samples share nothing, so
//! they are processed in parallel on the rayon pool without locking.

use crate::entropy::{EntropyResultSet, RunningRequest};
use crate::error::{EntropyError, Result};
use crate::io::IOLimits;
use crate::sample::Sample;
use crate::timeout::{Deadline, DEFAULT_TIMEOUT_SECONDS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, info_span, warn};

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Window sizes computed for every sample.
    pub window_sizes: Vec<usize>,
    /// Normalize entropy values to [0, 1].
    pub normalize: bool,
    /// Also compute whole-sample entropy.
    pub overall: bool,
    /// Per-sample budget in seconds, checked after each computation; 0 disables it.
    pub max_seconds_per_sample: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            window_sizes: vec![256],
            normalize: true,
            overall: true,
            max_seconds_per_sample: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Everything computed for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEntropy {
    pub id: String,
    pub size: usize,
    pub path: Option<PathBuf>,
    /// Whole-sample entropy, when requested.
    pub overall: Option<f64>,
    pub results: EntropyResultSet,
    /// Requested window sizes not smaller than the sample.
    pub skipped_window_sizes: Vec<usize>,
}

/// A sample that could not be processed.
#[derive(Debug)]
pub struct SampleFailure {
    pub id: String,
    pub error: EntropyError,
}

/// Outcome of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<SampleEntropy>,
    pub failed: Vec<SampleFailure>,
}

/// Computes whole-sample entropy and each configured running entropy for one sample.
///
/// Window sizes that are not strictly smaller than the sample are skipped
/// and recorded, not treated as errors.
pub fn process_sample(sample: &Sample, cfg: &BatchConfig) -> Result<SampleEntropy> {
    let mut deadline = Deadline::new(cfg.max_seconds_per_sample, sample.id());
    process_sample_with_deadline(sample, cfg, &mut deadline)
}

/// Like [`process_sample`], against a caller-supplied deadline.
///
/// The deadline is checked after the whole-sample entropy and after every
/// window size, so the sample fails as soon as any step overruns the budget.
pub fn process_sample_with_deadline(
    sample: &Sample,
    cfg: &BatchConfig,
    deadline: &mut Deadline,
) -> Result<SampleEntropy> {
    let span = info_span!("sample", id = %sample.id(), size = sample.len());
    let _guard = span.enter();

    let overall = if cfg.overall && !sample.is_empty() {
        let entropy = sample.entropy(cfg.normalize)?;
        deadline.check()?;
        Some(entropy)
    } else {
        None
    };

    let mut results = EntropyResultSet::new();
    let mut skipped_window_sizes = Vec::new();
    for &window_size in &cfg.window_sizes {
        if window_size >= sample.len() {
            warn!(window_size, "Window size not smaller than sample, skipping");
            skipped_window_sizes.push(window_size);
            continue;
        }
        let request = RunningRequest::new(window_size).normalize(cfg.normalize);
        results.compute_running_entropy(sample.as_bytes(), &request)?;
        deadline.check()?;
    }

    info!(
        windows = results.len(),
        skipped = skipped_window_sizes.len(),
        deadline_checks = deadline.checks(),
        elapsed_ms = deadline.elapsed().as_millis() as u64,
        "Processed sample"
    );

    Ok(SampleEntropy {
        id: sample.id().to_string(),
        size: sample.len(),
        path: sample.path().map(|p| p.to_path_buf()),
        overall,
        results,
        skipped_window_sizes,
    })
}

/// Processes samples in parallel.
pub fn process_batch(samples: &[Sample], cfg: &BatchConfig) -> BatchReport {
    let started = Instant::now();
    info!(samples = samples.len(), window_sizes = ?cfg.window_sizes, "Starting batch");

    let outcomes: Vec<_> = samples
        .par_iter()
        .map(|sample| (sample.id(), process_sample(sample, cfg)))
        .collect();

    let mut report = BatchReport::default();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(entropy) => report.processed.push(entropy),
            Err(error) => {
                warn!(id = %id, error = %error, "Sample failed");
                report.failed.push(SampleFailure {
                    id: id.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        processed = report.processed.len(),
        failed = report.failed.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Batch complete"
    );
    report
}

/// Loads files in parallel, skipping any that cannot be read.
pub fn load_samples(paths: &[PathBuf], limits: &IOLimits) -> Vec<Sample> {
    paths
        .par_iter()
        .filter_map(|path| match Sample::open(path, limits) {
            Ok(sample) => Some(sample),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable sample");
                None
            }
        })
        .collect()
}
