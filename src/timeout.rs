//! Per-sample deadlines for batch processing.
//!
//! The engine itself is never interrupted; a batch checks the deadline
//! between the window sizes it computes for one sample.

use crate::error::{EntropyError, Result};
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// Default per-sample budget in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300; // 5 minutes

/// Wall-clock budget for one unit of batch work.
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    max_duration: Option<Duration>,
    checks: usize,
    operation_name: String,
}

impl Deadline {
    /// Budget of `seconds`; zero means unlimited.
    pub fn new(seconds: u64, operation: impl Into<String>) -> Self {
        if seconds == 0 {
            Self::unlimited(operation)
        } else {
            Self::with_duration(Duration::from_secs(seconds), operation)
        }
    }

    /// A deadline that never expires.
    pub fn unlimited(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            max_duration: None,
            checks: 0,
            operation_name: operation.into(),
        }
    }

    /// Budget of an arbitrary duration.
    pub fn with_duration(duration: Duration, operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            max_duration: Some(duration),
            checks: 0,
            operation_name: operation.into(),
        }
    }

    /// Fails with `EntropyError::Timeout` once the budget is spent.
    pub fn check(&mut self) -> Result<()> {
        self.checks += 1;
        let Some(max) = self.max_duration else {
            return Ok(());
        };

        let elapsed = self.start.elapsed();
        if elapsed > max {
            error!(
                "Operation '{}' timed out after {} checks and {:?}",
                self.operation_name, self.checks, elapsed
            );
            return Err(EntropyError::Timeout {
                seconds: elapsed.as_secs(),
            });
        }

        if elapsed > max / 2 {
            warn!(
                "Operation '{}' has used over half its budget ({:?} of {:?})",
                self.operation_name, elapsed, max
            );
        }

        Ok(())
    }

    /// Number of checks performed so far
    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
