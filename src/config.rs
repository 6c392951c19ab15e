//! Configuration for loading, batch computation, and feature extraction.
//!
//! Every section has defaults matching the usual malware-corpus settings
//! (256-byte windows, normalized values, 512-point vectors). JSON documents
//! may set any subset of fields; the rest keep their defaults.

use crate::batch::BatchConfig;
use crate::error::{EntropyError, Result};
use crate::features::FeatureConfig;
use crate::io::IOLimits;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunentConfig {
    /// Limits applied when reading samples.
    pub io: IOLimits,
    /// Running-entropy batch settings.
    pub batch: BatchConfig,
    /// Feature vector settings.
    pub features: FeatureConfig,
}

impl RunentConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| EntropyError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EntropyError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| EntropyError::Config(e.to_string()))
    }

    /// Rejects settings the engine would refuse at run time.
    pub fn validate(&self) -> Result<()> {
        if self.batch.window_sizes.is_empty() {
            return Err(EntropyError::Config(
                "at least one window size is required".to_string(),
            ));
        }
        if self.batch.window_sizes.contains(&0) {
            return Err(EntropyError::Config(
                "window sizes must be at least 1".to_string(),
            ));
        }
        if self.features.window_size == 0 {
            return Err(EntropyError::Config(
                "feature window size must be at least 1".to_string(),
            ));
        }
        if self.features.datapoints == 0 {
            return Err(EntropyError::Config(
                "feature datapoints must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
