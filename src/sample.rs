//! In-memory samples.
//!
//! A [`Sample`] is one fully loaded file: the read-only byte sequence the
//! engine runs over, plus the identifier its results are filed under.

use crate::entropy::{running_entropy, whole_sequence_entropy, EntropySequence, RunningRequest};
use crate::error::Result;
use crate::io::{load_bytes, IOLimits};
use bytes::Bytes;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upper-case hex SHA-256 of `data`, used as the sample identifier.
pub fn sample_id(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:X}", hasher.finalize())
}

/// A sample's bytes and identity.
#[derive(Debug, Clone)]
pub struct Sample {
    id: String,
    path: Option<PathBuf>,
    data: Bytes,
}

impl Sample {
    /// Loads a file fully into memory.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let data = load_bytes(path, limits)?;
        let sample = Self {
            id: sample_id(&data),
            path: Some(path.to_path_buf()),
            data,
        };
        debug!(path = %path.display(), id = %sample.id, size = sample.len(), "Loaded sample");
        Ok(sample)
    }

    /// Wraps bytes already in memory.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            id: sample_id(&data),
            path: None,
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Running entropy over the sample, or a sub-range of it.
    pub fn running_entropy(&self, request: &RunningRequest) -> Result<EntropySequence> {
        running_entropy(&self.data, request)
    }

    /// Entropy of the whole sample.
    pub fn entropy(&self, normalize: bool) -> Result<f64> {
        whole_sequence_entropy(&self.data, normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntropyError;
    use std::io::Write;

    #[test]
    fn test_sample_id_is_upper_sha256() {
        assert_eq!(
            sample_id(b""),
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn test_from_bytes() {
        let sample = Sample::from_bytes(vec![0x00, 0x00, 0xFF, 0xFF]);
        assert_eq!(sample.len(), 4);
        assert!(sample.path().is_none());
        assert_eq!(sample.entropy(false).unwrap(), 1.0);
        assert_eq!(sample.entropy(true).unwrap(), 0.125);
    }

    #[test]
    fn test_open_and_section_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();
        file.write_all(&(0..=255u8).collect::<Vec<_>>()).unwrap();

        let sample = Sample::open(file.path(), &IOLimits::default()).unwrap();
        assert_eq!(sample.len(), 320);
        assert_eq!(sample.path(), Some(file.path()));

        let section = RunningRequest::new(256).normalize(false).offset(64).length(256);
        let seq = sample.running_entropy(&section).unwrap();
        assert_eq!(seq.values, vec![8.0]);
    }

    #[test]
    fn test_empty_sample_entropy_fails() {
        let sample = Sample::from_bytes(Vec::new());
        assert!(sample.is_empty());
        assert!(matches!(
            sample.entropy(true),
            Err(EntropyError::InvalidArgument(_))
        ));
    }
}
