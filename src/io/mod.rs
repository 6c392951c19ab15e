//! Bounded file loading for sample bytes.
//!
//! The entropy engine only ever sees a fully materialized byte buffer. This
//! module is the byte source that produces one: it memory-maps the file,
//! enforces a size limit, and hands out `Bytes` views. File-existence and
//! size errors are raised here, before the engine is invoked.

pub mod error;

use crate::io::error::{IoError, Result};
use bytes::Bytes;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Defines the resource limits for loading samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// A bounded file reader backed by a read-only memory map.
pub struct SafeReader {
    path: PathBuf,
    // None when the file size is zero; memmap cannot map empty files.
    mmap: Option<Mmap>,
    file_size: u64,
}

impl SafeReader {
    /// Opens and memory-maps a file.
    ///
    /// Fails with `IoError::FileTooLarge` if the file exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = file_size,
            limits.max_file_size = limits.max_file_size,
            "Opening sample"
        );

        if file_size > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = file_size,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(IoError::FileTooLarge {
                limit: limits.max_file_size,
                found: file_size,
            });
        }

        let mmap = if file_size == 0 {
            None
        } else {
            // Safety: read-only map of a regular file opened above.
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            file_size,
        })
    }

    /// Returns the total size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.file_size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copies the whole file out of the map.
    pub fn read_all(&self) -> Bytes {
        match &self.mmap {
            Some(map) => Bytes::copy_from_slice(&map[..]),
            None => Bytes::new(),
        }
    }

    /// Copies `len` bytes starting at `offset`.
    ///
    /// Unlike a stream read, a range that does not lie entirely inside the
    /// file is an error rather than a short read.
    pub fn read_range(&self, offset: u64, len: u64) -> Result<Bytes> {
        match offset.checked_add(len) {
            Some(end) if end <= self.file_size => {}
            _ => {
                return Err(IoError::OutOfBounds {
                    offset,
                    len,
                    size: self.file_size,
                })
            }
        }
        if len == 0 {
            return Ok(Bytes::new());
        }
        let map = match &self.mmap {
            Some(m) => m,
            None => return Ok(Bytes::new()),
        };
        let start = offset as usize;
        let out = Bytes::copy_from_slice(&map[start..start + len as usize]);

        trace!(
            path = %self.path.display(),
            offset = offset,
            len = len,
            "Performed ranged read"
        );

        Ok(out)
    }
}

/// Reads a whole file into memory, subject to `limits`.
pub fn load_bytes<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Bytes> {
    Ok(SafeReader::open(path, limits)?.read_all())
}
