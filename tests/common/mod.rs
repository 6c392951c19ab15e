//! Shared helpers for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Deterministic pseudo-random bytes without an RNG crate.
pub fn lcg_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng.wrapping_mul(1664525).wrapping_add(1013904223);
            (rng >> 24) as u8
        })
        .collect()
}

/// A "packed" layout: low-entropy header followed by a high-entropy body.
pub fn packed_like(header: usize, body: usize) -> Vec<u8> {
    let mut data: Vec<u8> = b"MZ".iter().copied().cycle().take(header).collect();
    data.extend(lcg_bytes(body, 0x5eed));
    data
}

/// Creates a temporary file with the given content.
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}
