//! Engine properties checked over the public API.

use crate::common::lcg_bytes;
use runent::entropy::{entropy_of_slice, EntropyResultSet, RunningRequest};
use runent::{resample, running_entropy, whole_sequence_entropy, EntropyError};

#[test]
fn sequence_length_for_many_windows() {
    let data = lcg_bytes(777, 1);
    for w in [1, 2, 3, 64, 255, 256, 500, 777] {
        let seq = running_entropy(&data, &RunningRequest::new(w)).unwrap();
        assert_eq!(seq.len(), data.len() - w + 1, "window {}", w);
    }
}

#[test]
fn constant_sequence_is_exactly_zero() {
    let data = vec![0xCCu8; 2048];
    for normalize in [false, true] {
        for w in [1, 16, 256, 2048] {
            let seq =
                running_entropy(&data, &RunningRequest::new(w).normalize(normalize)).unwrap();
            assert!(seq.values.iter().all(|&v| v == 0.0), "window {}", w);
        }
    }
}

#[test]
fn every_byte_once_is_maximal() {
    let data: Vec<u8> = (0..=255u8).rev().collect();
    let raw = running_entropy(&data, &RunningRequest::new(256).normalize(false)).unwrap();
    assert_eq!(raw.len(), 1);
    assert!((raw.values[0] - 8.0).abs() < 1e-12);

    let norm = running_entropy(&data, &RunningRequest::new(256)).unwrap();
    assert!((norm.values[0] - 1.0).abs() < 1e-12);
}

#[test]
fn incremental_matches_brute_force() {
    let data = lcg_bytes(1000, 0xdead_beef);
    for normalize in [false, true] {
        let seq = running_entropy(&data, &RunningRequest::new(64).normalize(normalize)).unwrap();
        assert_eq!(seq.len(), 937);
        for (i, &v) in seq.values.iter().enumerate() {
            let expected = entropy_of_slice(&data[i..i + 64], normalize);
            assert!((v - expected).abs() < 1e-12, "position {}", i);
        }
    }
}

#[test]
fn incremental_matches_brute_force_on_structured_data() {
    // Runs of repeated bytes exercise the outgoing == incoming path.
    let mut data = Vec::new();
    for (i, chunk) in lcg_bytes(200, 3).chunks(7).enumerate() {
        data.extend(std::iter::repeat(chunk[0]).take(i % 13 + 1));
        data.extend_from_slice(chunk);
    }
    let request = RunningRequest::new(33).normalize(false).offset(5).length(data.len() - 10);
    let seq = running_entropy(&data, &request).unwrap();
    for (i, &v) in seq.values.iter().enumerate() {
        assert_eq!(v, entropy_of_slice(&data[5 + i..5 + i + 33], false));
    }
}

#[test]
fn resample_at_natural_length_is_identity() {
    let data = lcg_bytes(3000, 17);
    let seq = running_entropy(&data, &RunningRequest::new(100)).unwrap();
    let out = resample(&seq.values, seq.len()).unwrap();
    assert_eq!(out.len(), seq.len());
    for (a, b) in out.iter().zip(seq.values.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn out_of_range_requests_fail() {
    let data = lcg_bytes(100, 2);

    let err = running_entropy(&data, &RunningRequest::new(10).offset(91)).unwrap_err();
    assert!(err.is_range_error());
    let err = running_entropy(&data, &RunningRequest::new(101)).unwrap_err();
    assert!(err.is_range_error());
    let err = running_entropy(&data, &RunningRequest::new(10).offset(50).length(51)).unwrap_err();
    assert!(matches!(err, EntropyError::InvalidLength { .. }));
}

#[test]
fn two_symbol_whole_sequence() {
    let data = [0x00, 0x00, 0xFF, 0xFF];
    assert_eq!(whole_sequence_entropy(&data, false).unwrap(), 1.0);
    assert_eq!(whole_sequence_entropy(&data, true).unwrap(), 0.125);
}

#[test]
fn result_set_lookup() {
    let data = lcg_bytes(1024, 8);
    let mut results = EntropyResultSet::new();
    for w in [32, 256] {
        results
            .compute_running_entropy(&data, &RunningRequest::new(w))
            .unwrap();
    }
    assert_eq!(results.get_result(32).unwrap().len(), 993);
    assert!(matches!(
        results.get_result(64),
        Err(EntropyError::NotFound { window_size: 64 })
    ));
}
