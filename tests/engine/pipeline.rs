//! Load -> batch -> feature vector pipeline.

use crate::common::{create_temp_file, packed_like};
use runent::batch::{load_samples, process_batch, BatchConfig};
use runent::config::RunentConfig;
use runent::entropy::{sample_positions, RunningRequest};
use runent::features::{collect_features, FeatureConfig, FeatureVector};
use runent::io::IOLimits;
use runent::sample::Sample;

#[test]
fn packed_sample_shows_entropy_step() {
    let sample = Sample::from_bytes(packed_like(4096, 4096));
    let seq = sample.running_entropy(&RunningRequest::new(256)).unwrap();

    // Header windows hold two symbols, body windows look random.
    assert!((seq.values[0] - 0.125).abs() < 1e-12);
    let last = *seq.values.last().unwrap();
    assert!(last > 0.8, "body entropy too low: {}", last);
}

#[test]
fn files_to_feature_vectors() {
    let small = create_temp_file(&packed_like(512, 1024));
    let large = create_temp_file(&packed_like(8192, 32768));
    let tiny = create_temp_file(&[1, 2, 3]);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");

    let paths = vec![
        small.path().to_path_buf(),
        missing,
        large.path().to_path_buf(),
        tiny.path().to_path_buf(),
    ];
    let samples = load_samples(&paths, &IOLimits::default());
    assert_eq!(samples.len(), 3);

    let cfg = RunentConfig::default();
    let report = process_batch(&samples, &cfg.batch);
    assert!(report.failed.is_empty());
    assert_eq!(report.processed.len(), 3);

    let (vectors, without_window) = collect_features(&report.processed, &cfg.features).unwrap();
    assert_eq!(vectors.len(), 2);
    assert_eq!(without_window.len(), 1);
    for v in &vectors {
        assert_eq!(v.len(), 512);
        assert!(v.values.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }
}

#[test]
fn results_serialize_for_persistence() {
    let sample = Sample::from_bytes(packed_like(300, 300));
    let cfg = BatchConfig {
        window_sizes: vec![64, 128],
        ..BatchConfig::default()
    };
    let report = process_batch(std::slice::from_ref(&sample), &cfg);
    let entropy = &report.processed[0];

    let json = serde_json::to_string(entropy).unwrap();
    let restored: runent::batch::SampleEntropy = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.results.window_sizes().collect::<Vec<_>>(), vec![64, 128]);
    assert_eq!(restored.id, sample.id());

    let vector = FeatureVector::from_sample(
        &restored,
        &FeatureConfig {
            datapoints: 10,
            window_size: 128,
        },
    )
    .unwrap();
    assert_eq!(vector.rows().count(), 10);
}

#[test]
fn resample_positions_span_sequence() {
    let positions = sample_positions(1000, 512);
    assert_eq!(positions.len(), 512);
    assert_eq!(positions[0], 0.0);
    assert_eq!(positions[511], 999.0);
}
