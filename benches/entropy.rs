use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runent::entropy::{entropy_of_slice, running_entropy, RunningRequest};
use std::hint::black_box;

fn sample_data(len: usize) -> Vec<u8> {
    let mut data: Vec<u8> = b"MZ\x90\x00".iter().copied().cycle().take(len / 4).collect();
    let mut rng = 42u64;
    while data.len() < len {
        rng = rng.wrapping_mul(1664525).wrapping_add(1013904223);
        data.push((rng >> 24) as u8);
    }
    data
}

fn brute_force(data: &[u8], window: usize) -> Vec<f64> {
    data.windows(window)
        .map(|w| entropy_of_slice(w, true))
        .collect()
}

fn bench_running_entropy(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_entropy");
    let data = sample_data(64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for window in [64usize, 256, 1024] {
        let request = RunningRequest::new(window);
        group.bench_with_input(BenchmarkId::new("incremental", window), &window, |b, _| {
            b.iter(|| running_entropy(black_box(&data), &request))
        });
    }
    group.bench_function("brute_force/256", |b| {
        b.iter(|| brute_force(black_box(&data), 256))
    });
    group.finish();
}

criterion_group!(benches, bench_running_entropy);
criterion_main!(benches);
