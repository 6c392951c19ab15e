#![no_main]
use libfuzzer_sys::fuzz_target;
use runent::entropy::{entropy_of_slice, resample, running_entropy, RunningRequest};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let window = u16::from_le_bytes([data[0], data[1]]) as usize;
    let offset = data[2] as usize;
    let points = data[3] as usize;
    let data = &data[4..];

    let request = RunningRequest::new(window).offset(offset);
    if let Ok(seq) = running_entropy(data, &request) {
        assert_eq!(seq.len(), seq.length - window + 1);
        let first = &data[offset..offset + window];
        assert_eq!(seq.values[0], entropy_of_slice(first, true));
        let _ = resample(&seq.values, points);
    }
});
