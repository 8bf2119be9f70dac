#![no_main]
use autoscale::{Options, normalize_slice};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = normalize_slice(data, &Options::default());
    let _ = normalize_slice(data, &Options::strict());
});
