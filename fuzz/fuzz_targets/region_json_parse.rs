//! Fuzz target for host region payload normalization.
//!
//! This fuzzer feeds arbitrary byte sequences to the region JSON
//! normalizer, checking for panics, buffer overflows, or other undefined
//! behavior.
//!
//! Run with:
//!   cargo +nightly fuzz run region_json_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use rastermask::host::rects_from_slice;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 10MB is generous for region payloads.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    // Try to parse the data. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let _ = rects_from_slice(data);
});
