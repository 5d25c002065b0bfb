//! Fuzz target for wildcard label filter compilation and matching.
//!
//! The input is split into a pattern half and a label half; both go through
//! compile + match. Filter compilation must never panic, whatever the
//! pattern looks like.
//!
//! Run with:
//!   cargo +nightly fuzz run label_filter_match

#![no_main]

use libfuzzer_sys::fuzz_target;
use rastermask::LabelFilter;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let split = data.len() / 2;
    let (pattern_bytes, label_bytes) = data.split_at(split);
    let (Ok(pattern), Ok(label)) = (
        std::str::from_utf8(pattern_bytes),
        std::str::from_utf8(label_bytes),
    ) else {
        return;
    };

    let filter = LabelFilter::new(pattern);
    let _ = filter.matches(label);
});
