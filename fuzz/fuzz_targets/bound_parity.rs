#![no_main]

use libfuzzer_sys::fuzz_target;
use primegen_core::parity;
use primegen_core::Bound;

// Brute force is quadratic; only cross-check small bounds.
const MAX_CHECKED_BOUND: usize = 2_000;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsing must never panic, whatever the text
        if let Ok(bound) = s.parse::<Bound>() {
            assert!(bound >= Bound::MIN && bound <= Bound::MAX);
            if bound.get() <= MAX_CHECKED_BOUND {
                let report = parity::check(bound);
                assert!(report.is_consistent(), "methods disagree: {:?}", report.mismatches);
            }
        }
    }
});
