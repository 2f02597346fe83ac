//! Fuzz target for hostmask matching
//!
//! The first line of input is the pattern, the rest is the candidate.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_grammar::match_mask;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        let (pattern, candidate) = input.split_once('\n').unwrap_or((input, ""));
        let _ = match_mask(candidate, pattern);
    }
});
