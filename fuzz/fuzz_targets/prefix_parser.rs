//! Fuzz target for message prefix parsing

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_grammar::Prefix;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        let prefix = Prefix::parse(input);
        let _ = prefix.mask();
        let _ = prefix.to_string();
    }
});
