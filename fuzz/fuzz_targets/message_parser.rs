//! Fuzz target for IRC message parsing
//!
//! This fuzzer tests the robustness of the IRC message parser by feeding it
//! randomly generated input data and ensuring it doesn't panic or crash.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slirc_grammar::Message;

fuzz_target!(|data: &[u8]| {
    // Over 8191 bytes is beyond any tagged IRC line
    if data.is_empty() || data.len() > 8191 {
        return;
    }

    let msg = Message::parse_bytes(data);
    let _ = msg.server_time();
    let _ = Message::parse(&msg.to_string());
});
