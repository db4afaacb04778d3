//! Fuzz target for recorded attempt files.
//!
//! Goal: the attempt parser and evidence encoding should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_attempt_parser
//! ```

#![no_main]

use biogate_providers::recorded::parse_attempt_json;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(file) = parse_attempt_json(text)
    {
        let _ = file.face_evidence();
        let _ = file.fingerprint_evidence();
        let _ = file.password_secret();
    }
});
