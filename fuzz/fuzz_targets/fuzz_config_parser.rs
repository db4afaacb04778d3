//! Fuzz target for `biogate.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! Any config that resolves must carry in-range thresholds and non-zero timeouts.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use biogate_settings::{Overrides, parse_config_toml, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
        let eff = resolved.effective;
        assert!((0.0..=1.0).contains(&eff.thresholds.face));
        assert!((0.0..=1.0).contains(&eff.thresholds.fingerprint));
        assert!(eff.session_timeout_secs > 0);
        assert!(eff.provider_timeout_ms > 0);
    }
});
