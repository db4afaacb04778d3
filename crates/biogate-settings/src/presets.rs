use biogate_domain::policy::{EffectiveConfig, PROVIDER_TIMEOUT_MS, SESSION_TIMEOUT_SECS, Thresholds};
use biogate_types::AcceptancePolicy;

/// Known profile names, in documentation order.
pub const PROFILES: [&str; 3] = ["standard", "strict", "lenient"];

/// Preset profiles are opinionated defaults.
///
/// Thresholds stay inside the recommended tuning ranges (face 0.5 to 0.7,
/// fingerprint 0.2 to 0.4).
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "lenient" => lenient_profile(),
        // default
        _ => standard_profile(),
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig::default()
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        thresholds: Thresholds {
            face: 0.7,
            fingerprint: 0.4,
        },
        policy: AcceptancePolicy::RequireAll,
        session_timeout_secs: 900,
        provider_timeout_ms: PROVIDER_TIMEOUT_MS,
    }
}

fn lenient_profile() -> EffectiveConfig {
    // Lower bar and slower providers tolerated; any passing factor is enough.
    EffectiveConfig {
        profile: "lenient".to_string(),
        thresholds: Thresholds {
            face: 0.5,
            fingerprint: 0.2,
        },
        policy: AcceptancePolicy::AnyFactor,
        session_timeout_secs: SESSION_TIMEOUT_SECS,
        provider_timeout_ms: 5000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_profile_resolves_to_itself() {
        for name in PROFILES {
            assert_eq!(preset(name).profile, name);
        }
    }

    #[test]
    fn unknown_profile_falls_back_to_standard() {
        assert_eq!(preset("paranoid"), preset("standard"));
    }

    #[test]
    fn strict_is_tighter_than_lenient() {
        let strict = preset("strict");
        let lenient = preset("lenient");
        assert!(strict.thresholds.face > lenient.thresholds.face);
        assert!(strict.thresholds.fingerprint > lenient.thresholds.fingerprint);
        assert!(strict.session_timeout_secs < lenient.session_timeout_secs);
    }
}
