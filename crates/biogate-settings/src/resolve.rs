use crate::{model::BiogateConfigV1, presets};
use anyhow::Context;
use biogate_domain::policy::EffectiveConfig;
use biogate_types::AcceptancePolicy;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub policy: Option<String>,
    pub face_threshold: Option<f64>,
    pub fingerprint_threshold: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(cfg: BiogateConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(policy_s) = overrides.policy.as_deref().or(cfg.policy.as_deref()) {
        effective.policy = parse_policy(policy_s)?;
    }

    // thresholds
    if let Some(face) = overrides.face_threshold.or(cfg.thresholds.face) {
        effective.thresholds.face =
            validate_threshold(face).context("invalid face threshold")?;
    }
    if let Some(fingerprint) = overrides
        .fingerprint_threshold
        .or(cfg.thresholds.fingerprint)
    {
        effective.thresholds.fingerprint =
            validate_threshold(fingerprint).context("invalid fingerprint threshold")?;
    }

    // timeouts
    if let Some(secs) = cfg.session_timeout_secs {
        effective.session_timeout_secs =
            validate_positive(secs).context("invalid session_timeout_secs")?;
    }
    if let Some(ms) = cfg.provider_timeout_ms {
        effective.provider_timeout_ms =
            validate_positive(ms).context("invalid provider_timeout_ms")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_policy(v: &str) -> anyhow::Result<AcceptancePolicy> {
    match AcceptancePolicy::from_id(v) {
        Some(policy) => Ok(policy),
        None => anyhow::bail!(
            "unknown policy: {v} (expected require_all|require_biometric|any_factor)"
        ),
    }
}

fn validate_threshold(v: f64) -> anyhow::Result<f64> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        anyhow::bail!("threshold {v} is outside 0.0..=1.0");
    }
    Ok(v)
}

fn validate_positive(v: u64) -> anyhow::Result<u64> {
    if v == 0 {
        anyhow::bail!("value must be greater than zero");
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThresholdsConfig;

    fn cfg_with_thresholds(face: Option<f64>, fingerprint: Option<f64>) -> BiogateConfigV1 {
        BiogateConfigV1 {
            thresholds: ThresholdsConfig { face, fingerprint },
            ..BiogateConfigV1::default()
        }
    }

    #[test]
    fn overrides_beat_file_which_beats_preset() {
        let cfg = BiogateConfigV1 {
            profile: Some("lenient".to_string()),
            policy: Some("require_all".to_string()),
            ..cfg_with_thresholds(Some(0.55), Some(0.25))
        };
        let overrides = Overrides {
            profile: Some("strict".to_string()),
            policy: Some("require_biometric".to_string()),
            face_threshold: Some(0.68),
            fingerprint_threshold: None,
        };

        let eff = resolve_config(cfg, overrides).expect("resolve").effective;
        assert_eq!(eff.profile, "strict");
        assert_eq!(eff.policy, AcceptancePolicy::RequireBiometric);
        assert_eq!(eff.thresholds.face, 0.68);
        assert_eq!(eff.thresholds.fingerprint, 0.25);
        // Not set anywhere but the preset.
        assert_eq!(eff.session_timeout_secs, 900);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let err = resolve_config(cfg_with_thresholds(Some(1.5), None), Overrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("invalid face threshold"));

        let err = resolve_config(cfg_with_thresholds(None, Some(-0.1)), Overrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("invalid fingerprint threshold"));
    }

    #[test]
    fn rejects_non_finite_override() {
        let overrides = Overrides {
            face_threshold: Some(f64::NAN),
            ..Overrides::default()
        };
        assert!(resolve_config(BiogateConfigV1::default(), overrides).is_err());
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        let eff = resolve_config(cfg_with_thresholds(Some(0.0), Some(1.0)), Overrides::default())
            .expect("resolve")
            .effective;
        assert_eq!(eff.thresholds.face, 0.0);
        assert_eq!(eff.thresholds.fingerprint, 1.0);
    }

    #[test]
    fn rejects_unknown_policy() {
        let cfg = BiogateConfigV1 {
            policy: Some("password_only".to_string()),
            ..BiogateConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown policy: password_only"));
    }

    #[test]
    fn rejects_zero_timeouts() {
        let cfg = BiogateConfigV1 {
            provider_timeout_ms: Some(0),
            ..BiogateConfigV1::default()
        };
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid provider_timeout_ms"));

        let cfg = BiogateConfigV1 {
            session_timeout_secs: Some(0),
            ..BiogateConfigV1::default()
        };
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }
}
