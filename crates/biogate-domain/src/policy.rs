use biogate_types::{AcceptancePolicy, FactorKind};

/// Cosine-similarity scale, 0.0..=1.0.
pub const FACE_THRESHOLD: f64 = 0.6;
/// Minutiae match scale, 0.0..=1.0.
pub const FINGERPRINT_THRESHOLD: f64 = 0.3;
pub const SESSION_TIMEOUT_SECS: u64 = 3600;
pub const PROVIDER_TIMEOUT_MS: u64 = 2000;

/// The Threshold Policy comparison: a score passes at or above its threshold.
///
/// Non-finite scores never pass.
pub fn meets_threshold(score: f64, threshold: f64) -> bool {
    score.is_finite() && score >= threshold
}

/// Static per-factor thresholds turning a raw score into pass/fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub face: f64,
    pub fingerprint: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            face: FACE_THRESHOLD,
            fingerprint: FINGERPRINT_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Threshold for a numeric factor; password is binary and has none.
    pub fn for_kind(&self, kind: FactorKind) -> Option<f64> {
        match kind {
            FactorKind::Face => Some(self.face),
            FactorKind::Fingerprint => Some(self.fingerprint),
            FactorKind::Password => None,
        }
    }

    /// `score >= threshold`. Always false for factors without a threshold.
    pub fn passes(&self, kind: FactorKind, score: f64) -> bool {
        self.for_kind(kind).is_some_and(|t| meets_threshold(score, t))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub thresholds: Thresholds,
    /// Policy applied when the caller does not pick one.
    pub policy: AcceptancePolicy,
    pub session_timeout_secs: u64,
    pub provider_timeout_ms: u64,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            thresholds: Thresholds::default(),
            policy: AcceptancePolicy::RequireBiometric,
            session_timeout_secs: SESSION_TIMEOUT_SECS,
            provider_timeout_ms: PROVIDER_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        let t = Thresholds::default();
        assert!(t.passes(FactorKind::Face, 0.6));
        assert!(!t.passes(FactorKind::Face, 0.5999));
        assert!(t.passes(FactorKind::Fingerprint, 0.3));
        assert!(!t.passes(FactorKind::Fingerprint, 0.25));
    }

    #[test]
    fn password_has_no_threshold() {
        let t = Thresholds::default();
        assert_eq!(t.for_kind(FactorKind::Password), None);
        assert!(!t.passes(FactorKind::Password, 1.0));
    }

    #[test]
    fn non_finite_scores_never_meet_a_threshold() {
        assert!(meets_threshold(0.3, 0.3));
        assert!(!meets_threshold(f64::NAN, 0.0));
        assert!(!meets_threshold(f64::INFINITY, 0.6));
    }
}
