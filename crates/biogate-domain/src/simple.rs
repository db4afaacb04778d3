use biogate_types::{AuthResult, FactorKind};

/// Fixed two-state rule: both biometrics, or the password as an independent fallback.
///
/// Reads the `factors` list only; the result's own `authenticated` flag is ignored.
pub fn simple_verdict(result: &AuthResult) -> bool {
    let dual_biometric = result.passed(FactorKind::Face) && result.passed(FactorKind::Fingerprint);
    dual_biometric || result.passed(FactorKind::Password)
}
