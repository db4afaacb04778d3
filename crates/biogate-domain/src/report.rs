use biogate_types::{AcceptancePolicy, AuthResult, VerdictStatus, ids};

pub fn verdict_status(result: &AuthResult) -> VerdictStatus {
    if result.authenticated {
        VerdictStatus::Authenticated
    } else {
        VerdictStatus::Denied
    }
}

/// Reason tokens explaining a denial. Empty when authenticated.
pub fn verdict_reasons(result: &AuthResult) -> Vec<&'static str> {
    if result.authenticated {
        return Vec::new();
    }
    if result.factors_attempted == 0 {
        return vec![ids::REASON_NO_FACTORS_ATTEMPTED];
    }

    match result.policy {
        AcceptancePolicy::RequireBiometric => {
            let mut reasons = vec![ids::REASON_BIOMETRIC_REQUIRED];
            if result.note.is_some() {
                reasons.push(ids::REASON_PASSWORD_ALONE_INSUFFICIENT);
            }
            reasons
        }
        AcceptancePolicy::RequireAll | AcceptancePolicy::AnyFactor => {
            vec![ids::REASON_FACTOR_FAILED]
        }
    }
}
