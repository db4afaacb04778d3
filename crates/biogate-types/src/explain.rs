//! Explain registry for acceptance policies and verdict reasons.
//!
//! Maps policy ids and reason tokens to human-readable explanations.

use crate::ids;

/// Explanation entry for a policy or reason.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the policy/reason.
    pub title: &'static str,
    /// What it means and when it applies.
    pub description: &'static str,
    /// What an operator or user can do about it.
    pub guidance: &'static str,
    /// Optional `biogate.toml` snippet.
    pub example: Option<&'static str>,
}

/// Look up an explanation by policy id or reason token.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Policies
        ids::POLICY_REQUIRE_ALL => Some(explain_require_all()),
        ids::POLICY_REQUIRE_BIOMETRIC => Some(explain_require_biometric()),
        ids::POLICY_ANY_FACTOR => Some(explain_any_factor()),

        // Reasons
        ids::REASON_NO_FACTORS_ATTEMPTED => Some(explain_no_factors_attempted()),
        ids::REASON_FACTOR_FAILED => Some(explain_factor_failed()),
        ids::REASON_BIOMETRIC_REQUIRED => Some(explain_biometric_required()),
        ids::REASON_PASSWORD_ALONE_INSUFFICIENT => Some(explain_password_alone_insufficient()),
        ids::REASON_LIVENESS_REJECTED => Some(explain_liveness_rejected()),
        ids::REASON_RUNTIME_ERROR => Some(explain_runtime_error()),

        _ => None,
    }
}

/// List all known policy ids.
pub fn all_policy_ids() -> &'static [&'static str] {
    &[
        ids::POLICY_REQUIRE_ALL,
        ids::POLICY_REQUIRE_BIOMETRIC,
        ids::POLICY_ANY_FACTOR,
    ]
}

/// List all known reason tokens.
pub fn all_reasons() -> &'static [&'static str] {
    &[
        ids::REASON_NO_FACTORS_ATTEMPTED,
        ids::REASON_FACTOR_FAILED,
        ids::REASON_BIOMETRIC_REQUIRED,
        ids::REASON_PASSWORD_ALONE_INSUFFICIENT,
        ids::REASON_LIVENESS_REJECTED,
        ids::REASON_RUNTIME_ERROR,
    ]
}

// --- Policies ---

fn explain_require_all() -> Explanation {
    Explanation {
        title: "Require All Factors",
        description: "\
Every factor the subject supplied must pass. Factors that were not supplied are
not counted, so a face-only attempt passes on the face alone. An attempt with no
factors at all is never authenticated.",
        guidance: "\
Use for step-up flows where the caller collects a fixed set of factors and wants
each of them confirmed. A provider fault fails the whole attempt.",
        example: Some("policy = \"require_all\""),
    }
}

fn explain_require_biometric() -> Explanation {
    Explanation {
        title: "Require Biometric",
        description: "\
At least one biometric factor (face or fingerprint) must pass. The password
outcome is recorded but never sufficient on its own.",
        guidance: "\
This is the default policy of the `standard` profile. Supply a face capture or a
fingerprint alongside the password.",
        example: Some("policy = \"require_biometric\""),
    }
}

fn explain_any_factor() -> Explanation {
    Explanation {
        title: "Any Factor",
        description: "\
Any single attempted factor passing authenticates the subject, including the
password alone.",
        guidance: "\
Use for fallback login paths. Pair with tighter thresholds when biometrics are
the only factor in play.",
        example: Some("policy = \"any_factor\""),
    }
}

// --- Reasons ---

fn explain_no_factors_attempted() -> Explanation {
    Explanation {
        title: "No Factors Attempted",
        description: "\
No face, fingerprint, or password input was supplied. Every policy denies an
empty attempt.",
        guidance: "Supply at least one factor.",
        example: None,
    }
}

fn explain_factor_failed() -> Explanation {
    Explanation {
        title: "Factor Failed",
        description: "\
At least one attempted factor did not pass: its score was below the threshold,
the password did not match, or the provider faulted.",
        guidance: "\
Inspect the per-factor `detail` and `error` fields of the report. Provider faults
carry the provider's message.",
        example: None,
    }
}

fn explain_biometric_required() -> Explanation {
    Explanation {
        title: "Biometric Required",
        description: "\
The policy requires a passing face or fingerprint factor and none passed.",
        guidance: "Retry with a clearer capture, or check the enrolled template.",
        example: None,
    }
}

fn explain_password_alone_insufficient() -> Explanation {
    Explanation {
        title: "Password Alone Insufficient",
        description: "\
The password passed but it was the only passing factor while a biometric factor
is required. The result carries the note
\"Password alone insufficient in biometric mode\".",
        guidance: "Supply a face capture or fingerprint in addition to the password.",
        example: None,
    }
}

fn explain_liveness_rejected() -> Explanation {
    Explanation {
        title: "Liveness Rejected",
        description: "\
The liveness detector judged the face capture to be spoofed (or could not judge
it). The attempt was aborted before any factor was evaluated, so the report has
no result block.",
        guidance: "Retake the capture from a live subject.",
        example: None,
    }
}

fn explain_runtime_error() -> Explanation {
    Explanation {
        title: "Runtime Error",
        description: "\
biogate could not run the attempt: the configuration or attempt file was invalid
or unreadable.",
        guidance: "Check stderr for the error chain and fix the input.",
        example: None,
    }
}
