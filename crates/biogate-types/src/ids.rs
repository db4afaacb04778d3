//! Stable identifiers for policies, score keys, and verdict reasons.
//!
//! Policy ids and reasons are snake_case tokens; they appear verbatim in reports.

// Policies
pub const POLICY_REQUIRE_ALL: &str = "require_all";
pub const POLICY_REQUIRE_BIOMETRIC: &str = "require_biometric";
pub const POLICY_ANY_FACTOR: &str = "any_factor";

// Factors
pub const FACTOR_FACE: &str = "face";
pub const FACTOR_FINGERPRINT: &str = "fingerprint";
pub const FACTOR_PASSWORD: &str = "password";

// Score keys
pub const SCORE_FACE_SIMILARITY: &str = "face_similarity";
pub const SCORE_FINGERPRINT_MATCH: &str = "fingerprint_match";

// Verdict reasons
pub const REASON_NO_FACTORS_ATTEMPTED: &str = "no_factors_attempted";
pub const REASON_FACTOR_FAILED: &str = "factor_failed";
pub const REASON_BIOMETRIC_REQUIRED: &str = "biometric_required";
pub const REASON_PASSWORD_ALONE_INSUFFICIENT: &str = "password_alone_insufficient";
pub const REASON_LIVENESS_REJECTED: &str = "liveness_rejected";
pub const REASON_RUNTIME_ERROR: &str = "runtime_error";

/// Annotation attached to a biometric-mode result when only the password passed.
pub const NOTE_PASSWORD_ALONE_INSUFFICIENT: &str = "Password alone insufficient in biometric mode";
