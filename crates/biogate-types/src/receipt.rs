use crate::result::AuthResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for biogate reports.
pub const SCHEMA_REPORT_V1: &str = "biogate.report.v1";

/// Overall status of one authentication attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Authenticated,
    Denied,
    /// The attempt never reached the decision engine (liveness rejection, runtime error).
    Aborted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub status: VerdictStatus,
    /// Snake_case reason tokens (see `ids::REASON_*`).
    #[serde(default)]
    pub reasons: Vec<String>,
    /// Human-readable detail for aborted attempts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Session window granted to an authenticated subject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionGrant {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub timeout_secs: u64,
}

/// Thresholds in effect for the attempt, recorded for reporters and audit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AppliedThresholds {
    pub face: f64,
    pub fingerprint: f64,
}

/// Envelope handed to result reporters.
///
/// `result` is absent when the attempt was aborted before any factor was evaluated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuthReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub subject: String,
    pub verdict: Verdict,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AuthResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<AppliedThresholds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionGrant>,

    /// SHA-256 audit digest over the per-factor outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn aborted_report_omits_result_session_and_digest() {
        let report = AuthReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "biogate".to_string(),
                version: "0.1.0".to_string(),
            },
            run: RunMeta {
                started_at: datetime!(2026-01-02 03:04:05 UTC),
                ended_at: None,
                duration_ms: None,
            },
            subject: "alice".to_string(),
            verdict: Verdict {
                status: VerdictStatus::Aborted,
                reasons: vec![crate::ids::REASON_LIVENESS_REJECTED.to_string()],
                message: Some("liveness check failed".to_string()),
            },
            result: None,
            thresholds: None,
            session: None,
            digest: None,
        };

        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["verdict"]["status"], "aborted");
        assert_eq!(value["verdict"]["message"], "liveness check failed");
        assert_eq!(value["run"]["started_at"], "2026-01-02T03:04:05Z");
        assert!(value.get("result").is_none());
        assert!(value.get("thresholds").is_none());
        assert!(value.get("session").is_none());
        assert!(value.get("digest").is_none());
    }
}
