//! Replay adapters driven by a recorded attempt file.
//!
//! An attempt file describes what each provider should answer:
//!
//! ```json
//! {
//!   "user": "alice",
//!   "face": { "score": 0.71, "live": true },
//!   "fingerprint": { "error": "template missing" },
//!   "password": { "passed": true }
//! }
//! ```
//!
//! Each present entry is serialized back to JSON and travels through the ports as the
//! factor's evidence (or, for the password, as the secret). The recorded providers decode
//! it on the other side, so the application layer exercises exactly the same code path
//! it would with real matchers.

use crate::error::ProviderError;
use crate::provider::{
    Evidence, LivenessDetector, PasswordVerifier, ScoreProvider, ScoreReport, Secret,
};
use async_trait::async_trait;
use biogate_domain::policy::meets_threshold;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Recorded response of a numeric matcher (face or fingerprint).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Fault message the provider raises instead of scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// `false` makes the provider report a missing template for the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    /// Liveness answer for a face capture. Defaults to live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness_error: Option<String>,
}

/// Recorded response of the password verifier.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

/// One recorded authentication attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttemptFile {
    pub user: String,
    #[serde(default)]
    pub face: Option<ScoreEntry>,
    #[serde(default)]
    pub fingerprint: Option<ScoreEntry>,
    #[serde(default)]
    pub password: Option<PasswordEntry>,
}

pub fn parse_attempt_json(text: &str) -> Result<AttemptFile, serde_json::Error> {
    serde_json::from_str(text)
}

impl AttemptFile {
    pub fn face_evidence(&self) -> Result<Option<Evidence>, serde_json::Error> {
        self.face.as_ref().map(encode_evidence).transpose()
    }

    pub fn fingerprint_evidence(&self) -> Result<Option<Evidence>, serde_json::Error> {
        self.fingerprint.as_ref().map(encode_evidence).transpose()
    }

    pub fn password_secret(&self) -> Result<Option<Secret>, serde_json::Error> {
        self.password
            .as_ref()
            .map(|entry| serde_json::to_string(entry).map(Secret::new))
            .transpose()
    }
}

fn encode_evidence(entry: &ScoreEntry) -> Result<Evidence, serde_json::Error> {
    serde_json::to_vec(entry).map(Evidence::new)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProviderError> {
    serde_json::from_slice(bytes).map_err(|e| ProviderError::MalformedEvidence(e.to_string()))
}

async fn delay(delay_ms: Option<u64>) {
    if let Some(ms) = delay_ms.filter(|ms| *ms > 0) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Replays a `ScoreEntry` for face or fingerprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordedScoreProvider;

#[async_trait]
impl ScoreProvider for RecordedScoreProvider {
    async fn verify(
        &self,
        evidence: &Evidence,
        user: &str,
        threshold: f64,
    ) -> Result<ScoreReport, ProviderError> {
        let entry: ScoreEntry = decode(evidence.as_bytes())?;
        delay(entry.delay_ms).await;

        if entry.enrolled == Some(false) {
            return Err(ProviderError::TemplateMissing(user.to_string()));
        }
        if let Some(message) = entry.error {
            return Err(ProviderError::Other(message));
        }
        let score = entry.score.ok_or_else(|| {
            ProviderError::MalformedEvidence("entry has neither score nor error".to_string())
        })?;

        Ok(ScoreReport {
            passed: meets_threshold(score, threshold),
            score,
        })
    }
}

/// Replays a `PasswordEntry` carried in the secret.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordedPasswordVerifier;

#[async_trait]
impl PasswordVerifier for RecordedPasswordVerifier {
    async fn verify(&self, _user: &str, secret: &Secret) -> Result<bool, ProviderError> {
        let entry: PasswordEntry = decode(secret.expose().as_bytes())?;
        delay(entry.delay_ms).await;

        if let Some(message) = entry.error {
            return Err(ProviderError::Other(message));
        }
        Ok(entry.passed.unwrap_or(false))
    }
}

/// Reads the `live` / `liveness_error` fields of the face entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordedLiveness;

#[async_trait]
impl LivenessDetector for RecordedLiveness {
    async fn is_live(&self, capture: &Evidence) -> Result<bool, ProviderError> {
        let entry: ScoreEntry = decode(capture.as_bytes())?;
        if let Some(message) = entry.liveness_error {
            return Err(ProviderError::Other(message));
        }
        Ok(entry.live.unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "user": "alice",
        "face": { "score": 0.71, "live": true },
        "fingerprint": { "error": "template missing" },
        "password": { "passed": true }
    }"#;

    #[test]
    fn parses_sample_attempt() {
        let attempt = parse_attempt_json(SAMPLE).expect("parse");
        assert_eq!(attempt.user, "alice");
        assert_eq!(attempt.face.as_ref().and_then(|f| f.score), Some(0.71));
        assert_eq!(
            attempt.fingerprint.as_ref().and_then(|f| f.error.as_deref()),
            Some("template missing")
        );
        assert_eq!(attempt.password.as_ref().and_then(|p| p.passed), Some(true));
    }

    #[test]
    fn null_and_absent_entries_mean_not_supplied() {
        let attempt = parse_attempt_json(r#"{"user":"bob","face":null}"#).expect("parse");
        assert!(attempt.face_evidence().expect("encode").is_none());
        assert!(attempt.fingerprint_evidence().expect("encode").is_none());
        assert!(attempt.password_secret().expect("encode").is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_attempt_json(r#"{"user":"bob","retina":{}}"#).unwrap_err();
        assert!(err.to_string().contains("retina"));
    }

    #[test]
    fn missing_user_is_rejected() {
        assert!(parse_attempt_json(r#"{"face":{"score":0.9}}"#).is_err());
    }

    #[tokio::test]
    async fn score_provider_judges_against_threshold() {
        let attempt = parse_attempt_json(SAMPLE).expect("parse");
        let evidence = attempt.face_evidence().expect("encode").expect("face");

        let strict = RecordedScoreProvider
            .verify(&evidence, "alice", 0.8)
            .await
            .expect("verify");
        assert_eq!(strict, ScoreReport { passed: false, score: 0.71 });

        let lenient = RecordedScoreProvider
            .verify(&evidence, "alice", 0.71)
            .await
            .expect("verify");
        assert!(lenient.passed);
    }

    #[tokio::test]
    async fn score_provider_agrees_with_threshold_policy() {
        use biogate_domain::policy::Thresholds;
        use biogate_types::FactorKind;

        let thresholds = Thresholds::default();
        for score in [0.59996, 0.6, 0.6001, 0.0, 1.0] {
            let evidence = Evidence::new(format!(r#"{{"score":{score}}}"#).into_bytes());
            let report = RecordedScoreProvider
                .verify(&evidence, "alice", thresholds.face)
                .await
                .expect("verify");
            assert_eq!(
                report.passed,
                thresholds.passes(FactorKind::Face, score),
                "score {score}"
            );
        }
    }

    #[tokio::test]
    async fn score_provider_replays_faults() {
        let attempt = parse_attempt_json(SAMPLE).expect("parse");
        let evidence = attempt.fingerprint_evidence().expect("encode").expect("fp");
        let err = RecordedScoreProvider
            .verify(&evidence, "alice", 0.3)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "template missing");
    }

    #[tokio::test]
    async fn unenrolled_user_reports_missing_template() {
        let evidence = Evidence::new(br#"{"score":0.9,"enrolled":false}"#.to_vec());
        let err = RecordedScoreProvider
            .verify(&evidence, "carol", 0.3)
            .await
            .unwrap_err();
        assert_eq!(err, ProviderError::TemplateMissing("carol".to_string()));
    }

    #[tokio::test]
    async fn garbage_evidence_is_malformed() {
        let err = RecordedScoreProvider
            .verify(&Evidence::new(b"\xff\x00".to_vec()), "alice", 0.3)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MalformedEvidence(_)));

        let empty_entry = RecordedScoreProvider
            .verify(&Evidence::new(b"{}".to_vec()), "alice", 0.3)
            .await
            .unwrap_err();
        assert!(matches!(empty_entry, ProviderError::MalformedEvidence(_)));
    }

    #[tokio::test]
    async fn password_verifier_replays_entry() {
        let attempt = parse_attempt_json(SAMPLE).expect("parse");
        let secret = attempt.password_secret().expect("encode").expect("password");
        let ok = RecordedPasswordVerifier
            .verify("alice", &secret)
            .await
            .expect("verify");
        assert!(ok);

        let missing_flag = RecordedPasswordVerifier
            .verify("alice", &Secret::new("{}"))
            .await
            .expect("verify");
        assert!(!missing_flag);
    }

    #[tokio::test]
    async fn liveness_defaults_to_live() {
        let live = RecordedLiveness
            .is_live(&Evidence::new(br#"{"score":0.9}"#.to_vec()))
            .await
            .expect("liveness");
        assert!(live);

        let spoof = RecordedLiveness
            .is_live(&Evidence::new(br#"{"score":0.9,"live":false}"#.to_vec()))
            .await
            .expect("liveness");
        assert!(!spoof);

        let fault = RecordedLiveness
            .is_live(&Evidence::new(br#"{"liveness_error":"sensor glare"}"#.to_vec()))
            .await
            .unwrap_err();
        assert_eq!(fault.to_string(), "sensor glare");
    }
}
