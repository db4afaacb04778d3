use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One independent piece of authentication evidence.
///
/// The derived ordering is the canonical evaluation order: face, fingerprint, password.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Face,
    Fingerprint,
    Password,
}

impl FactorKind {
    pub const ALL: [FactorKind; 3] = [
        FactorKind::Face,
        FactorKind::Fingerprint,
        FactorKind::Password,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FactorKind::Face => ids::FACTOR_FACE,
            FactorKind::Fingerprint => ids::FACTOR_FINGERPRINT,
            FactorKind::Password => ids::FACTOR_PASSWORD,
        }
    }

    pub fn is_biometric(self) -> bool {
        matches!(self, FactorKind::Face | FactorKind::Fingerprint)
    }

    /// The key under which this factor's numeric score is reported, if it has one.
    pub fn score_key(self) -> Option<ScoreKey> {
        match self {
            FactorKind::Face => Some(ScoreKey::FaceSimilarity),
            FactorKind::Fingerprint => Some(ScoreKey::FingerprintMatch),
            FactorKind::Password => None,
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of score keys; one per numeric factor.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKey {
    FaceSimilarity,
    FingerprintMatch,
}

impl ScoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreKey::FaceSimilarity => ids::SCORE_FACE_SIMILARITY,
            ScoreKey::FingerprintMatch => ids::SCORE_FINGERPRINT_MATCH,
        }
    }

    pub fn factor(self) -> FactorKind {
        match self {
            ScoreKey::FaceSimilarity => FactorKind::Face,
            ScoreKey::FingerprintMatch => FactorKind::Fingerprint,
        }
    }

    /// Human label used by reporters ("Face Similarity").
    pub fn label(self) -> &'static str {
        match self {
            ScoreKey::FaceSimilarity => "Face Similarity",
            ScoreKey::FingerprintMatch => "Fingerprint Match",
        }
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized outcome of one attempted factor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FactorRecord {
    pub kind: FactorKind,
    /// Always true once a record exists; kept for consumers that render every factor.
    pub attempted: bool,
    pub passed: bool,

    /// Rounded to 4 decimals. Absent for binary factors (password).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Human-readable explanation of the outcome.
    pub detail: String,

    /// Provider fault message, when the provider could not produce a verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FactorRecord {
    pub fn is_fault(&self) -> bool {
        self.error.is_some()
    }
}
