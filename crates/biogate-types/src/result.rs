use crate::factor::{FactorKind, FactorRecord, ScoreKey};
use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Rule combining per-factor outcomes into the final verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AcceptancePolicy {
    /// Every attempted factor must pass (and at least one must be attempted).
    RequireAll,
    /// Face or fingerprint must pass; password alone never suffices.
    RequireBiometric,
    /// Any single attempted factor passing is sufficient.
    AnyFactor,
}

impl AcceptancePolicy {
    pub const ALL: [AcceptancePolicy; 3] = [
        AcceptancePolicy::RequireAll,
        AcceptancePolicy::RequireBiometric,
        AcceptancePolicy::AnyFactor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AcceptancePolicy::RequireAll => ids::POLICY_REQUIRE_ALL,
            AcceptancePolicy::RequireBiometric => ids::POLICY_REQUIRE_BIOMETRIC,
            AcceptancePolicy::AnyFactor => ids::POLICY_ANY_FACTOR,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }
}

impl fmt::Display for AcceptancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision engine's sole output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuthResult {
    pub authenticated: bool,
    pub policy: AcceptancePolicy,

    /// Canonical order: face, fingerprint, password.
    pub factors: Vec<FactorRecord>,

    /// Numeric scores rounded to 4 decimals, keyed by factor score key.
    #[serde(default)]
    pub scores: BTreeMap<ScoreKey, f64>,

    pub factors_attempted: u32,
    pub factors_passed_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AuthResult {
    pub fn factor(&self, kind: FactorKind) -> Option<&FactorRecord> {
        self.factors.iter().find(|f| f.kind == kind)
    }

    /// True when `kind` was attempted and passed.
    pub fn passed(&self, kind: FactorKind) -> bool {
        self.factor(kind).is_some_and(|f| f.passed)
    }

    pub fn passed_kinds(&self) -> impl Iterator<Item = FactorKind> + '_ {
        self.factors.iter().filter(|f| f.passed).map(|f| f.kind)
    }
}
