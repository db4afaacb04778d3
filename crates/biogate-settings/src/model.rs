use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Schema identifier accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "biogate.config.v1";

/// `biogate.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional and unknown keys are
/// ignored so older binaries keep reading newer files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BiogateConfigV1 {
    /// Optional schema string for tooling (`biogate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `standard` (default), `strict`, or `lenient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Acceptance policy: `require_all`, `require_biometric`, or `any_factor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Lifetime of the session granted on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_timeout_secs: Option<u64>,

    /// Per-provider deadline; expiry counts as a provider fault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_timeout_ms: Option<u64>,

    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThresholdsConfig {
    /// Minimum face similarity, 0.0..=1.0. Recommended range 0.5 to 0.7.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<f64>,

    /// Minimum fingerprint match, 0.0..=1.0. Recommended range 0.2 to 0.4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<f64>,
}
