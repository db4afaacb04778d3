//! Embeddable surface of biogate.
//!
//! Re-exports the pure decision engine, the stable report types, and the provider
//! ports so callers can depend on a single crate. The CLI and the async
//! orchestration live in `biogate-app`.

#![forbid(unsafe_code)]

pub use biogate_domain::model::FactorOutcome;
pub use biogate_domain::policy::{EffectiveConfig, Thresholds};
pub use biogate_domain::simple::simple_verdict;
pub use biogate_domain::{DecisionEngine, decide};
pub use biogate_providers::{
    Evidence, LivenessDetector, PasswordVerifier, ProviderError, ScoreProvider, ScoreReport,
    Secret,
};
pub use biogate_types::{
    AcceptancePolicy, AuthReport, AuthResult, FactorKind, FactorRecord, ScoreKey, Verdict,
    VerdictStatus, ids,
};

/// Modules for callers that need more than the common re-exports.
pub mod domain {
    pub use biogate_domain::*;
}

pub mod types {
    pub use biogate_types::*;
}
