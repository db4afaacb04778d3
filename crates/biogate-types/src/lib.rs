//! Stable DTOs and IDs used across the biogate workspace.
//!
//! This crate is intentionally boring:
//! - factor and result types emitted by the decision engine
//! - the versioned report envelope handed to reporters
//! - stable string IDs for policies and verdict reasons
//! - explain registry for policies and reasons

#![forbid(unsafe_code)]

pub mod explain;
pub mod factor;
pub mod ids;
pub mod receipt;
pub mod result;

pub use explain::{Explanation, lookup_explanation};
pub use factor::{FactorKind, FactorRecord, ScoreKey};
pub use receipt::{
    AppliedThresholds, AuthReport, RunMeta, SCHEMA_REPORT_V1, SessionGrant, ToolMeta, Verdict, VerdictStatus,
};
pub use result::{AcceptancePolicy, AuthResult};
