//! Provider ports for biogate and a recorded replay adapter set.
//!
//! The decision engine never talks to a matcher directly. The application layer calls
//! these traits, converts whatever comes back into a factor outcome, and hands that to
//! the engine. Real deployments plug in their own face/fingerprint matchers and password
//! store; the `recorded` adapters replay canned responses from an attempt file.

#![forbid(unsafe_code)]

mod error;
mod provider;
pub mod recorded;

pub use error::ProviderError;
pub use provider::{Evidence, LivenessDetector, PasswordVerifier, ScoreProvider, ScoreReport, Secret};
