//! Shared test utilities for the biogate workspace.
//!
//! `xtask` needs `normalize_nondeterministic` at runtime and the app tests need the stub
//! providers, so neither can live behind `#[cfg(test)]` in a library crate.

mod normalize;
mod stubs;

pub use normalize::normalize_nondeterministic;
pub use stubs::{StubLiveness, StubPasswordVerifier, StubScoreProvider};
