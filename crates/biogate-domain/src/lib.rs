//! Pure authentication decision logic (no IO).
//!
//! Input: per-factor provider outcomes gathered elsewhere.
//! Output: factor records + verdict + scores.

#![forbid(unsafe_code)]

pub mod digest;
pub mod factor;
pub mod model;
pub mod policy;
pub mod report;
pub mod score;
pub mod simple;

mod engine;

pub use engine::{DecisionEngine, decide};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
