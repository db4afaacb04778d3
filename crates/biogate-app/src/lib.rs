//! Use case orchestration for biogate.
//!
//! This crate provides the application layer: use cases that coordinate the providers,
//! the decision engine, and the renderers. It is intentionally thin and delegates heavy
//! lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod authenticate;
mod decide;
mod explain;
mod render;
mod report;

pub use authenticate::{AuthAttempt, AuthOutcome, Providers, authenticate, authenticate_simple};
pub use decide::{
    DecideInput, DecideOutput, attempt_from_file, build_report, run_decide, run_simple,
    verdict_exit_code,
};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_summary};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
