//! Rendering utilities for human-facing surfaces (Markdown reports, terminal summaries).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod summary;

pub use markdown::render_markdown;
pub use model::{RenderableFactor, RenderableReport, RenderableScore, RenderableVerdictStatus};
pub use summary::render_summary;
