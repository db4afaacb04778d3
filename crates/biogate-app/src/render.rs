//! Render use cases: Markdown and terminal summaries from in-memory reports.

use biogate_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    biogate_render::render_markdown(report)
}

pub fn render_summary(report: &RenderableReport) -> String {
    biogate_render::render_summary(report)
}
