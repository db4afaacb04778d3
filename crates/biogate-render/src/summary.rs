use crate::RenderableReport;
use crate::markdown::verdict_label;

/// Plain-text summary for terminals: verdict, one line per score, and the note.
///
/// Scores are marked `Match` / `No Match` from the pass flag of their factor.
pub fn render_summary(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Subject: {}\n", report.subject));
    out.push_str(&format!("Verdict: {}\n", verdict_label(report.verdict)));

    for s in &report.scores {
        let label = if s.is_match() { "Match" } else { "No Match" };
        out.push_str(&format!("{}: {:.4} ({})\n", s.label, s.value, label));
    }

    if let Some(message) = &report.message {
        out.push_str(&format!("Aborted: {}\n", message));
    }
    if let Some(note) = &report.note {
        out.push_str(&format!("Note: {}\n", note));
    }
    for r in &report.reasons {
        out.push_str(&format!("Reason: {}\n", r));
    }

    out
}
