use crate::{RenderableReport, RenderableVerdictStatus};

pub(crate) fn verdict_label(verdict: RenderableVerdictStatus) -> &'static str {
    match verdict {
        RenderableVerdictStatus::Authenticated => "AUTHENTICATED",
        RenderableVerdictStatus::Denied => "DENIED",
        RenderableVerdictStatus::Aborted => "ABORTED",
    }
}

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Biogate authentication report\n\n");
    out.push_str(&format!("- Subject: `{}`\n", report.subject));
    out.push_str(&format!("- Verdict: **{}**\n", verdict_label(report.verdict)));
    if let Some(policy) = &report.policy {
        out.push_str(&format!("- Policy: `{}`\n", policy));
    }
    out.push_str(&format!(
        "- Factors: {} (attempted) / {} (passed)\n\n",
        report.factors_attempted, report.factors_passed
    ));

    if let Some(message) = &report.message {
        out.push_str(&format!("> Aborted: {}\n\n", message));
    }
    if let Some(note) = &report.note {
        out.push_str(&format!("> Note: {}\n\n", note));
    }

    if report.factors.is_empty() {
        out.push_str("No factors attempted.\n");
    } else {
        out.push_str("## Factors\n\n");
        out.push_str("| Factor | Result | Detail |\n");
        out.push_str("|---|---|---|\n");
        for f in &report.factors {
            let result = if f.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                f.name,
                result,
                escape_cell(&f.detail)
            ));
        }
    }

    if !report.scores.is_empty() {
        out.push_str("\n## Scores\n\n");
        for s in &report.scores {
            out.push_str(&format!("- {}: {:.4}\n", s.label, s.value));
        }
    }

    if !report.reasons.is_empty() {
        out.push_str("\n## Reasons\n\n");
        for r in &report.reasons {
            out.push_str(&format!("- `{}`\n", r));
        }
    }

    if let Some(expires_at) = &report.session_expires_at {
        out.push_str(&format!("\nSession expires at {}.\n", expires_at));
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
