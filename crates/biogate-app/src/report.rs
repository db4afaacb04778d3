use crate::decide::tool_meta;
use anyhow::Context;
use biogate_render::{RenderableFactor, RenderableReport, RenderableScore, RenderableVerdictStatus};
use biogate_types::{
    AuthReport, RunMeta, SCHEMA_REPORT_V1, ScoreKey, Verdict, VerdictStatus, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<AuthReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse biogate report")
}

pub fn serialize_report(report: &AuthReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &AuthReport) -> RenderableReport {
    let threshold_for = |key: ScoreKey| {
        report.thresholds.map(|t| match key {
            ScoreKey::FaceSimilarity => t.face,
            ScoreKey::FingerprintMatch => t.fingerprint,
        })
    };

    let (policy, attempted, passed, factors, scores, note) = match &report.result {
        Some(r) => (
            Some(r.policy.as_str().to_string()),
            r.factors_attempted,
            r.factors_passed_count,
            r.factors
                .iter()
                .map(|f| RenderableFactor {
                    name: f.kind.as_str().to_string(),
                    passed: f.passed,
                    detail: f.detail.clone(),
                })
                .collect(),
            r.scores
                .iter()
                .map(|(key, value)| RenderableScore {
                    label: key.label().to_string(),
                    value: *value,
                    threshold: threshold_for(*key),
                    passed: r.passed(key.factor()),
                })
                .collect(),
            r.note.clone(),
        ),
        None => (None, 0, 0, Vec::new(), Vec::new(), None),
    };

    RenderableReport {
        subject: report.subject.clone(),
        verdict: match report.verdict.status {
            VerdictStatus::Authenticated => RenderableVerdictStatus::Authenticated,
            VerdictStatus::Denied => RenderableVerdictStatus::Denied,
            VerdictStatus::Aborted => RenderableVerdictStatus::Aborted,
        },
        policy,
        factors_attempted: attempted,
        factors_passed: passed,
        factors,
        scores,
        note,
        reasons: report.verdict.reasons.clone(),
        message: report.verdict.message.clone(),
        session_expires_at: report.session.as_ref().and_then(|s| {
            s.expires_at
                .format(&time::format_description::well_known::Rfc3339)
                .ok()
        }),
    }
}

/// Report written when the tool itself failed (bad config, unreadable attempt).
pub fn runtime_error_report(subject: &str, message: &str) -> AuthReport {
    let now = OffsetDateTime::now_utc();
    AuthReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at: now,
            ended_at: Some(now),
            duration_ms: Some(0),
        },
        subject: subject.to_string(),
        verdict: Verdict {
            status: VerdictStatus::Aborted,
            reasons: vec![ids::REASON_RUNTIME_ERROR.to_string()],
            message: Some(message.to_string()),
        },
        result: None,
        thresholds: None,
        session: None,
        digest: None,
    }
}
