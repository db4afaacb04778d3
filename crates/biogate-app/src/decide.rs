//! The `decide` use case: resolve config, replay a recorded attempt, and produce a report.

use crate::authenticate::{AuthAttempt, AuthOutcome, Providers, authenticate, authenticate_simple};
use anyhow::Context;
use biogate_domain::DecisionEngine;
use biogate_domain::digest::audit_digest;
use biogate_domain::policy::EffectiveConfig;
use biogate_domain::report::{verdict_reasons, verdict_status};
use biogate_providers::recorded::{AttemptFile, parse_attempt_json};
use biogate_settings::{Overrides, ResolvedConfig};
use biogate_types::{
    AppliedThresholds, AuthReport, RunMeta, SCHEMA_REPORT_V1, SessionGrant, ToolMeta, Verdict,
    VerdictStatus, ids,
};
use std::time::Duration;
use time::OffsetDateTime;

/// Input for the decide use case.
#[derive(Clone, Debug)]
pub struct DecideInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Recorded attempt JSON.
    pub attempt_text: &'a str,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    pub report: AuthReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the decide use case: parse config, resolve, replay the attempt, build the report.
pub async fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve(input.config_text, input.overrides)?;
    let file = parse_attempt_json(input.attempt_text).context("parse attempt file")?;
    let attempt = attempt_from_file(&file)?;

    let effective = &resolved.effective;
    let engine = DecisionEngine::new(effective.thresholds);
    let outcome = authenticate(
        &engine,
        &Providers::recorded(),
        &attempt,
        effective.policy,
        Duration::from_millis(effective.provider_timeout_ms),
    )
    .await;

    let report = build_report(&attempt.user, outcome, effective, started_at);
    Ok(DecideOutput {
        report,
        resolved_config: resolved,
    })
}

/// Run the simplified two-state rule over a recorded attempt.
pub async fn run_simple(input: DecideInput<'_>) -> anyhow::Result<bool> {
    let resolved = resolve(input.config_text, input.overrides)?;
    let file = parse_attempt_json(input.attempt_text).context("parse attempt file")?;
    let attempt = attempt_from_file(&file)?;

    let effective = &resolved.effective;
    let engine = DecisionEngine::new(effective.thresholds);
    Ok(authenticate_simple(
        &engine,
        &Providers::recorded(),
        &attempt,
        Duration::from_millis(effective.provider_timeout_ms),
    )
    .await)
}

fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    // Empty config is allowed; the standard profile applies.
    let cfg = if config_text.trim().is_empty() {
        biogate_settings::BiogateConfigV1::default()
    } else {
        biogate_settings::parse_config_toml(config_text).context("parse config")?
    };
    biogate_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Turn a recorded attempt file into the inputs the providers see.
pub fn attempt_from_file(file: &AttemptFile) -> anyhow::Result<AuthAttempt> {
    Ok(AuthAttempt {
        user: file.user.clone(),
        face: file.face_evidence().context("encode face entry")?,
        fingerprint: file
            .fingerprint_evidence()
            .context("encode fingerprint entry")?,
        password: file.password_secret().context("encode password entry")?,
    })
}

/// Wrap an authentication outcome in the versioned report envelope.
pub fn build_report(
    subject: &str,
    outcome: AuthOutcome,
    effective: &EffectiveConfig,
    started_at: OffsetDateTime,
) -> AuthReport {
    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;

    let (verdict, result) = match outcome {
        AuthOutcome::Decided(result) => (
            Verdict {
                status: verdict_status(&result),
                reasons: verdict_reasons(&result)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                message: None,
            },
            Some(result),
        ),
        AuthOutcome::LivenessRejected { reason } => (
            Verdict {
                status: VerdictStatus::Aborted,
                reasons: vec![ids::REASON_LIVENESS_REJECTED.to_string()],
                message: Some(reason),
            },
            None,
        ),
    };

    let session = result
        .as_ref()
        .filter(|r| r.authenticated)
        .and_then(|_| session_grant(ended_at, effective.session_timeout_secs));
    let digest = result.as_ref().map(|r| audit_digest(subject, r));

    AuthReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at,
            ended_at: Some(ended_at),
            duration_ms: Some(duration_ms),
        },
        subject: subject.to_string(),
        verdict,
        result,
        thresholds: Some(AppliedThresholds {
            face: effective.thresholds.face,
            fingerprint: effective.thresholds.fingerprint,
        }),
        session,
        digest,
    }
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "biogate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn session_grant(ended_at: OffsetDateTime, timeout_secs: u64) -> Option<SessionGrant> {
    let secs = i64::try_from(timeout_secs).ok()?;
    let expires_at = ended_at.checked_add(time::Duration::seconds(secs))?;
    Some(SessionGrant {
        expires_at,
        timeout_secs,
    })
}

/// Map verdict to exit code: 0 = authenticated, 2 = denied, 3 = aborted.
pub fn verdict_exit_code(status: VerdictStatus) -> i32 {
    match status {
        VerdictStatus::Authenticated => 0,
        VerdictStatus::Denied => 2,
        VerdictStatus::Aborted => 3,
    }
}
