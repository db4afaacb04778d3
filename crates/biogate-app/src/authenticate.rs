//! The `authenticate` use case: liveness gate, concurrent factor evaluation, decision.

use biogate_domain::DecisionEngine;
use biogate_domain::model::FactorOutcome;
use biogate_domain::simple::simple_verdict;
use biogate_providers::recorded::{
    RecordedLiveness, RecordedPasswordVerifier, RecordedScoreProvider,
};
use biogate_providers::{
    Evidence, LivenessDetector, PasswordVerifier, ProviderError, ScoreProvider, Secret,
};
use biogate_types::{AcceptancePolicy, AuthResult, FactorKind, FactorRecord};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The provider adapters one attempt runs against. Any of them may be missing.
#[derive(Clone, Default)]
pub struct Providers {
    pub face: Option<Arc<dyn ScoreProvider>>,
    pub fingerprint: Option<Arc<dyn ScoreProvider>>,
    pub password: Option<Arc<dyn PasswordVerifier>>,
    pub liveness: Option<Arc<dyn LivenessDetector>>,
}

impl Providers {
    /// Replay adapters that decode recorded attempt entries.
    pub fn recorded() -> Self {
        Self {
            face: Some(Arc::new(RecordedScoreProvider)),
            fingerprint: Some(Arc::new(RecordedScoreProvider)),
            password: Some(Arc::new(RecordedPasswordVerifier)),
            liveness: Some(Arc::new(RecordedLiveness)),
        }
    }
}

/// What the subject presented. Absent or empty inputs are skipped.
#[derive(Clone, Debug, Default)]
pub struct AuthAttempt {
    pub user: String,
    pub face: Option<Evidence>,
    pub fingerprint: Option<Evidence>,
    pub password: Option<Secret>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    Decided(AuthResult),
    /// The face capture failed the anti-spoofing check; no factor was evaluated.
    LivenessRejected { reason: String },
}

pub async fn authenticate(
    engine: &DecisionEngine,
    providers: &Providers,
    attempt: &AuthAttempt,
    policy: AcceptancePolicy,
    timeout: Duration,
) -> AuthOutcome {
    let face = supplied(attempt.face.as_ref());
    let fingerprint = supplied(attempt.fingerprint.as_ref());
    let password = attempt.password.as_ref().filter(|s| !s.is_empty());

    if let Some(capture) = face
        && let Err(reason) = check_liveness(providers.liveness.as_deref(), capture, timeout).await
    {
        warn!(user = %attempt.user, %reason, "liveness gate rejected attempt");
        return AuthOutcome::LivenessRejected { reason };
    }

    let thresholds = *engine.thresholds();
    let user = attempt.user.as_str();

    let (face, fingerprint, password) = futures::join!(
        score_factor(
            FactorKind::Face,
            providers.face.as_deref(),
            face,
            user,
            thresholds.face,
            timeout,
        ),
        score_factor(
            FactorKind::Fingerprint,
            providers.fingerprint.as_deref(),
            fingerprint,
            user,
            thresholds.fingerprint,
            timeout,
        ),
        password_factor(providers.password.as_deref(), password, user, timeout),
    );

    let records: Vec<FactorRecord> = [
        (FactorKind::Face, face),
        (FactorKind::Fingerprint, fingerprint),
        (FactorKind::Password, password),
    ]
    .into_iter()
    .filter_map(|(kind, outcome)| outcome.map(|o| engine.record(kind, o)))
    .inspect(|r| {
        if let Some(error) = &r.error {
            warn!(factor = %r.kind, %error, "provider fault");
        }
        debug!(factor = %r.kind, passed = r.passed, score = ?r.score, "factor evaluated");
    })
    .collect();

    let result = engine.decide(records, policy);
    info!(
        user = %attempt.user,
        %policy,
        authenticated = result.authenticated,
        attempted = result.factors_attempted,
        passed = result.factors_passed_count,
        "authentication decided"
    );
    AuthOutcome::Decided(result)
}

/// Fixed-rule variant: both biometrics, or the password on its own.
///
/// Factors are evaluated under `AnyFactor`; a liveness rejection is simply `false`.
pub async fn authenticate_simple(
    engine: &DecisionEngine,
    providers: &Providers,
    attempt: &AuthAttempt,
    timeout: Duration,
) -> bool {
    match authenticate(engine, providers, attempt, AcceptancePolicy::AnyFactor, timeout).await {
        AuthOutcome::Decided(result) => simple_verdict(&result),
        AuthOutcome::LivenessRejected { .. } => false,
    }
}

fn supplied(evidence: Option<&Evidence>) -> Option<&Evidence> {
    evidence.filter(|e| !e.is_empty())
}

/// `Ok(())` when the capture is live. Faults, timeouts and a missing detector reject.
async fn check_liveness(
    detector: Option<&dyn LivenessDetector>,
    capture: &Evidence,
    timeout: Duration,
) -> Result<(), String> {
    let Some(detector) = detector else {
        return Err("no liveness detector configured".to_string());
    };
    match with_deadline("liveness", timeout, detector.is_live(capture)).await {
        Ok(true) => Ok(()),
        Ok(false) => Err("liveness check failed".to_string()),
        Err(message) => Err(format!("liveness check error: {message}")),
    }
}

async fn score_factor(
    kind: FactorKind,
    provider: Option<&dyn ScoreProvider>,
    evidence: Option<&Evidence>,
    user: &str,
    threshold: f64,
    timeout: Duration,
) -> Option<FactorOutcome> {
    let evidence = evidence?;
    let Some(provider) = provider else {
        return Some(FactorOutcome::fault(format!("no {kind} provider configured")));
    };
    let call = provider.verify(evidence, user, threshold);
    let outcome = match with_deadline(kind.as_str(), timeout, call).await {
        Ok(report) => FactorOutcome::Scored {
            passed: report.passed,
            score: report.score,
        },
        Err(message) => FactorOutcome::fault(message),
    };
    Some(outcome)
}

async fn password_factor(
    verifier: Option<&dyn PasswordVerifier>,
    secret: Option<&Secret>,
    user: &str,
    timeout: Duration,
) -> Option<FactorOutcome> {
    let secret = secret?;
    let Some(verifier) = verifier else {
        return Some(FactorOutcome::fault("no password provider configured"));
    };
    let call = verifier.verify(user, secret);
    let outcome = match with_deadline(FactorKind::Password.as_str(), timeout, call).await {
        Ok(passed) => FactorOutcome::Binary { passed },
        Err(message) => FactorOutcome::fault(message),
    };
    Some(outcome)
}

/// Await a provider call, turning both its error and an expired deadline into a message.
async fn with_deadline<T>(
    name: &str,
    timeout: Duration,
    call: impl Future<Output = Result<T, ProviderError>>,
) -> Result<T, String> {
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(error.to_string()),
        Err(_) => Err(format!(
            "{name} provider timed out after {}ms",
            timeout.as_millis()
        )),
    }
}
