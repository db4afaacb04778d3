//! Stub provider adapters with call counters and optional delays.

use async_trait::async_trait;
use biogate_providers::{
    Evidence, LivenessDetector, PasswordVerifier, ProviderError, ScoreProvider, ScoreReport, Secret,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug)]
enum ScoreResponse {
    /// Judged against whatever threshold the caller passes.
    Score(f64),
    /// Returned verbatim, pass flag included.
    Report(ScoreReport),
    Fault(ProviderError),
}

#[derive(Debug)]
pub struct StubScoreProvider {
    response: ScoreResponse,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_threshold: Mutex<Option<f64>>,
}

impl StubScoreProvider {
    fn new(response: ScoreResponse) -> Self {
        Self {
            response,
            delay: None,
            calls: AtomicUsize::new(0),
            last_threshold: Mutex::new(None),
        }
    }

    pub fn scoring(score: f64) -> Self {
        Self::new(ScoreResponse::Score(score))
    }

    pub fn reporting(report: ScoreReport) -> Self {
        Self::new(ScoreResponse::Report(report))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::new(ScoreResponse::Fault(error))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Threshold passed on the most recent call.
    pub fn last_threshold(&self) -> Option<f64> {
        self.last_threshold.lock().ok().and_then(|g| *g)
    }
}

#[async_trait]
impl ScoreProvider for StubScoreProvider {
    async fn verify(
        &self,
        _evidence: &Evidence,
        _user: &str,
        threshold: f64,
    ) -> Result<ScoreReport, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_threshold.lock() {
            *last = Some(threshold);
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            ScoreResponse::Score(score) => Ok(ScoreReport {
                passed: *score >= threshold,
                score: *score,
            }),
            ScoreResponse::Report(report) => Ok(*report),
            ScoreResponse::Fault(error) => Err(error.clone()),
        }
    }
}

#[derive(Debug)]
pub struct StubPasswordVerifier {
    expected: Result<String, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubPasswordVerifier {
    /// Accepts exactly `secret`.
    pub fn accepting(secret: impl Into<String>) -> Self {
        Self {
            expected: Ok(secret.into()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            expected: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordVerifier for StubPasswordVerifier {
    async fn verify(&self, _user: &str, secret: &Secret) -> Result<bool, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.expected {
            Ok(expected) => Ok(secret.expose() == expected),
            Err(error) => Err(error.clone()),
        }
    }
}

#[derive(Debug)]
pub struct StubLiveness {
    answer: Result<bool, ProviderError>,
    calls: AtomicUsize,
}

impl StubLiveness {
    pub fn live() -> Self {
        Self::answering(Ok(true))
    }

    pub fn spoofed() -> Self {
        Self::answering(Ok(false))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(answer: Result<bool, ProviderError>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LivenessDetector for StubLiveness {
    async fn is_live(&self, _capture: &Evidence) -> Result<bool, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}
