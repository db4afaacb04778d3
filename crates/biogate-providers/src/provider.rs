use crate::error::ProviderError;
use async_trait::async_trait;
use std::fmt;

/// Opaque capture bytes (face image, fingerprint scan) handed to a provider.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Evidence(Vec<u8>);

impl Evidence {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Empty evidence is treated as "not supplied".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evidence({} bytes)", self.0.len())
    }
}

/// A password as typed by the subject. Never printed.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Secret(String);

impl Secret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

/// What a numeric matcher reports: the raw score and its own pass decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreReport {
    pub passed: bool,
    pub score: f64,
}

/// Face or fingerprint matcher.
///
/// The provider compares `evidence` against the template enrolled for `user` and decides
/// `passed` against the threshold it is given.
#[async_trait]
pub trait ScoreProvider: Send + Sync {
    async fn verify(
        &self,
        evidence: &Evidence,
        user: &str,
        threshold: f64,
    ) -> Result<ScoreReport, ProviderError>;
}

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    async fn verify(&self, user: &str, secret: &Secret) -> Result<bool, ProviderError>;
}

/// Anti-spoofing check run on the face capture before any factor is evaluated.
#[async_trait]
pub trait LivenessDetector: Send + Sync {
    async fn is_live(&self, capture: &Evidence) -> Result<bool, ProviderError>;
}
