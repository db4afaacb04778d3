use thiserror::Error;

/// Failure reported by an external provider.
///
/// The application layer turns every variant into a failed factor record; none of them
/// abort an attempt except when raised by the liveness detector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed evidence: {0}")]
    MalformedEvidence(String),

    #[error("no enrolled template for {0}")]
    TemplateMissing(String),

    #[error("{0}")]
    Other(String),
}
