use biogate_types::AuthResult;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 audit digest for one decided attempt.
///
/// Identity fields:
/// - subject
/// - policy
/// - verdict
/// - per factor (canonical order): kind, passed, score (4 places), error
pub fn audit_digest(subject: &str, result: &AuthResult) -> String {
    let mut parts = vec![
        subject.to_string(),
        result.policy.as_str().to_string(),
        result.authenticated.to_string(),
    ];
    for f in &result.factors {
        let score = f
            .score
            .map(|s| format!("{s:.4}"))
            .unwrap_or_else(|| "-".to_string());
        parts.push(format!(
            "{}:{}:{}:{}",
            f.kind,
            f.passed,
            score,
            f.error.as_deref().unwrap_or("")
        ));
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
