#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Authenticated,
    Denied,
    Aborted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableFactor {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableScore {
    /// Human label, e.g. "Face Similarity".
    pub label: String,
    pub value: f64,
    /// Threshold the score was judged against, when known.
    pub threshold: Option<f64>,
    /// Whether the factor behind this score passed.
    pub passed: bool,
}

impl RenderableScore {
    /// Follows the factor's own verdict, not a re-comparison of the rounded value.
    pub fn is_match(&self) -> bool {
        self.passed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub subject: String,
    pub verdict: RenderableVerdictStatus,
    pub policy: Option<String>,
    pub factors_attempted: u32,
    pub factors_passed: u32,
    pub factors: Vec<RenderableFactor>,
    pub scores: Vec<RenderableScore>,
    pub note: Option<String>,
    pub reasons: Vec<String>,
    /// Why the attempt was aborted, if it was.
    pub message: Option<String>,
    pub session_expires_at: Option<String>,
}
