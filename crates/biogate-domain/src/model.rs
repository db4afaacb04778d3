/// What a score provider produced for one factor, already stripped of transport detail.
///
/// Faults (errors, timeouts) are data here; the engine never sees an error type.
#[derive(Clone, Debug, PartialEq)]
pub enum FactorOutcome {
    /// Numeric verifier (face, fingerprint).
    Scored { passed: bool, score: f64 },
    /// Binary verifier (password).
    Binary { passed: bool },
    Fault { message: String },
}

impl FactorOutcome {
    pub fn fault(message: impl Into<String>) -> Self {
        FactorOutcome::Fault {
            message: message.into(),
        }
    }
}
