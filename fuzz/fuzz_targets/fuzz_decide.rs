//! Fuzz target for the decision engine.
//!
//! Arbitrary provider outcomes (including NaN and out-of-range scores) must always
//! produce a well-formed result.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_decide
//! ```

#![no_main]

use arbitrary::Arbitrary;
use biogate_domain::DecisionEngine;
use biogate_domain::model::FactorOutcome;
use biogate_types::{AcceptancePolicy, FactorKind};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Outcome {
    Scored { passed: bool, score: f64 },
    Binary { passed: bool },
    Fault { message: String },
}

#[derive(Arbitrary, Debug)]
struct DecideInput {
    face: Option<Outcome>,
    fingerprint: Option<Outcome>,
    password: Option<Outcome>,
    policy: u8,
}

fn to_outcome(o: Outcome) -> FactorOutcome {
    match o {
        Outcome::Scored { passed, score } => FactorOutcome::Scored { passed, score },
        Outcome::Binary { passed } => FactorOutcome::Binary { passed },
        Outcome::Fault { message } => FactorOutcome::Fault { message },
    }
}

fuzz_target!(|input: DecideInput| {
    let policy = match input.policy % 3 {
        0 => AcceptancePolicy::RequireAll,
        1 => AcceptancePolicy::RequireBiometric,
        _ => AcceptancePolicy::AnyFactor,
    };

    let engine = DecisionEngine::default();
    let records = [
        (FactorKind::Face, input.face),
        (FactorKind::Fingerprint, input.fingerprint),
        (FactorKind::Password, input.password),
    ]
    .into_iter()
    .filter_map(|(kind, o)| o.map(|o| engine.record(kind, to_outcome(o))))
    .collect();

    let result = engine.decide(records, policy);

    assert!(result.factors_passed_count <= result.factors_attempted);
    assert_eq!(result.factors_attempted as usize, result.factors.len());
    if result.factors.is_empty() {
        assert!(!result.authenticated);
    }
    for score in result.scores.values() {
        assert!(score.is_finite());
    }
});
