//! Factor records: the pure half of factor evaluation.
//!
//! Provider invocation lives in the application layer; this module turns whatever the
//! provider produced into a normalized `FactorRecord`.

use crate::model::FactorOutcome;
use crate::policy::Thresholds;
use crate::score::round4;
use biogate_types::{FactorKind, FactorRecord};

pub fn record(kind: FactorKind, outcome: FactorOutcome, thresholds: &Thresholds) -> FactorRecord {
    match outcome {
        FactorOutcome::Scored { score, .. } if !score.is_finite() => fault_record(
            kind,
            format!("{kind} provider returned a non-finite score"),
        ),
        FactorOutcome::Scored { passed, score } => match kind.score_key() {
            Some(_) => scored_record(kind, passed, round4(score), thresholds),
            None => binary_record(kind, passed),
        },
        FactorOutcome::Binary { .. } if kind.score_key().is_some() => {
            fault_record(kind, format!("{kind} provider returned no score"))
        }
        FactorOutcome::Binary { passed } => binary_record(kind, passed),
        FactorOutcome::Fault { message } => fault_record(kind, message),
    }
}

fn scored_record(
    kind: FactorKind,
    passed: bool,
    score: f64,
    thresholds: &Thresholds,
) -> FactorRecord {
    let label = score_label(kind);
    let detail = if passed {
        format!("verified ({label}: {score:.4})")
    } else {
        match thresholds.for_kind(kind) {
            Some(threshold) => format!("failed ({label}: {score:.4}, threshold: {threshold})"),
            None => format!("failed ({label}: {score:.4})"),
        }
    };

    FactorRecord {
        kind,
        attempted: true,
        passed,
        score: Some(score),
        detail,
        error: None,
    }
}

fn binary_record(kind: FactorKind, passed: bool) -> FactorRecord {
    FactorRecord {
        kind,
        attempted: true,
        passed,
        score: None,
        detail: if passed { "verified" } else { "failed" }.to_string(),
        error: None,
    }
}

pub(crate) fn fault_record(kind: FactorKind, message: String) -> FactorRecord {
    FactorRecord {
        kind,
        attempted: true,
        passed: false,
        score: kind.score_key().map(|_| 0.0),
        detail: format!("error: {message}"),
        error: Some(message),
    }
}

fn score_label(kind: FactorKind) -> &'static str {
    match kind {
        FactorKind::Face => "similarity",
        FactorKind::Fingerprint => "match",
        FactorKind::Password => "score",
    }
}
