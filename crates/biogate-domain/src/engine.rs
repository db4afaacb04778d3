use crate::factor;
use crate::model::FactorOutcome;
use crate::policy::Thresholds;
use crate::score::round4;
use biogate_types::{AcceptancePolicy, AuthResult, FactorKind, FactorRecord, ids};
use std::collections::BTreeMap;

/// Decision engine bound to one set of thresholds.
///
/// Construction is the only place thresholds enter; `decide` itself has no failure path.
#[derive(Clone, Debug, Default)]
pub struct DecisionEngine {
    thresholds: Thresholds,
}

impl DecisionEngine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Normalize one provider outcome into a factor record.
    pub fn record(&self, kind: FactorKind, outcome: FactorOutcome) -> FactorRecord {
        factor::record(kind, outcome, &self.thresholds)
    }

    pub fn decide(&self, records: Vec<FactorRecord>, policy: AcceptancePolicy) -> AuthResult {
        decide(records, policy)
    }
}

pub fn decide(mut records: Vec<FactorRecord>, policy: AcceptancePolicy) -> AuthResult {
    records.retain(|r| r.attempted);
    // Canonical order regardless of completion order.
    records.sort_by_key(|r| r.kind);
    let records = collapse_duplicates(records);

    let passed: Vec<FactorKind> = records.iter().filter(|r| r.passed).map(|r| r.kind).collect();
    let attempted = records.len();

    let authenticated = match policy {
        AcceptancePolicy::RequireAll => attempted > 0 && passed.len() == attempted,
        AcceptancePolicy::RequireBiometric => passed.iter().any(|k| k.is_biometric()),
        AcceptancePolicy::AnyFactor => !passed.is_empty(),
    };

    // Annotation only: never turns a true verdict into false.
    let note = (policy == AcceptancePolicy::RequireBiometric
        && !authenticated
        && passed == [FactorKind::Password])
        .then(|| ids::NOTE_PASSWORD_ALONE_INSUFFICIENT.to_string());

    let scores: BTreeMap<_, _> = records
        .iter()
        .filter_map(|r| Some((r.kind.score_key()?, round4(r.score?))))
        .collect();

    AuthResult {
        authenticated,
        policy,
        factors_attempted: attempted as u32,
        factors_passed_count: passed.len() as u32,
        factors: records,
        scores,
        note,
    }
}

/// One record per factor. Conflicting records for the same kind fail that factor.
fn collapse_duplicates(records: Vec<FactorRecord>) -> Vec<FactorRecord> {
    let mut out: Vec<FactorRecord> = Vec::with_capacity(records.len());
    for r in records {
        match out.last_mut() {
            Some(last) if last.kind == r.kind => {
                *last = factor::fault_record(r.kind, format!("duplicate {} records", r.kind));
            }
            _ => out.push(r),
        }
    }
    out
}
