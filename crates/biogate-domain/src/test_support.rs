use crate::engine::DecisionEngine;
use crate::model::FactorOutcome;
use crate::policy::Thresholds;
use biogate_types::{FactorKind, FactorRecord};

pub fn engine() -> DecisionEngine {
    DecisionEngine::new(Thresholds::default())
}

/// A scored record whose pass flag follows the engine's thresholds.
pub fn scored(engine: &DecisionEngine, kind: FactorKind, score: f64) -> FactorRecord {
    let passed = engine.thresholds().passes(kind, score);
    engine.record(kind, FactorOutcome::Scored { passed, score })
}

pub fn face(engine: &DecisionEngine, score: f64) -> FactorRecord {
    scored(engine, FactorKind::Face, score)
}

pub fn fingerprint(engine: &DecisionEngine, score: f64) -> FactorRecord {
    scored(engine, FactorKind::Fingerprint, score)
}

pub fn password(engine: &DecisionEngine, passed: bool) -> FactorRecord {
    engine.record(FactorKind::Password, FactorOutcome::Binary { passed })
}

pub fn fault(engine: &DecisionEngine, kind: FactorKind, message: &str) -> FactorRecord {
    engine.record(kind, FactorOutcome::fault(message))
}
