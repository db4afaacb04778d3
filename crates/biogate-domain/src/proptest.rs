//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Policy evaluation against every subset of factors
//! - Canonical ordering of factor records
//! - Score normalization and fault handling

use crate::engine::{DecisionEngine, decide};
use crate::model::FactorOutcome;
use crate::policy::Thresholds;
use crate::score::round4;
use biogate_types::{AcceptancePolicy, FactorKind, FactorRecord, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_policy() -> impl Strategy<Value = AcceptancePolicy> {
    prop_oneof![
        Just(AcceptancePolicy::RequireAll),
        Just(AcceptancePolicy::RequireBiometric),
        Just(AcceptancePolicy::AnyFactor),
    ]
}

fn arb_kind() -> impl Strategy<Value = FactorKind> {
    prop_oneof![
        Just(FactorKind::Face),
        Just(FactorKind::Fingerprint),
        Just(FactorKind::Password),
    ]
}

/// Strategy for a provider outcome appropriate to the given factor kind.
///
/// Scored outcomes decide `passed` from the default thresholds, as real providers do.
fn arb_outcome(kind: FactorKind) -> BoxedStrategy<FactorOutcome> {
    let fault = "[a-z ]{1,24}".prop_map(FactorOutcome::fault);
    match kind {
        FactorKind::Password => prop_oneof![
            3 => any::<bool>().prop_map(|passed| FactorOutcome::Binary { passed }),
            1 => fault,
        ]
        .boxed(),
        numeric => prop_oneof![
            3 => (0.0f64..=1.0).prop_map(move |score| FactorOutcome::Scored {
                passed: Thresholds::default().passes(numeric, score),
                score,
            }),
            1 => fault,
        ]
        .boxed(),
    }
}

/// Strategy for an attempt: any subset of the three factors, in arbitrary order.
fn arb_records() -> impl Strategy<Value = Vec<FactorRecord>> {
    (
        proptest::option::of(arb_outcome(FactorKind::Face)),
        proptest::option::of(arb_outcome(FactorKind::Fingerprint)),
        proptest::option::of(arb_outcome(FactorKind::Password)),
    )
        .prop_map(|(face, fingerprint, password)| {
            let engine = DecisionEngine::default();
            [
                (FactorKind::Face, face),
                (FactorKind::Fingerprint, fingerprint),
                (FactorKind::Password, password),
            ]
            .into_iter()
            .filter_map(|(kind, outcome)| outcome.map(|o| engine.record(kind, o)))
            .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn passed_kinds(records: &[FactorRecord]) -> Vec<FactorKind> {
    let mut kinds: Vec<_> = records.iter().filter(|r| r.passed).map(|r| r.kind).collect();
    kinds.sort();
    kinds
}

// ============================================================================
// Property tests: policy evaluation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// An attempt with nothing supplied is never authenticated.
    #[test]
    fn empty_attempt_never_authenticates(policy in arb_policy()) {
        let result = decide(Vec::new(), policy);
        prop_assert!(!result.authenticated);
        prop_assert_eq!(result.factors_attempted, 0);
        prop_assert!(result.scores.is_empty());
    }

    /// RequireAll: every attempted factor passed, and at least one was attempted.
    #[test]
    fn require_all_matches_definition(records in arb_records()) {
        let attempted = records.len();
        let passed = passed_kinds(&records).len();
        let result = decide(records, AcceptancePolicy::RequireAll);
        prop_assert_eq!(result.authenticated, attempted > 0 && passed == attempted);
    }

    /// RequireBiometric: some biometric factor passed.
    #[test]
    fn require_biometric_matches_definition(records in arb_records()) {
        let any_biometric = passed_kinds(&records).iter().any(|k| k.is_biometric());
        let result = decide(records, AcceptancePolicy::RequireBiometric);
        prop_assert_eq!(result.authenticated, any_biometric);
    }

    /// AnyFactor: at least one factor passed.
    #[test]
    fn any_factor_matches_definition(records in arb_records()) {
        let any_passed = !passed_kinds(&records).is_empty();
        let result = decide(records, AcceptancePolicy::AnyFactor);
        prop_assert_eq!(result.authenticated, any_passed);
    }

    /// Counters agree with the factor list.
    #[test]
    fn counters_match_factor_list(records in arb_records(), policy in arb_policy()) {
        let result = decide(records, policy);
        prop_assert_eq!(result.factors_attempted as usize, result.factors.len());
        prop_assert_eq!(
            result.factors_passed_count as usize,
            result.factors.iter().filter(|f| f.passed).count()
        );
    }

    /// The note is present exactly when password is the only pass in biometric mode.
    #[test]
    fn note_only_for_lone_password(records in arb_records(), policy in arb_policy()) {
        let lone_password = passed_kinds(&records) == [FactorKind::Password];
        let result = decide(records, policy);
        let expected = policy == AcceptancePolicy::RequireBiometric && lone_password;
        prop_assert_eq!(
            result.note.as_deref(),
            expected.then_some(ids::NOTE_PASSWORD_ALONE_INSUFFICIENT)
        );
        if result.note.is_some() {
            prop_assert!(!result.authenticated);
        }
    }
}

// ============================================================================
// Property tests: ordering and normalization
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Factor records come out face, fingerprint, password regardless of input order.
    #[test]
    fn factors_are_canonically_ordered(records in arb_records(), policy in arb_policy()) {
        let result = decide(records, policy);
        let kinds: Vec<_> = result.factors.iter().map(|f| f.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        prop_assert_eq!(kinds, sorted);
    }

    /// Shuffling the input does not change the decision.
    #[test]
    fn decision_is_order_independent(records in arb_records(), policy in arb_policy()) {
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(decide(records, policy), decide(reversed, policy));
    }

    /// Every reported score is rounded and belongs to an attempted numeric factor.
    #[test]
    fn scores_are_rounded_and_keyed(records in arb_records(), policy in arb_policy()) {
        let result = decide(records, policy);
        for (key, score) in &result.scores {
            prop_assert_eq!(round4(*score), *score);
            prop_assert!(result.factor(key.factor()).is_some());
        }
        prop_assert!(
            result.factors.iter().all(|f| f.kind.score_key().is_none()
                || result.scores.contains_key(&f.kind.score_key().unwrap()))
        );
    }

    /// Rounding is idempotent.
    #[test]
    fn round4_is_idempotent(x in -10.0f64..10.0) {
        prop_assert_eq!(round4(round4(x)), round4(x));
    }

    /// A faulted factor is never passed and carries its message.
    #[test]
    fn faults_never_pass(kind in arb_kind(), message in "[a-z]{1,16}") {
        let record = DecisionEngine::default().record(kind, FactorOutcome::fault(message.clone()));
        prop_assert!(record.attempted);
        prop_assert!(!record.passed);
        prop_assert_eq!(record.error.as_deref(), Some(message.as_str()));
        prop_assert_eq!(record.detail, format!("error: {message}"));
    }

    /// Non-finite scores are normalized into faults.
    #[test]
    fn non_finite_scores_become_faults(
        kind in prop_oneof![Just(FactorKind::Face), Just(FactorKind::Fingerprint)],
        score in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
        passed in any::<bool>(),
    ) {
        let record = DecisionEngine::default().record(kind, FactorOutcome::Scored { passed, score });
        prop_assert!(!record.passed);
        prop_assert!(record.is_fault());
        prop_assert_eq!(record.score, Some(0.0));
    }
}
