use super::common::*;

use crate::eligibility::{
    EligibilityEngine, EligibilitySummary, EvaluationResponse, HousingStatus, IntakeRecord,
    ProgramId,
};

#[test]
fn benefits_are_the_potential_matches_in_program_order() {
    let engine = EligibilityEngine::default();
    let intake = with_benefits(
        with_housing(
            with_demographics(demographics(Some("$800"), Some("1980-02-02"), false, true)),
            HousingStatus::Unsheltered,
        ),
        &["CalFresh"],
    );

    let all = engine.evaluate(&intake, today());
    let benefits = engine.calculate_benefits(&intake, today());

    let expected: Vec<_> = all
        .iter()
        .filter(|result| result.is_eligible || result.is_maybe)
        .cloned()
        .collect();
    assert_eq!(benefits, expected);
    assert!(benefits
        .windows(2)
        .all(|pair| pair[0].program_id < pair[1].program_id));
}

#[test]
fn maybe_results_are_surfaced() {
    let engine = EligibilityEngine::default();
    let intake = with_demographics(demographics(Some("$5,000"), None, false, true));

    let benefits = engine.calculate_benefits(&intake, today());
    let adsa = benefits
        .iter()
        .find(|result| result.program_id == ProgramId::Adsa)
        .expect("partial ADSA match is surfaced");

    assert!(!adsa.is_eligible);
    assert!(adsa.is_maybe);
}

#[test]
fn empty_intake_surfaces_income_based_programs() {
    let benefits = EligibilityEngine::default().calculate_benefits(&IntakeRecord::default(), today());
    let ids: Vec<u8> = benefits.iter().map(|result| result.program_id.id()).collect();

    assert_eq!(ids, vec![3, 6, 15]);
}

#[test]
fn summary_counts_each_result_once() {
    let engine = EligibilityEngine::default();
    let intake = with_benefits(IntakeRecord::default(), &["ssi"]);
    let results = engine.evaluate(&intake, today());

    let summary = EligibilitySummary::from_results(&results);

    assert_eq!(summary.total(), 22);
    assert_eq!(summary.possibly_eligible, 1);
    assert_eq!(summary.eligible, eligible_ids(&results).len());
}

#[test]
fn filtered_response_summary_still_counts_every_program() {
    let engine = EligibilityEngine::default();
    let intake = with_housing(
        with_demographics(demographics(Some("$800"), Some("1980-02-02"), false, true)),
        HousingStatus::Unsheltered,
    );
    let all = engine.evaluate(&intake, today());

    let full = EvaluationResponse::from_evaluation(today(), all.clone(), false);
    let filtered = EvaluationResponse::from_evaluation(today(), all, true);

    assert_eq!(filtered.summary, full.summary);
    assert_eq!(filtered.summary.total(), 22);
    assert_eq!(full.results.len(), 22);
    assert_eq!(
        filtered.results,
        engine.calculate_benefits(&intake, today())
    );
    assert!(filtered.results.len() < 22);
}
