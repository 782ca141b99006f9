//! Integration scenarios for intake evaluation through the public API.
//!
//! Scenarios exercise the engine the way the case-management forms do: JSON
//! intake documents, often half filled, evaluated against a fixed date.

use chrono::NaiveDate;
use serde_json::json;

use casework::eligibility::{
    program_name, EligibilityConfig, EligibilityEngine, EligibilityResult, IntakeRecord,
    ProgramId, PROGRAM_NAMES,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

fn intake(value: serde_json::Value) -> IntakeRecord {
    serde_json::from_value(value).expect("intake parses")
}

fn find(results: &[EligibilityResult], program: ProgramId) -> &EligibilityResult {
    results
        .iter()
        .find(|result| result.program_id == program)
        .expect("program evaluated")
}

#[test]
fn program_table_is_stable() {
    assert_eq!(PROGRAM_NAMES.len(), 22);
    assert_eq!(program_name(1), Some("UPLIFT"));
    assert_eq!(program_name(8), Some("VA Disability Compensation"));
    assert_eq!(program_name(18), Some("Section 8 Interest List"));
    assert_eq!(program_name(22), Some("WIC"));
    assert_eq!(program_name(0), None);
    assert_eq!(program_name(23), None);

    for (index, program) in ProgramId::ALL.iter().enumerate() {
        assert_eq!(usize::from(program.id()), index + 1);
        assert_eq!(ProgramId::try_from(program.id()), Ok(*program));
    }
}

#[test]
fn results_serialize_with_caller_field_names() {
    let engine = EligibilityEngine::default();
    let results = engine.evaluate(&IntakeRecord::default(), today());

    let value = serde_json::to_value(&results[2]).expect("serializes");
    assert_eq!(value["programId"], 3);
    assert_eq!(value["programName"], "CalFresh");
    assert_eq!(value["isEligible"], true);
    assert_eq!(value["isMaybe"], false);
    assert!(value["metConditions"].is_array());
    assert!(value["missingConditions"].is_array());

    let round_trip: EligibilityResult = serde_json::from_value(value).expect("deserializes");
    assert_eq!(round_trip, results[2]);
}

#[test]
fn unknown_program_ids_are_rejected_on_input() {
    let err = serde_json::from_value::<ProgramId>(json!(23)).expect_err("23 is not a program");
    assert!(err.to_string().contains("unknown program id 23"));
}

#[test]
fn unhoused_senior_veteran_scenario() {
    let record = intake(json!({
        "participantDetails": { "firstName": "Walt" },
        "demographics": {
            "monthlyIncome": "$1,450 (VA + SS)",
            "dateOfBirth": "1955-07-30",
            "veteranStatus": true,
            "disabilityStatus": false
        },
        "caseManagement": {
            "housingStatus": "unsheltered",
            "nonCashBenefits": ["calfresh"]
        }
    }));

    let engine = EligibilityEngine::default();
    let results = engine.evaluate(&record, today());

    for program in [
        ProgramId::Uplift,
        ProgramId::CalFresh,
        ProgramId::Capi,
        ProgramId::Care,
        ProgramId::VaDisabilityCompensation,
        ProgramId::HudVash,
        ProgramId::NoFeeId,
        ProgramId::LifeLine,
        ProgramId::Section8InterestList,
        ProgramId::VaPension,
    ] {
        assert!(find(&results, program).is_eligible, "{program:?}");
    }

    for program in [ProgramId::Fss, ProgramId::Ihss, ProgramId::Liheap, ProgramId::Ssi] {
        let result = find(&results, program);
        assert!(!result.is_eligible, "{program:?}");
        assert!(!result.missing_conditions.is_empty());
    }

    let benefits = engine.calculate_benefits(&record, today());
    assert_eq!(benefits.len(), 10);
    assert!(benefits.iter().all(EligibilityResult::is_potential_match));
}

#[test]
fn housed_family_scenario() {
    let record = intake(json!({
        "demographics": { "monthlyIncome": "3,450.00", "dateOfBirth": "1991-12-01" },
        "caseManagement": { "housingStatus": "housed", "nonCashBenefits": ["Medical"] },
        "household": {
            "members": [
                { "relationship": "spouse", "dateOfBirth": "1990-03-03" },
                { "relationship": "child", "dateOfBirth": "2022-11-20" }
            ]
        }
    }));

    let results = EligibilityEngine::default().evaluate(&record, today());

    assert!(find(&results, ProgramId::Fera).is_eligible);
    assert!(find(&results, ProgramId::Wic).is_eligible);
    assert!(find(&results, ProgramId::Fss).is_eligible);
    assert!(find(&results, ProgramId::ReducedFeeId).is_eligible);
    assert!(find(&results, ProgramId::LifeLine).is_eligible);
    assert!(!find(&results, ProgramId::CalWorks).is_eligible);
    assert!(!find(&results, ProgramId::Liheap).is_eligible);
    assert!(!find(&results, ProgramId::GeneralAssistance).is_eligible);
}

#[test]
fn relaxed_thresholds_widen_eligibility() {
    let config: EligibilityConfig =
        serde_json::from_value(json!({ "liheap_income_limit": 4000.0 })).expect("config parses");
    let record = intake(json!({
        "demographics": { "monthlyIncome": "$3,100" },
        "caseManagement": { "housingStatus": "housed" }
    }));

    let strict = EligibilityEngine::default().evaluate(&record, today());
    let relaxed = EligibilityEngine::new(config).evaluate(&record, today());

    assert!(!find(&strict, ProgramId::Liheap).is_eligible);
    assert!(find(&relaxed, ProgramId::Liheap).is_eligible);
}
