use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::eligibility::{
    CaseManagement, Demographics, EligibilityResult, Household, HouseholdMember, HousingStatus,
    IntakeRecord, ProgramId,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

pub(super) fn demographics(
    monthly_income: Option<&str>,
    date_of_birth: Option<&str>,
    veteran: bool,
    disabled: bool,
) -> Demographics {
    Demographics {
        monthly_income: monthly_income.map(str::to_string),
        date_of_birth: date_of_birth.map(str::to_string),
        veteran_status: Some(veteran),
        disability_status: Some(disabled),
    }
}

pub(super) fn with_demographics(demographics: Demographics) -> IntakeRecord {
    IntakeRecord {
        demographics: Some(demographics),
        ..IntakeRecord::default()
    }
}

pub(super) fn with_housing(mut intake: IntakeRecord, status: HousingStatus) -> IntakeRecord {
    intake
        .case_management
        .get_or_insert_with(CaseManagement::default)
        .housing_status = Some(status);
    intake
}

pub(super) fn with_benefits(mut intake: IntakeRecord, benefits: &[&str]) -> IntakeRecord {
    intake
        .case_management
        .get_or_insert_with(CaseManagement::default)
        .non_cash_benefits = benefits.iter().map(|b| b.to_string()).collect();
    intake
}

pub(super) fn with_health(mut intake: IntakeRecord, status: &str) -> IntakeRecord {
    intake
        .case_management
        .get_or_insert_with(CaseManagement::default)
        .health_status = Some(status.to_string());
    intake
}

pub(super) fn with_members(mut intake: IntakeRecord, birth_dates: &[Option<&str>]) -> IntakeRecord {
    intake.household = Some(Household {
        members: birth_dates
            .iter()
            .map(|dob| HouseholdMember {
                date_of_birth: dob.map(str::to_string),
                ..HouseholdMember::default()
            })
            .collect(),
    });
    intake
}

pub(super) fn result_for(results: &[EligibilityResult], program: ProgramId) -> &EligibilityResult {
    results
        .iter()
        .find(|result| result.program_id == program)
        .expect("every program is evaluated")
}

pub(super) fn eligible_ids(results: &[EligibilityResult]) -> Vec<u8> {
    results
        .iter()
        .filter(|result| result.is_eligible)
        .map(|result| result.program_id.id())
        .collect()
}

pub(super) fn assert_well_formed(results: &[EligibilityResult]) {
    assert_eq!(results.len(), 22);
    for (index, result) in results.iter().enumerate() {
        assert_eq!(usize::from(result.program_id.id()), index + 1);
        assert_eq!(result.program_name, result.program_id.name());
        assert_eq!(
            result.is_eligible,
            result.missing_conditions.is_empty(),
            "{} reports missing conditions inconsistently",
            result.program_name
        );
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
