//! Benefits eligibility evaluation.
//!
//! [`EligibilityEngine::evaluate`] derives normalized facts from an intake
//! record once, then runs every program rule against them. It never fails:
//! missing or malformed intake data falls back to conservative defaults, so
//! forms can evaluate a record at any point during data entry.

mod calculator;
mod config;
pub mod facts;
pub mod intake;
mod programs;
mod router;
mod rules;

#[cfg(test)]
mod tests;

pub use calculator::EligibilitySummary;
pub use config::EligibilityConfig;
pub use facts::{DerivedFacts, HousingCategory};
pub use intake::{
    CaseManagement, Demographics, Household, HouseholdMember, HousingStatus, IntakeRecord,
    ParticipantDetails,
};
pub use programs::{
    program_catalog, program_name, ProgramId, ProgramListing, UnknownProgram, PROGRAM_NAMES,
};
pub use router::{eligibility_router, EvaluationRequest, EvaluationResponse};
pub use rules::{ADSA_QUALIFYING_BENEFITS, CARE_QUALIFYING_BENEFITS, WIC_QUALIFYING_BENEFITS};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying the configured thresholds to intake records.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// One result per program, in ascending program id order.
    pub fn evaluate(&self, intake: &IntakeRecord, today: NaiveDate) -> Vec<EligibilityResult> {
        let facts = DerivedFacts::derive(intake, today);
        let results = self.evaluate_facts(&facts);

        debug!(
            %today,
            income = facts.income,
            age = facts.age,
            housing = ?facts.housing,
            eligible = results.iter().filter(|r| r.is_eligible).count(),
            "evaluated intake against program rules"
        );

        results
    }

    pub fn evaluate_facts(&self, facts: &DerivedFacts) -> Vec<EligibilityResult> {
        ProgramId::ALL
            .iter()
            .map(|&program| {
                let outcome = rules::evaluate_program(program, facts, &self.config);
                EligibilityResult {
                    program_id: program,
                    program_name: program.name().to_string(),
                    is_eligible: outcome.is_eligible,
                    is_maybe: outcome.is_maybe,
                    met_conditions: outcome.met,
                    missing_conditions: outcome.missing,
                }
            })
            .collect()
    }

    /// Programs worth surfacing: eligible or possibly eligible.
    pub fn calculate_benefits(
        &self,
        intake: &IntakeRecord,
        today: NaiveDate,
    ) -> Vec<EligibilityResult> {
        calculator::potential_matches(self.evaluate(intake, today))
    }
}

/// Evaluate with the default thresholds as of the local current date.
pub fn evaluate_eligibility(intake: &IntakeRecord) -> Vec<EligibilityResult> {
    EligibilityEngine::default().evaluate(intake, Local::now().date_naive())
}

/// Filtered counterpart of [`evaluate_eligibility`].
pub fn calculate_benefits(intake: &IntakeRecord) -> Vec<EligibilityResult> {
    EligibilityEngine::default().calculate_benefits(intake, Local::now().date_naive())
}

/// Determination for a single program, with the conditions behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub program_id: ProgramId,
    pub program_name: String,
    pub is_eligible: bool,
    /// Partial match that needs case-manager review.
    pub is_maybe: bool,
    pub met_conditions: Vec<String>,
    pub missing_conditions: Vec<String>,
}

impl EligibilityResult {
    pub fn is_potential_match(&self) -> bool {
        self.is_eligible || self.is_maybe
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_eligible {
            "eligible"
        } else if self.is_maybe {
            "possibly eligible"
        } else {
            "not eligible"
        }
    }
}
