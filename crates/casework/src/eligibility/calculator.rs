use serde::{Deserialize, Serialize};

use super::EligibilityResult;

pub(crate) fn potential_matches(results: Vec<EligibilityResult>) -> Vec<EligibilityResult> {
    results
        .into_iter()
        .filter(EligibilityResult::is_potential_match)
        .collect()
}

/// Headline counts for a set of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilitySummary {
    pub eligible: usize,
    /// Maybe-eligible and not eligible.
    pub possibly_eligible: usize,
    pub ineligible: usize,
}

impl EligibilitySummary {
    pub fn from_results(results: &[EligibilityResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                if result.is_eligible {
                    summary.eligible += 1;
                } else if result.is_maybe {
                    summary.possibly_eligible += 1;
                } else {
                    summary.ineligible += 1;
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.eligible + self.possibly_eligible + self.ineligible
    }
}
