use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::intake::{HousingStatus, IntakeRecord};

pub const HEALTH_BLIND: &str = "blind";
pub const HEALTH_DEAF: &str = "deaf";

/// Coarse housing situation the program rules reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingCategory {
    Unhoused,
    AtRisk,
    Housed,
    Unknown,
}

impl HousingCategory {
    pub fn from_status(status: Option<HousingStatus>) -> Self {
        match status {
            Some(
                HousingStatus::Unsheltered
                | HousingStatus::EmergencyShelter
                | HousingStatus::TransitionalHousing,
            ) => Self::Unhoused,
            Some(HousingStatus::AtRisk) => Self::AtRisk,
            Some(HousingStatus::Housed) => Self::Housed,
            None => Self::Unknown,
        }
    }
}

/// Benefit enrollments, normalized for case-insensitive lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenefitSet(BTreeSet<String>);

impl BenefitSet {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keys.into_iter()
                .map(|key| key.as_ref().trim().to_lowercase())
                .filter(|key| !key.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(&key.to_lowercase())
    }

    /// Enrolled keys among `keys`, in the order given.
    pub fn matching<'k>(&self, keys: &[&'k str]) -> Vec<&'k str> {
        keys.iter()
            .copied()
            .filter(|key| self.contains(key))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseholdFacts {
    /// Ages of the listed members; `None` where the birth date is unknown.
    pub member_ages: Vec<Option<u32>>,
}

impl HouseholdFacts {
    pub fn member_count(&self) -> usize {
        self.member_ages.len()
    }

    /// Members plus the participant.
    pub fn size(&self) -> usize {
        self.member_ages.len() + 1
    }

    pub fn has_member_under(&self, age_limit: u32) -> bool {
        self.member_ages
            .iter()
            .flatten()
            .any(|&age| age < age_limit)
    }
}

/// Normalized facts derived once from an intake record before any rule runs.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFacts {
    pub income: f64,
    pub age: u32,
    pub housing: HousingCategory,
    pub is_disabled: bool,
    pub is_veteran: bool,
    /// Raw value; compared case-sensitively.
    pub health_status: String,
    pub benefits: BenefitSet,
    pub household: HouseholdFacts,
}

impl DerivedFacts {
    pub fn derive(intake: &IntakeRecord, today: NaiveDate) -> Self {
        let demographics = intake.demographics.as_ref();
        let case = intake.case_management.as_ref();

        let income = parse_income(demographics.and_then(|d| d.monthly_income.as_deref()));
        let age = age_from(demographics.and_then(|d| d.date_of_birth.as_deref()), today);

        let member_ages = intake
            .household
            .as_ref()
            .map(|household| {
                household
                    .members
                    .iter()
                    .map(|member| {
                        member
                            .date_of_birth
                            .as_deref()
                            .and_then(parse_birth_date)
                            .map(|dob| age_on(dob, today))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            income,
            age,
            housing: HousingCategory::from_status(case.and_then(|c| c.housing_status)),
            is_disabled: demographics
                .and_then(|d| d.disability_status)
                .unwrap_or(false),
            is_veteran: demographics.and_then(|d| d.veteran_status).unwrap_or(false),
            health_status: case
                .and_then(|c| c.health_status.clone())
                .unwrap_or_default(),
            benefits: case
                .map(|c| BenefitSet::from_keys(&c.non_cash_benefits))
                .unwrap_or_default(),
            household: HouseholdFacts { member_ages },
        }
    }

    pub fn is_blind(&self) -> bool {
        self.health_status == HEALTH_BLIND
    }
}

/// Parse a free-text monthly income such as `"$2,500.00"`.
///
/// Everything except digits and `.` is discarded, then the longest leading
/// decimal number is read. Anything unusable yields `0`.
pub fn parse_income(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in cleaned.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + 1;
    }

    match cleaned[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO timestamps.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Whole years between `dob` and `today`, counting a birthday only once it
/// has occurred. Birth dates after `today` give `0`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

pub fn age_from(raw: Option<&str>, today: NaiveDate) -> u32 {
    raw.and_then(parse_birth_date)
        .map(|dob| age_on(dob, today))
        .unwrap_or(0)
}
