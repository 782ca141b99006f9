use super::config::EligibilityConfig;
use super::facts::{
    BenefitSet, DerivedFacts, HouseholdFacts, HousingCategory, HEALTH_BLIND, HEALTH_DEAF,
};
use super::programs::ProgramId;

/// Enrollments that satisfy the ADSA benefit requirement.
pub const ADSA_QUALIFYING_BENEFITS: [&str; 4] = ["ssi", "ssdi", "ihss", "capi"];
/// Enrollments that qualify for CARE regardless of income.
pub const CARE_QUALIFYING_BENEFITS: [&str; 3] = ["liheap", "wic", "calfresh"];
/// Enrollments that stand in for the WIC income test.
pub const WIC_QUALIFYING_BENEFITS: [&str; 2] = ["medical", "calfresh"];

/// Verdict of a single program rule before it is labelled with the program.
#[derive(Debug, Default)]
pub(crate) struct RuleOutcome {
    pub is_eligible: bool,
    pub is_maybe: bool,
    pub met: Vec<String>,
    pub missing: Vec<String>,
}

impl RuleOutcome {
    /// Record a gating check and return whether it passed.
    fn require(&mut self, passed: bool, met: String, missing: String) -> bool {
        if passed {
            self.met.push(met);
        } else {
            self.missing.push(missing);
        }
        passed
    }

    /// Record a satisfied fact that does not gate eligibility.
    fn note(&mut self, met: String) {
        self.met.push(met);
    }

    fn eligible_if(mut self, passed: bool) -> Self {
        self.is_eligible = passed;
        self
    }
}

pub(crate) fn evaluate_program(
    program: ProgramId,
    facts: &DerivedFacts,
    config: &EligibilityConfig,
) -> RuleOutcome {
    match program {
        ProgramId::Uplift => uplift(facts.housing),
        ProgramId::Adsa => adsa(facts.is_disabled, &facts.health_status, &facts.benefits),
        ProgramId::CalFresh => calfresh(facts.income, facts.age, facts.is_disabled, config),
        ProgramId::CalWorks => calworks(&facts.household, facts.income, config),
        ProgramId::Capi => capi(facts.age, facts.is_disabled, facts.income, config),
        ProgramId::Care => care(facts.income, &facts.benefits, config),
        ProgramId::Fera => fera(&facts.household, facts.income, config),
        ProgramId::VaDisabilityCompensation => va_disability(facts.is_veteran),
        ProgramId::Fss => fss(facts.housing),
        ProgramId::GeneralAssistance => {
            general_assistance(facts.age, &facts.household, facts.income, config)
        }
        ProgramId::HudVash => hud_vash(facts.is_veteran, facts.housing, facts.income, config),
        ProgramId::NoFeeId => no_fee_id(facts.housing, facts.age, config),
        ProgramId::ReducedFeeId => {
            reduced_fee_id(facts.housing, facts.age, &facts.benefits, config)
        }
        ProgramId::Ihss => ihss(
            facts.is_disabled,
            facts.is_blind(),
            facts.age,
            facts.housing,
            config,
        ),
        ProgramId::LifeLine => lifeline(facts.income, &facts.benefits, config),
        ProgramId::Liheap => liheap(facts.housing, facts.income, config),
        ProgramId::VtaParatransit => vta_paratransit(facts.is_disabled),
        ProgramId::Section8InterestList => {
            section8(facts.income, facts.housing, facts.age, config)
        }
        ProgramId::Ssdi => ssdi(facts.is_disabled),
        ProgramId::Ssi => ssi(facts.is_disabled, facts.income, config),
        ProgramId::VaPension => va_pension(
            facts.is_veteran,
            facts.income,
            facts.age,
            facts.is_disabled,
            config,
        ),
        ProgramId::Wic => wic(facts.income, &facts.benefits, &facts.household, config),
    }
}

fn dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

fn income_below(outcome: &mut RuleOutcome, income: f64, limit: f64) -> bool {
    outcome.require(
        income < limit,
        format!("Monthly income {} is below {}", dollars(income), dollars(limit)),
        format!(
            "Monthly income {} must be below {}",
            dollars(income),
            dollars(limit)
        ),
    )
}

fn disabled(outcome: &mut RuleOutcome, is_disabled: bool) -> bool {
    outcome.require(
        is_disabled,
        "Has a documented disability".to_string(),
        "Requires a documented disability".to_string(),
    )
}

fn veteran(outcome: &mut RuleOutcome, is_veteran: bool) -> bool {
    outcome.require(
        is_veteran,
        "Is a veteran".to_string(),
        "Requires veteran status".to_string(),
    )
}

fn unhoused(outcome: &mut RuleOutcome, housing: HousingCategory) -> bool {
    outcome.require(
        housing == HousingCategory::Unhoused,
        "Currently unhoused".to_string(),
        "Must be currently unhoused".to_string(),
    )
}

fn housed(outcome: &mut RuleOutcome, housing: HousingCategory) -> bool {
    outcome.require(
        housing == HousingCategory::Housed,
        "Currently housed".to_string(),
        "Must be currently housed".to_string(),
    )
}

fn uplift(housing: HousingCategory) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let met = match housing {
        HousingCategory::AtRisk => "At risk of homelessness",
        _ => "Currently unhoused",
    };
    let passed = outcome.require(
        matches!(housing, HousingCategory::Unhoused | HousingCategory::AtRisk),
        met.to_string(),
        "Must be unhoused or at risk of homelessness".to_string(),
    );
    outcome.eligible_if(passed)
}

fn adsa(is_disabled: bool, health_status: &str, benefits: &BenefitSet) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let qualifying_condition =
        is_disabled || health_status == HEALTH_BLIND || health_status == HEALTH_DEAF;
    let condition_met = if is_disabled {
        "Has a documented disability".to_string()
    } else {
        format!("Health status is {health_status}")
    };
    let has_condition = outcome.require(
        qualifying_condition,
        condition_met,
        "Requires a disability or a blind/deaf health status".to_string(),
    );

    let enrolled = benefits.matching(&ADSA_QUALIFYING_BENEFITS);
    let has_benefit = outcome.require(
        !enrolled.is_empty(),
        format!("Enrolled in {}", enrolled.join(", ")),
        "Must receive SSI, SSDI, IHSS or CAPI".to_string(),
    );

    outcome.is_maybe = has_condition || has_benefit;
    outcome.eligible_if(has_condition && has_benefit)
}

fn calfresh(income: f64, age: u32, is_disabled: bool, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let passed = income_below(&mut outcome, income, config.calfresh_income_limit);
    if age >= config.calfresh_senior_age {
        outcome.note(format!("Age {age} qualifies for the senior allowance"));
    }
    if is_disabled {
        outcome.note("Has a documented disability".to_string());
    }
    outcome.eligible_if(passed)
}

fn calworks(household: &HouseholdFacts, income: f64, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let members = household.member_count();
    let has_household = outcome.require(
        members >= 1,
        format!("Household lists {members} member(s)"),
        "Household must list at least one member".to_string(),
    );
    let low_income = income_below(&mut outcome, income, config.calworks_income_limit);
    outcome.eligible_if(has_household && low_income)
}

fn capi(age: u32, is_disabled: bool, income: f64, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let met = if age >= config.capi_min_age {
        format!("Age {age} is {} or older", config.capi_min_age)
    } else {
        "Has a documented disability".to_string()
    };
    let qualifies = outcome.require(
        age >= config.capi_min_age || is_disabled,
        met,
        format!("Must be {} or older, or disabled", config.capi_min_age),
    );
    let low_income = income_below(&mut outcome, income, config.capi_income_limit);
    outcome.eligible_if(qualifies && low_income)
}

fn care(income: f64, benefits: &BenefitSet, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let enrolled = benefits.matching(&CARE_QUALIFYING_BENEFITS);
    let low_income = income < config.care_income_limit;
    let met = if low_income {
        format!(
            "Monthly income {} is below {}",
            dollars(income),
            dollars(config.care_income_limit)
        )
    } else {
        format!("Enrolled in {}", enrolled.join(", "))
    };
    let passed = outcome.require(
        low_income || !enrolled.is_empty(),
        met,
        format!(
            "Monthly income must be below {} or receive LIHEAP, WIC or CalFresh",
            dollars(config.care_income_limit)
        ),
    );
    outcome.eligible_if(passed)
}

fn fera(household: &HouseholdFacts, income: f64, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let size = household.size();
    let large_household = outcome.require(
        size >= config.fera_min_household_size,
        format!("Household of {size}"),
        format!(
            "Household must have at least {} people (has {size})",
            config.fera_min_household_size
        ),
    );
    let in_band = outcome.require(
        income > config.fera_income_floor && income < config.fera_income_ceiling,
        format!(
            "Monthly income {} is between {} and {}",
            dollars(income),
            dollars(config.fera_income_floor),
            dollars(config.fera_income_ceiling)
        ),
        format!(
            "Monthly income {} must be above {} and below {}",
            dollars(income),
            dollars(config.fera_income_floor),
            dollars(config.fera_income_ceiling)
        ),
    );
    outcome.eligible_if(large_household && in_band)
}

fn va_disability(is_veteran: bool) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let passed = veteran(&mut outcome, is_veteran);
    outcome.eligible_if(passed)
}

fn fss(housing: HousingCategory) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let passed = housed(&mut outcome, housing);
    outcome.eligible_if(passed)
}

fn general_assistance(
    age: u32,
    household: &HouseholdFacts,
    income: f64,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let (min_age, max_age) = (
        config.general_assistance_min_age,
        config.general_assistance_max_age,
    );
    let working_age = outcome.require(
        (min_age..=max_age).contains(&age),
        format!("Age {age} is between {min_age} and {max_age}"),
        format!("Age {age} must be between {min_age} and {max_age}"),
    );
    let no_dependents = outcome.require(
        household.member_count() == 0,
        "No dependents listed".to_string(),
        "Must have no dependents".to_string(),
    );
    let limit = config.general_assistance_income_limit;
    let low_income = outcome.require(
        income <= limit,
        format!("Monthly income {} is at most {}", dollars(income), dollars(limit)),
        format!(
            "Monthly income {} must be at most {}",
            dollars(income),
            dollars(limit)
        ),
    );
    outcome.eligible_if(working_age && no_dependents && low_income)
}

fn hud_vash(
    is_veteran: bool,
    housing: HousingCategory,
    income: f64,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let is_veteran = veteran(&mut outcome, is_veteran);
    let is_unhoused = unhoused(&mut outcome, housing);
    let low_income = income_below(&mut outcome, income, config.hud_vash_income_limit);
    outcome.eligible_if(is_veteran && is_unhoused && low_income)
}

fn no_fee_id(housing: HousingCategory, age: u32, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let is_unhoused = housing == HousingCategory::Unhoused;
    let met = if is_unhoused {
        "Currently unhoused".to_string()
    } else {
        format!("Age {age} is {} or older", config.no_fee_id_min_age)
    };
    let passed = outcome.require(
        is_unhoused || age >= config.no_fee_id_min_age,
        met,
        format!(
            "Must be unhoused or {} or older",
            config.no_fee_id_min_age
        ),
    );
    outcome.eligible_if(passed)
}

fn reduced_fee_id(
    housing: HousingCategory,
    age: u32,
    benefits: &BenefitSet,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let is_housed = housed(&mut outcome, housing);
    let under_age = outcome.require(
        age < config.no_fee_id_min_age,
        format!("Age {age} is under {}", config.no_fee_id_min_age),
        format!("Age {age} must be under {}", config.no_fee_id_min_age),
    );
    let enrolled = outcome.require(
        !benefits.is_empty(),
        "Enrolled in a benefit program".to_string(),
        "Must be enrolled in at least one benefit program".to_string(),
    );
    outcome.eligible_if(is_housed && under_age && enrolled)
}

fn ihss(
    is_disabled: bool,
    is_blind: bool,
    age: u32,
    housing: HousingCategory,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let met = if is_disabled {
        "Has a documented disability".to_string()
    } else if is_blind {
        "Health status is blind".to_string()
    } else {
        format!("Age {age} is {} or older", config.ihss_min_age)
    };
    let qualifies = outcome.require(
        is_disabled || is_blind || age >= config.ihss_min_age,
        met,
        format!("Must be disabled, blind, or {} or older", config.ihss_min_age),
    );
    let is_housed = housed(&mut outcome, housing);
    outcome.eligible_if(qualifies && is_housed)
}

fn lifeline(income: f64, benefits: &BenefitSet, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let low_income = income < config.lifeline_income_limit;
    let met = if low_income {
        format!(
            "Monthly income {} is below {}",
            dollars(income),
            dollars(config.lifeline_income_limit)
        )
    } else {
        "Enrolled in a benefit program".to_string()
    };
    let passed = outcome.require(
        low_income || !benefits.is_empty(),
        met,
        format!(
            "Monthly income must be below {} or be enrolled in a benefit program",
            dollars(config.lifeline_income_limit)
        ),
    );
    outcome.eligible_if(passed)
}

fn liheap(housing: HousingCategory, income: f64, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let is_housed = housed(&mut outcome, housing);
    let low_income = income_below(&mut outcome, income, config.liheap_income_limit);
    outcome.eligible_if(is_housed && low_income)
}

fn vta_paratransit(is_disabled: bool) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let passed = disabled(&mut outcome, is_disabled);
    outcome.eligible_if(passed)
}

fn section8(
    income: f64,
    housing: HousingCategory,
    age: u32,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let low_income = income_below(&mut outcome, income, config.section8_income_limit);
    let is_unhoused = unhoused(&mut outcome, housing);
    let adult = outcome.require(
        age >= config.section8_min_age,
        format!("Age {age} is {} or older", config.section8_min_age),
        format!("Must be {} or older", config.section8_min_age),
    );
    outcome.eligible_if(low_income && is_unhoused && adult)
}

fn ssdi(is_disabled: bool) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let passed = disabled(&mut outcome, is_disabled);
    outcome.eligible_if(passed)
}

fn ssi(is_disabled: bool, income: f64, config: &EligibilityConfig) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let is_disabled = disabled(&mut outcome, is_disabled);
    let low_income = income_below(&mut outcome, income, config.ssi_income_limit);
    outcome.eligible_if(is_disabled && low_income)
}

fn va_pension(
    is_veteran: bool,
    income: f64,
    age: u32,
    is_disabled: bool,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let is_veteran = veteran(&mut outcome, is_veteran);
    let low_income = income_below(&mut outcome, income, config.va_pension_income_limit);
    let met = if age >= config.va_pension_min_age {
        format!("Age {age} is {} or older", config.va_pension_min_age)
    } else {
        "Has a documented disability".to_string()
    };
    let qualifies = outcome.require(
        age >= config.va_pension_min_age || is_disabled,
        met,
        format!("Must be {} or older, or disabled", config.va_pension_min_age),
    );
    outcome.eligible_if(is_veteran && low_income && qualifies)
}

fn wic(
    income: f64,
    benefits: &BenefitSet,
    household: &HouseholdFacts,
    config: &EligibilityConfig,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    let enrolled = benefits.matching(&WIC_QUALIFYING_BENEFITS);
    let low_income = income < config.wic_income_limit;
    let met = if low_income {
        format!(
            "Monthly income {} is below {}",
            dollars(income),
            dollars(config.wic_income_limit)
        )
    } else {
        format!("Enrolled in {}", enrolled.join(", "))
    };
    let financially = outcome.require(
        low_income || !enrolled.is_empty(),
        met,
        format!(
            "Monthly income must be below {} or receive Medi-Cal or CalFresh",
            dollars(config.wic_income_limit)
        ),
    );
    let limit = config.wic_child_age_limit;
    let has_child = outcome.require(
        household.has_member_under(limit),
        format!("Household includes a child under {limit}"),
        format!("Household must include a child under {limit}"),
    );
    outcome.eligible_if(financially && has_child)
}
