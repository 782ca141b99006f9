use serde::{Deserialize, Serialize};

/// Thresholds applied by the program rules.
///
/// Defaults are placeholder business values maintained by the program team,
/// not statutory limits. Income limits are monthly dollar amounts and every
/// income comparison is strict unless the field says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityConfig {
    pub calfresh_income_limit: f64,
    /// Age at which CalFresh notes the senior allowance (informational only).
    pub calfresh_senior_age: u32,
    pub calworks_income_limit: f64,
    pub capi_income_limit: f64,
    pub capi_min_age: u32,
    pub care_income_limit: f64,
    pub fera_min_household_size: usize,
    /// FERA income must sit strictly between the floor and the ceiling.
    pub fera_income_floor: f64,
    pub fera_income_ceiling: f64,
    pub general_assistance_min_age: u32,
    pub general_assistance_max_age: u32,
    /// Inclusive.
    pub general_assistance_income_limit: f64,
    pub hud_vash_income_limit: f64,
    /// No-fee ID from this age; reduced-fee ID below it.
    pub no_fee_id_min_age: u32,
    pub ihss_min_age: u32,
    pub lifeline_income_limit: f64,
    pub liheap_income_limit: f64,
    pub section8_income_limit: f64,
    pub section8_min_age: u32,
    pub ssi_income_limit: f64,
    pub va_pension_income_limit: f64,
    pub va_pension_min_age: u32,
    pub wic_income_limit: f64,
    /// Household members younger than this count as WIC children.
    pub wic_child_age_limit: u32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            calfresh_income_limit: 2500.0,
            calfresh_senior_age: 60,
            calworks_income_limit: 3000.0,
            capi_income_limit: 2000.0,
            capi_min_age: 65,
            care_income_limit: 3000.0,
            fera_min_household_size: 3,
            fera_income_floor: 3000.0,
            fera_income_ceiling: 4000.0,
            general_assistance_min_age: 18,
            general_assistance_max_age: 64,
            general_assistance_income_limit: 150.0,
            hud_vash_income_limit: 2500.0,
            no_fee_id_min_age: 62,
            ihss_min_age: 65,
            lifeline_income_limit: 2500.0,
            liheap_income_limit: 2800.0,
            section8_income_limit: 3500.0,
            section8_min_age: 18,
            ssi_income_limit: 1000.0,
            va_pension_income_limit: 2000.0,
            va_pension_min_age: 65,
            wic_income_limit: 3000.0,
            wic_child_age_limit: 5,
        }
    }
}
