use crate::infra::{parse_date, read_intake};
use casework::config::AppConfig;
use casework::eligibility::{
    program_catalog, EligibilityEngine, EligibilityResult, EligibilitySummary,
    EvaluationResponse, IntakeRecord,
};
use casework::error::AppError;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to an intake JSON document, or `-` to read stdin
    #[arg(long)]
    pub(crate) intake: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print every program, not only eligible and possible matches
    #[arg(long)]
    pub(crate) all: bool,
    /// Emit the results as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        intake,
        as_of,
        all,
        json,
    } = args;

    let engine = configured_engine()?;
    let today = as_of.unwrap_or_else(|| Local::now().date_naive());
    let record = read_intake(&intake)?;
    let response = evaluate_record(&engine, &record, today, all);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_results(&record, &response.results, &response.summary, today);
    }

    Ok(())
}

/// Engine carrying the thresholds from `APP_ELIGIBILITY_CONFIG`, if set.
fn configured_engine() -> Result<EligibilityEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(EligibilityEngine::new(config.eligibility))
}

fn evaluate_record(
    engine: &EligibilityEngine,
    record: &IntakeRecord,
    today: NaiveDate,
    all: bool,
) -> EvaluationResponse {
    EvaluationResponse::from_evaluation(today, engine.evaluate(record, today), !all)
}

pub(crate) fn run_programs() {
    println!("Supported programs");
    for program in program_catalog() {
        println!("- {:>2} {}", program.program_id.id(), program.program_name);
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let engine = configured_engine()?;

    println!("Benefits eligibility demo");
    for record in sample_intakes()? {
        let response = evaluate_record(&engine, &record, today, false);
        println!();
        render_results(&record, &response.results, &response.summary, today);
    }

    Ok(())
}

fn render_results(
    record: &IntakeRecord,
    results: &[EligibilityResult],
    summary: &EligibilitySummary,
    today: NaiveDate,
) {
    println!(
        "Eligibility for {} (evaluated {})",
        record.display_name(),
        today
    );
    println!(
        "Summary: {} eligible, {} possibly eligible, {} not eligible",
        summary.eligible, summary.possibly_eligible, summary.ineligible
    );

    if results.is_empty() {
        println!("\nNo matching programs");
        return;
    }

    for result in results {
        println!(
            "\n[{:>2}] {} ({})",
            result.program_id.id(),
            result.program_name,
            result.status_label()
        );
        for condition in &result.met_conditions {
            println!("  + {condition}");
        }
        for condition in &result.missing_conditions {
            println!("  - {condition}");
        }
    }
}

fn sample_intakes() -> Result<Vec<IntakeRecord>, AppError> {
    let samples = vec![
        json!({
            "participantDetails": { "firstName": "Marisol", "lastName": "Vega" },
            "demographics": {
                "monthlyIncome": "$1,150.00",
                "dateOfBirth": "1988-04-19",
                "veteranStatus": false,
                "disabilityStatus": false
            },
            "caseManagement": {
                "housingStatus": "emergency_shelter",
                "nonCashBenefits": ["CalFresh", "Medical"]
            },
            "household": {
                "members": [
                    { "name": "Nico", "relationship": "child", "dateOfBirth": "2023-02-11" }
                ]
            }
        }),
        json!({
            "participantDetails": { "firstName": "Harold", "lastName": "Briggs" },
            "demographics": {
                "monthlyIncome": "1,850",
                "dateOfBirth": "1952-09-03",
                "veteranStatus": true,
                "disabilityStatus": true
            },
            "caseManagement": {
                "housingStatus": "housed",
                "healthStatus": "blind",
                "nonCashBenefits": ["SSDI"]
            }
        }),
        json!({
            "participantDetails": { "firstName": "Dee" },
            "demographics": { "monthlyIncome": "$120", "dateOfBirth": "1999-12-30" },
            "caseManagement": { "housingStatus": "at_risk" }
        }),
    ];

    samples
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(AppError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_intakes_all_parse_with_names() {
        let samples = sample_intakes().expect("samples parse");
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].display_name(), "Marisol Vega");
        assert_eq!(samples[2].display_name(), "Dee");
    }

    #[test]
    fn filtered_output_summarizes_every_program() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid");
        let engine = EligibilityEngine::default();
        let samples = sample_intakes().expect("samples parse");

        let filtered = evaluate_record(&engine, &samples[0], today, false);
        let full = evaluate_record(&engine, &samples[0], today, true);

        assert_eq!(filtered.summary.total(), 22);
        assert_eq!(filtered.summary, full.summary);
        assert_eq!(full.results.len(), 22);
        assert!(filtered.results.iter().all(EligibilityResult::is_potential_match));

        let value = serde_json::to_value(&filtered).expect("serializes");
        let summary = &value["summary"];
        let counted = ["eligible", "possiblyEligible", "ineligible"]
            .iter()
            .map(|key| summary[*key].as_u64().expect("count"))
            .sum::<u64>();
        assert_eq!(counted, 22);
    }

    #[test]
    fn demo_engine_uses_configured_thresholds() {
        let path = std::env::temp_dir().join(format!(
            "casework-api-thresholds-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "liheap_income_limit": 4000.0 }"#)
            .expect("scratch file written");

        std::env::set_var("APP_ELIGIBILITY_CONFIG", &path);
        let engine = configured_engine();
        std::env::remove_var("APP_ELIGIBILITY_CONFIG");
        std::fs::remove_file(&path).ok();

        let engine = engine.expect("config loads");
        assert_eq!(engine.config().liheap_income_limit, 4000.0);
    }

    #[test]
    fn samples_surface_distinct_matches() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid");
        let engine = EligibilityEngine::default();

        let matches: Vec<Vec<u8>> = sample_intakes()
            .expect("samples parse")
            .iter()
            .map(|record| {
                engine
                    .calculate_benefits(record, today)
                    .iter()
                    .map(|result| result.program_id.id())
                    .collect()
            })
            .collect();

        assert!(matches[0].contains(&22));
        assert!(matches[1].contains(&21));
        assert!(matches[1].contains(&14));
        assert!(matches[2].contains(&10));
        assert!(matches.iter().all(|ids| !ids.is_empty()));
    }
}
