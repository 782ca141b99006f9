use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::calculator::{potential_matches, EligibilitySummary};
use super::intake::{lenient_or_default, IntakeRecord};
use super::programs::program_catalog;
use super::{EligibilityEngine, EligibilityResult};

/// Request body shared by the evaluation endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub intake: IntakeRecord,
    /// Evaluation date as `YYYY-MM-DD`; defaults to today.
    #[serde(default)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub evaluated_on: NaiveDate,
    pub summary: EligibilitySummary,
    pub results: Vec<EligibilityResult>,
}

impl EvaluationResponse {
    /// `all` must be the full per-program evaluation. The summary always counts
    /// every program; `matches_only` trims `results` to potential matches.
    pub fn from_evaluation(
        evaluated_on: NaiveDate,
        all: Vec<EligibilityResult>,
        matches_only: bool,
    ) -> Self {
        let summary = EligibilitySummary::from_results(&all);
        let results = if matches_only {
            potential_matches(all)
        } else {
            all
        };
        Self {
            evaluated_on,
            summary,
            results,
        }
    }
}

/// Router builder exposing the engine over HTTP.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/programs", get(programs_handler))
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler))
        .route("/api/v1/eligibility/benefits", post(benefits_handler))
        .with_state(engine)
}

pub(crate) async fn programs_handler() -> Response {
    (StatusCode::OK, Json(program_catalog())).into_response()
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    respond(&engine, &request, false)
}

pub(crate) async fn benefits_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    respond(&engine, &request, true)
}

fn respond(engine: &EligibilityEngine, request: &EvaluationRequest, matches_only: bool) -> Response {
    let today = match request.as_of.as_deref().map(str::trim) {
        None | Some("") => Local::now().date_naive(),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(err) => {
                let payload = json!({
                    "error": format!("asOf '{raw}' is not a YYYY-MM-DD date ({err})"),
                });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
    };

    let all = engine.evaluate(&request.intake, today);
    let response = EvaluationResponse::from_evaluation(today, all, matches_only);
    (StatusCode::OK, Json(response)).into_response()
}
