use casework::eligibility::IntakeRecord;
use casework::error::AppError;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Read an intake document from a file, or from stdin when the path is `-`.
pub(crate) fn read_intake(path: &Path) -> Result<IntakeRecord, AppError> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&raw)?)
}
