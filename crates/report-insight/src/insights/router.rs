use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use serde_json::Value;
use tracing::debug;

use super::classifier::classify;
use super::report::{MedicalReport, ReportOverview};
use super::views::ReportInsights;
use crate::error::AppError;

/// Router builder exposing the classification endpoints.
pub fn insights_router() -> Router {
    Router::new()
        .route("/api/v1/reports/insights", post(insights_handler))
        .route("/api/v1/reports/overview", post(overview_handler))
}

/// Classifies whatever JSON arrives; unusable bodies classify as an empty record.
pub(crate) async fn insights_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReportInsights>, AppError> {
    let Json(payload) = payload?;
    let data = MedicalReport::from_json_value(payload)
        .extracted_data
        .unwrap_or_default();
    Ok(Json(classify(&data)))
}

pub(crate) async fn overview_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReportOverview>, AppError> {
    let Json(payload) = payload?;
    let report = MedicalReport::from_json_value(payload);
    match report.overview() {
        Some(overview) => Ok(Json(overview)),
        None => {
            debug!(report_id = ?report.id, "report has no extracted data");
            Err(AppError::MissingExtractedData {
                report_id: report.id,
            })
        }
    }
}
