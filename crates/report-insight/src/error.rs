use crate::config::ConfigError;
use crate::insights::ReportInputError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report input error: {0}")]
    Input(#[from] ReportInputError),
    #[error("invalid request body: {0}")]
    Request(#[from] JsonRejection),
    #[error("report has no extracted data")]
    MissingExtractedData { report_id: Option<String> },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Request(rejection) => rejection.status(),
            AppError::MissingExtractedData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({ "error": self.to_string() });
        if let AppError::MissingExtractedData {
            report_id: Some(id),
        } = &self
        {
            body["report_id"] = json!(id);
        }

        (status, Json(body)).into_response()
    }
}
