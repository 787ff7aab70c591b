use axum::response::Response;
use serde_json::{json, Value};

use crate::insights::{ExtractedData, Parameter};

pub(super) fn extracted(value: Value) -> ExtractedData {
    ExtractedData::from_json_value(value)
}

pub(super) fn parameters(entries: &[(&str, &str, &str)]) -> Vec<Parameter> {
    entries
        .iter()
        .map(|(name, value, severity)| Parameter::new(name, value, severity))
        .collect()
}

pub(super) fn lab_panel() -> ExtractedData {
    extracted(json!({
        "parameters": [
            { "name": "Hemoglobin", "value": 10.2, "severity": "Low" },
            { "name": "Glucose", "value": 182, "severity": "High" },
            { "value": "3.1", "severity": "Critical" },
            { "name": "Platelets", "value": "250000", "severity": "Normal" },
            { "name": "Vitamin D", "value": "14 ng/mL", "severity": "Abnormal" },
            { "name": "Troponin", "value": "0.4", "severity": "Critical" },
            { "name": "TSH", "severity": "Unknown" },
        ],
        "specialist_recommendations": [
            "Follow up with an Endocrinologist for glucose control.",
            "A Hematologist should review the anemia.",
        ],
        "diet_exercise_plan": "Low sugar diet\nExercise 30 minutes daily\n\nSleep 8 hours",
        "analysis": "Elevated glucose and low hemoglobin.",
    }))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
