use super::classifier::ReportInsightClassifier;
use super::domain::{string_or_none, ExtractedData};
use super::views::ReportInsights;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const ANALYSIS_PREVIEW_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum ReportInputError {
    #[error("failed to read report input: {0}")]
    Io(#[from] std::io::Error),
    #[error("report input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stored report as returned by the report service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MedicalReport {
    #[serde(default, deserialize_with = "identifier_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "date_or_none")]
    pub report_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "timestamp_or_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "array_or_empty")]
    pub original_files: Vec<Value>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub result_pdf: Option<String>,
    #[serde(default, deserialize_with = "extracted_data_or_none")]
    pub extracted_data: Option<ExtractedData>,
}

impl MedicalReport {
    /// Accepts a report envelope (an object carrying `extracted_data`) or a bare
    /// extracted-data record.
    pub fn from_json_value(value: Value) -> Self {
        let is_envelope = value
            .as_object()
            .is_some_and(|fields| fields.contains_key("extracted_data"));

        if is_envelope {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self {
                extracted_data: Some(ExtractedData::from_json_value(value)),
                ..Self::default()
            }
        }
    }

    pub fn overview(&self) -> Option<ReportOverview> {
        self.overview_with(&ReportInsightClassifier::default())
    }

    /// `None` when the report has no extracted data to summarize.
    pub fn overview_with(&self, classifier: &ReportInsightClassifier) -> Option<ReportOverview> {
        let data = self.extracted_data.as_ref()?;

        Some(ReportOverview {
            report_id: self.id.clone(),
            report_date: self.report_date,
            created_at: self.created_at,
            files_uploaded: self.original_files.len(),
            result_pdf: self.result_pdf.clone(),
            analysis_preview: data.analysis.as_deref().and_then(analysis_preview),
            insights: classifier.classify(data),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub files_uploaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_pdf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_preview: Option<String>,
    pub insights: ReportInsights,
}

/// Loads report JSON from files or streams.
pub struct ReportLoader;

impl ReportLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MedicalReport, ReportInputError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<MedicalReport, ReportInputError> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(MedicalReport::from_json_value(value))
    }
}

fn analysis_preview(analysis: &str) -> Option<String> {
    if analysis.trim().is_empty() {
        return None;
    }

    let mut chars = analysis.chars();
    let preview: String = chars.by_ref().take(ANALYSIS_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        Some(format!("{preview}..."))
    } else {
        Some(preview)
    }
}

fn identifier_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn date_or_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()))
}

fn timestamp_or_none<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_timestamp))
}

fn array_or_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

fn extracted_data_or_none<'de, D>(deserializer: D) -> Result<Option<ExtractedData>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .is_object()
        .then(|| ExtractedData::from_json_value(value)))
}

// Timestamps without an offset are taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
