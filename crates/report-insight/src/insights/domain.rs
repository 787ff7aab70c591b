use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Text used in a parameter label when the analyzer supplied no value.
pub const MISSING_VALUE_PLACEHOLDER: &str = "N/A";

/// Structured output of the upstream report analyzer.
///
/// Every field is optional on the wire and tolerates the wrong JSON type: a field
/// that cannot be read degrades to its empty form instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default, deserialize_with = "parameters_or_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, deserialize_with = "text_list_or_empty")]
    pub specialist_recommendations: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_none"
    )]
    pub diet_exercise_plan: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_none"
    )]
    pub analysis: Option<String>,
}

impl ExtractedData {
    /// Reads a record from arbitrary JSON. Anything other than an object yields an empty record.
    pub fn from_json_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

/// One measured value from the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl Parameter {
    pub fn new(name: &str, value: &str, severity: &str) -> Self {
        Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            value: Some(value.to_string()),
            severity: Some(severity.to_string()),
        }
    }

    /// A parameter without a name is excluded from every risk bucket.
    pub fn is_valid(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// `"<name>: <value>"`, or `None` for a nameless parameter.
    pub fn label(&self) -> Option<String> {
        let name = self.name.as_deref().filter(|name| !name.is_empty())?;
        let value = self.value.as_deref().unwrap_or(MISSING_VALUE_PLACEHOLDER);
        Some(format!("{name}: {value}"))
    }
}

impl From<Value> for Parameter {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };

        Self {
            name: fields.get("name").and_then(coerce_name),
            value: fields.get("value").and_then(coerce_text),
            severity: fields
                .get("severity")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Renders a scalar the way it reads in a report label.
///
/// Arrays join their elements with `,`; objects fall back to compact JSON.
pub(crate) fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(format_number(number)),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| coerce_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

// Empty strings, zero, false and null do not count as a name.
fn coerce_name(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(format_number(number))
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }

    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e15 => {
            format!("{}", float as i64)
        }
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

fn parameters_or_empty<'de, D>(deserializer: D) -> Result<Vec<Parameter>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(Parameter::from).collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn text_list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(recommendation_text).collect(),
        _ => Vec::new(),
    })
}

// Object elements carry no readable text, so they can never name a specialist.
fn recommendation_text(item: &Value) -> String {
    match item {
        Value::Object(_) => String::new(),
        other => coerce_text(other).unwrap_or_default(),
    }
}

pub(crate) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        _ => None,
    })
}
