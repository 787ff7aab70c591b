use super::domain::Parameter;
use super::views::RiskSummary;
use serde::{Deserialize, Serialize};

/// Severity tag attached to a parameter by the analyzer. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Critical,
    Abnormal,
    Low,
    Other,
}

impl Severity {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("High") => Self::High,
            Some("Critical") => Self::Critical,
            Some("Abnormal") => Self::Abnormal,
            Some("Low") => Self::Low,
            _ => Self::Other,
        }
    }

    pub const fn risk_level(self) -> RiskLevel {
        match self {
            Self::High | Self::Critical => RiskLevel::High,
            Self::Abnormal | Self::Low => RiskLevel::Medium,
            Self::Other => RiskLevel::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Normal,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Normal]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Normal => "Normal",
        }
    }
}

/// Partitions named parameters into risk buckets, keeping input order.
pub fn bucket_parameters(parameters: &[Parameter]) -> RiskSummary {
    let mut summary = RiskSummary::default();

    for parameter in parameters {
        let Some(label) = parameter.label() else {
            continue;
        };
        let level = Severity::parse(parameter.severity.as_deref()).risk_level();
        summary.bucket_mut(level).push(label);
    }

    summary
}
