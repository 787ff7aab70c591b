use super::lifestyle::LifestyleCategory;
use super::risk::RiskLevel;
use serde::{Deserialize, Serialize};

pub const NO_SPECIALISTS_PLACEHOLDER: &str = "No specialists recommended.";

/// Presentation data derived from one report's extracted data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInsights {
    pub risk_summary: RiskSummary,
    pub matched_specialists: Vec<String>,
    pub lifestyle: LifestyleRecommendations,
}

impl ReportInsights {
    pub fn specialists_or_placeholder(&self) -> Vec<&str> {
        if self.matched_specialists.is_empty() {
            vec![NO_SPECIALISTS_PLACEHOLDER]
        } else {
            self.matched_specialists.iter().map(String::as_str).collect()
        }
    }
}

/// Parameter labels partitioned by risk level, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub normal: Vec<String>,
}

impl RiskSummary {
    pub fn bucket(&self, level: RiskLevel) -> &[String] {
        match level {
            RiskLevel::High => &self.high,
            RiskLevel::Medium => &self.medium,
            RiskLevel::Normal => &self.normal,
        }
    }

    pub(crate) fn bucket_mut(&mut self, level: RiskLevel) -> &mut Vec<String> {
        match level {
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Normal => &mut self.normal,
        }
    }

    pub fn counts(&self) -> RiskCounts {
        RiskCounts {
            high: self.high.len(),
            medium: self.medium.len(),
            normal: self.normal.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.high.len() + self.medium.len() + self.normal.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub normal: usize,
}

impl RiskCounts {
    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Normal => self.normal,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleRecommendations {
    pub diet: Vec<String>,
    pub exercise: Vec<String>,
    pub general: Vec<String>,
}

impl LifestyleRecommendations {
    pub fn category(&self, category: LifestyleCategory) -> &[String] {
        match category {
            LifestyleCategory::Diet => &self.diet,
            LifestyleCategory::Exercise => &self.exercise,
            LifestyleCategory::General => &self.general,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diet.is_empty() && self.exercise.is_empty() && self.general.is_empty()
    }
}
