use super::domain::ExtractedData;
use super::lifestyle::extract_lifestyle;
use super::risk::bucket_parameters;
use super::specialists::SpecialistMatcher;
use super::views::ReportInsights;
use tracing::debug;

/// Derives [`ReportInsights`] from extracted report data.
///
/// Classification is pure and never fails: missing or malformed input sections
/// produce empty output sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportInsightClassifier {
    specialists: SpecialistMatcher,
}

impl ReportInsightClassifier {
    pub const fn new(specialists: SpecialistMatcher) -> Self {
        Self { specialists }
    }

    pub fn classify(&self, data: &ExtractedData) -> ReportInsights {
        let risk_summary = bucket_parameters(&data.parameters);
        let matched_specialists = self
            .specialists
            .match_recommendations(&data.specialist_recommendations);
        let lifestyle = extract_lifestyle(data.diet_exercise_plan.as_deref());

        debug!(
            parameters = data.parameters.len(),
            high = risk_summary.high.len(),
            medium = risk_summary.medium.len(),
            normal = risk_summary.normal.len(),
            specialists = matched_specialists.len(),
            diet = lifestyle.diet.len(),
            exercise = lifestyle.exercise.len(),
            general = lifestyle.general.len(),
            "classified report insights"
        );

        ReportInsights {
            risk_summary,
            matched_specialists,
            lifestyle,
        }
    }
}

/// Classifies with the canonical specialist table.
pub fn classify(data: &ExtractedData) -> ReportInsights {
    ReportInsightClassifier::default().classify(data)
}
