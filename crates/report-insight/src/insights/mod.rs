//! Report insight classification: risk buckets, specialist matches, and lifestyle
//! recommendations derived from an analyzer's extracted data.

mod classifier;
pub mod domain;
pub mod lifestyle;
mod report;
pub mod risk;
pub mod router;
pub mod specialists;
pub mod views;

#[cfg(test)]
mod tests;

pub use classifier::{classify, ReportInsightClassifier};
pub use domain::{ExtractedData, Parameter, MISSING_VALUE_PLACEHOLDER};
pub use lifestyle::{extract_lifestyle, LifestyleCategory, MAX_LIFESTYLE_ITEMS};
pub use report::{
    MedicalReport, ReportInputError, ReportLoader, ReportOverview, ANALYSIS_PREVIEW_CHARS,
};
pub use risk::{bucket_parameters, RiskLevel, Severity};
pub use router::insights_router;
pub use specialists::{
    SpecialistMatcher, CANONICAL_SPECIALISTS, MAX_MATCHED_SPECIALISTS, SPECIALIST_TABLE_VERSION,
};
pub use views::{
    LifestyleRecommendations, ReportInsights, RiskCounts, RiskSummary, NO_SPECIALISTS_PLACEHOLDER,
};
