use super::views::LifestyleRecommendations;
use serde::{Deserialize, Serialize};

pub const MAX_LIFESTYLE_ITEMS: usize = 5;

const DIET_KEYWORD: &str = "diet";
const EXERCISE_KEYWORD: &str = "exercise";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleCategory {
    Diet,
    Exercise,
    General,
}

impl LifestyleCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Diet, Self::Exercise, Self::General]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Diet => "Diet",
            Self::Exercise => "Exercise",
            Self::General => "Lifestyle",
        }
    }

    pub const fn empty_placeholder(self) -> &'static str {
        match self {
            Self::Diet => "No diet recommendations.",
            Self::Exercise => "No exercise recommendations.",
            Self::General => "No general recommendations.",
        }
    }
}

struct PlanLine<'a> {
    text: &'a str,
    mentions_diet: bool,
    mentions_exercise: bool,
}

/// Splits a newline-delimited plan into diet, exercise, and general recommendations.
///
/// Diet and exercise are independent filters, so a line naming both lands in both
/// lists. General keeps the remaining non-empty lines. Each list holds at most
/// [`MAX_LIFESTYLE_ITEMS`] lines in plan order.
pub fn extract_lifestyle(plan: Option<&str>) -> LifestyleRecommendations {
    let Some(plan) = plan else {
        return LifestyleRecommendations::default();
    };

    let lines: Vec<PlanLine<'_>> = plan
        .split('\n')
        .map(str::trim)
        .map(|text| {
            let lower = text.to_lowercase();
            PlanLine {
                text,
                mentions_diet: lower.contains(DIET_KEYWORD),
                mentions_exercise: lower.contains(EXERCISE_KEYWORD),
            }
        })
        .collect();

    LifestyleRecommendations {
        diet: first_matching(&lines, |line| line.mentions_diet),
        exercise: first_matching(&lines, |line| line.mentions_exercise),
        general: first_matching(&lines, |line| {
            !line.mentions_diet && !line.mentions_exercise && !line.text.is_empty()
        }),
    }
}

fn first_matching(lines: &[PlanLine<'_>], keep: impl Fn(&PlanLine<'_>) -> bool) -> Vec<String> {
    lines
        .iter()
        .filter(|line| keep(*line))
        .take(MAX_LIFESTYLE_ITEMS)
        .map(|line| line.text.to_string())
        .collect()
}
