//! Property-based tests for the report insight classifier.

use proptest::prelude::*;

use report_insight::insights::{
    classify, ExtractedData, Parameter, RiskLevel, Severity, CANONICAL_SPECIALISTS,
    MAX_LIFESTYLE_ITEMS, MAX_MATCHED_SPECIALISTS,
};

fn severity() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("High".to_string())),
        Just(Some("Critical".to_string())),
        Just(Some("Abnormal".to_string())),
        Just(Some("Low".to_string())),
        Just(Some("Normal".to_string())),
        "[a-zA-Z]{0,8}".prop_map(Some),
    ]
}

fn parameter() -> impl Strategy<Value = Parameter> {
    (
        proptest::option::of("[A-Za-z ]{0,10}"),
        proptest::option::of("[0-9./]{1,6}"),
        severity(),
    )
        .prop_map(|(name, value, severity)| Parameter {
            name,
            value,
            severity,
        })
}

fn recommendation() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(CANONICAL_SPECIALISTS.to_vec()).prop_map(str::to_string),
        "[a-z ]{0,20}",
    ]
}

fn plan_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(|text| format!("{text} diet")),
        "[a-z ]{0,12}".prop_map(|text| format!("Exercise {text}")),
        "[a-z ]{0,12}",
        Just("  ".to_string()),
    ]
}

fn extracted_data() -> impl Strategy<Value = ExtractedData> {
    (
        proptest::collection::vec(parameter(), 0..24),
        proptest::collection::vec(recommendation(), 0..12),
        proptest::option::of(proptest::collection::vec(plan_line(), 0..24)),
    )
        .prop_map(|(parameters, recommendations, plan)| ExtractedData {
            parameters,
            specialist_recommendations: recommendations,
            diet_exercise_plan: plan.map(|lines| lines.join("\n")),
            analysis: None,
        })
}

proptest! {
    #[test]
    fn risk_buckets_partition_valid_parameters(data in extracted_data()) {
        let insights = classify(&data);
        let valid = data.parameters.iter().filter(|p| p.is_valid()).count();
        prop_assert_eq!(insights.risk_summary.total(), valid);
    }

    #[test]
    fn risk_buckets_preserve_input_order(data in extracted_data()) {
        let insights = classify(&data);
        for level in RiskLevel::ordered() {
            let expected: Vec<String> = data
                .parameters
                .iter()
                .filter(|p| Severity::parse(p.severity.as_deref()).risk_level() == level)
                .filter_map(Parameter::label)
                .collect();
            prop_assert_eq!(insights.risk_summary.bucket(level), expected.as_slice());
        }
    }

    #[test]
    fn every_list_is_capped(data in extracted_data()) {
        let insights = classify(&data);
        prop_assert!(insights.matched_specialists.len() <= MAX_MATCHED_SPECIALISTS);
        prop_assert!(insights.lifestyle.diet.len() <= MAX_LIFESTYLE_ITEMS);
        prop_assert!(insights.lifestyle.exercise.len() <= MAX_LIFESTYLE_ITEMS);
        prop_assert!(insights.lifestyle.general.len() <= MAX_LIFESTYLE_ITEMS);
    }

    #[test]
    fn matched_specialists_come_from_the_table(data in extracted_data()) {
        let insights = classify(&data);
        for title in &insights.matched_specialists {
            prop_assert!(CANONICAL_SPECIALISTS.contains(&title.as_str()));
        }
    }

    #[test]
    fn general_lines_are_never_blank(data in extracted_data()) {
        let insights = classify(&data);
        for line in &insights.lifestyle.general {
            prop_assert!(!line.is_empty());
            prop_assert_eq!(line.trim(), line.as_str());
        }
    }

    #[test]
    fn classification_is_deterministic(data in extracted_data()) {
        prop_assert_eq!(classify(&data), classify(&data));
    }
}
