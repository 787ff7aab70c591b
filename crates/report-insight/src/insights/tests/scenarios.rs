use super::common::*;
use serde_json::json;

use crate::insights::{classify, ExtractedData, ReportInsights};

#[test]
fn glucose_and_blood_pressure_are_bucketed() {
    let insights = classify(&extracted(json!({
        "parameters": [
            { "name": "Glucose", "value": 140, "severity": "High" },
            { "name": "BP", "value": "120/80", "severity": "Normal" },
        ],
    })));

    assert_eq!(insights.risk_summary.high, vec!["Glucose: 140"]);
    assert_eq!(insights.risk_summary.normal, vec!["BP: 120/80"]);
    assert!(insights.risk_summary.medium.is_empty());
}

#[test]
fn specialists_follow_table_order_not_mention_order() {
    let insights = classify(&extracted(json!({
        "specialist_recommendations": [
            "We recommend seeing a Cardiologist and an Endocrinologist soon."
        ],
    })));

    assert_eq!(
        insights.matched_specialists,
        vec!["Endocrinologist", "Cardiologist"]
    );
}

#[test]
fn plan_lines_are_sorted_into_lifestyle_columns() {
    let insights = classify(&extracted(json!({
        "diet_exercise_plan": "Reduce sugar intake (diet)\nDaily 30 min exercise\nSleep 8 hours",
    })));

    assert_eq!(insights.lifestyle.diet, vec!["Reduce sugar intake (diet)"]);
    assert_eq!(insights.lifestyle.exercise, vec!["Daily 30 min exercise"]);
    assert_eq!(insights.lifestyle.general, vec!["Sleep 8 hours"]);
}

#[test]
fn seven_diet_lines_keep_the_first_five() {
    let plan = (1..=7)
        .map(|n| format!("Diet step {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    let insights = classify(&ExtractedData {
        diet_exercise_plan: Some(plan),
        ..ExtractedData::default()
    });

    assert_eq!(
        insights.lifestyle.diet,
        vec![
            "Diet step 1",
            "Diet step 2",
            "Diet step 3",
            "Diet step 4",
            "Diet step 5"
        ]
    );
    assert!(insights.lifestyle.general.is_empty());
}

#[test]
fn nameless_parameter_is_dropped() {
    let insights = classify(&extracted(json!({
        "parameters": [{ "value": 5, "severity": "High" }],
    })));

    assert_eq!(insights.risk_summary.total(), 0);
}

#[test]
fn duplicated_table_entry_is_matched_twice() {
    let insights = classify(&extracted(json!({
        "specialist_recommendations": ["Please see an orthopedic surgeon about the knee."],
    })));

    assert_eq!(
        insights.matched_specialists,
        vec!["Orthopedic Surgeon", "Orthopedic Surgeon"]
    );
}

#[test]
fn duplicates_count_toward_the_cap() {
    let insights = classify(&extracted(json!({
        "specialist_recommendations": [
            "Neurosurgeon review, then an Orthopedic Surgeon and a Pediatric Surgeon.",
            "Also a Gynecologist."
        ],
    })));

    assert_eq!(
        insights.matched_specialists,
        vec![
            "Neurosurgeon",
            "Orthopedic Surgeon",
            "Pediatric Surgeon",
            "Gynecologist",
            "Pediatric Surgeon"
        ]
    );
}

#[test]
fn full_panel_produces_every_section() {
    let insights = classify(&lab_panel());

    assert_eq!(insights.risk_summary.high, vec!["Glucose: 182", "Troponin: 0.4"]);
    assert_eq!(
        insights.risk_summary.medium,
        vec!["Hemoglobin: 10.2", "Vitamin D: 14 ng/mL"]
    );
    assert_eq!(insights.risk_summary.normal, vec!["Platelets: 250000", "TSH: N/A"]);
    assert_eq!(
        insights.matched_specialists,
        vec!["Endocrinologist", "Hematologist"]
    );
    assert_eq!(insights.lifestyle.diet, vec!["Low sugar diet"]);
    assert_eq!(insights.lifestyle.exercise, vec!["Exercise 30 minutes daily"]);
    assert_eq!(insights.lifestyle.general, vec!["Sleep 8 hours"]);
}

#[test]
fn insights_serialize_with_presentation_field_names() {
    let value = serde_json::to_value(classify(&lab_panel())).expect("serializes");

    assert!(value["risk_summary"]["high"].is_array());
    assert!(value["risk_summary"]["medium"].is_array());
    assert!(value["risk_summary"]["normal"].is_array());
    assert!(value["matched_specialists"].is_array());
    assert!(value["lifestyle"]["diet"].is_array());
    assert!(value["lifestyle"]["exercise"].is_array());
    assert!(value["lifestyle"]["general"].is_array());

    let restored: ReportInsights = serde_json::from_value(value).expect("deserializes");
    assert_eq!(restored, classify(&lab_panel()));
}
