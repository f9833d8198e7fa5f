// ABOUTME: Tests for BMI calculation, classification, tips, and follow-up questions
// ABOUTME: Rule tables are checked through their observable output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pulsefit::errors::ErrorCode;
use pulsefit::intelligence::{bmi, tips};
use pulsefit::models::{
    BmiCategory, DiscoveryParameters, ExperienceLevel, FocusArea, Goal, Intensity,
};

#[test]
fn test_bmi_calculation() {
    let value = bmi::calculate_bmi(70.0, 175.0).unwrap();
    assert!((value - 22.857).abs() < 0.001);
    assert!((bmi::round_one_decimal(value) - 22.9).abs() < f64::EPSILON);
    assert_eq!(bmi::classify(value), BmiCategory::Normal);
}

#[test]
fn test_bmi_rejects_bad_input() {
    for (weight, height) in [(0.0, 170.0), (-5.0, 170.0), (70.0, 20.0), (70.0, 400.0), (f64::NAN, 170.0)] {
        let err = bmi::calculate_bmi(weight, height).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_category_thresholds() {
    assert_eq!(bmi::classify(18.4), BmiCategory::Underweight);
    assert_eq!(bmi::classify(18.5), BmiCategory::Normal);
    assert_eq!(bmi::classify(24.9), BmiCategory::Normal);
    assert_eq!(bmi::classify(25.0), BmiCategory::Overweight);
    assert_eq!(bmi::classify(30.0), BmiCategory::Obese);
}

#[test]
fn test_measure_builds_record() {
    let record = bmi::measure(50.0, 160.0).unwrap();
    assert_eq!(record.category, BmiCategory::Normal);
    assert!((record.weight_kg - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_underweight_tips() {
    let category = bmi::classify(17.0);
    assert_eq!(category, BmiCategory::Underweight);

    let tips = tips::tips_for_category(17.0, category, "Female", 25);
    assert_eq!(tips[0], "Your BMI is 17.0.");
    assert!(tips.iter().any(|t| t.to_lowercase().contains("calorie-dense")));
    assert!(!tips
        .iter()
        .any(|t| t.to_lowercase().contains("reduce sugary drinks")));
}

#[test]
fn test_overweight_tips_mention_sugary_drinks() {
    let tips = tips::tips(27.3, "Overweight", "male", 45);
    assert!(tips
        .iter()
        .any(|t| t.to_lowercase().contains("reduce sugary drinks")));
}

#[test]
fn test_label_matching_is_case_insensitive() {
    assert_eq!(
        tips::tips(22.0, "NORMAL", "", 30),
        tips::tips(22.0, "normal weight", "", 30)
    );
}

#[test]
fn test_age_changes_tips() {
    let young = tips::tips(22.0, "normal", "", 16);
    let older = tips::tips(22.0, "normal", "", 65);
    assert_ne!(young.last(), older.last());
}

#[test]
fn test_questions_follow_answers() {
    let params = DiscoveryParameters {
        bmi_category: BmiCategory::Obese,
        goal: Goal::WeightLoss,
        intensity: Intensity::High,
        days_per_week: 3,
        focus_area: FocusArea::Cardio,
        experience_level: ExperienceLevel::Beginner,
    };
    let questions = tips::questions(&params);
    assert!(questions[0].contains("injuries"));
    assert!(questions.iter().any(|q| q.contains("gentler first week")));
    assert!(questions.iter().any(|q| q.contains("Which days")));

    let relaxed = DiscoveryParameters {
        intensity: Intensity::Low,
        days_per_week: 7,
        ..params
    };
    let questions = tips::questions(&relaxed);
    assert!(!questions.iter().any(|q| q.contains("gentler first week")));
    assert!(!questions.iter().any(|q| q.contains("Which days")));
}

#[test]
fn test_questionnaire_labels_parse() {
    let params = DiscoveryParameters::from_answers(
        BmiCategory::Normal,
        "Lose weight",
        "LOW",
        "3-4 days",
        "Cardio",
        "Beginner",
    );
    assert_eq!(params.goal, Goal::WeightLoss);
    assert_eq!(params.intensity, Intensity::Low);
    assert_eq!(params.days_per_week, 4);
    assert_eq!(params.focus_area, FocusArea::Cardio);
    assert_eq!(params.experience_level, ExperienceLevel::Beginner);
}
