// ABOUTME: Rule tables producing health tips and follow-up questions
// ABOUTME: Category and gender are matched by case-insensitive substring, first branch wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tips and Questions
//!
//! Both functions are pure lookups over static text. Category branches are
//! checked in the order normal, underweight, overweight, then everything else
//! (obese or unrecognized). Gender checks test `"female"` before `"male"`
//! since the former contains the latter.

use pulsefit_core::models::{
    BmiCategory, DiscoveryParameters, ExperienceLevel, FocusArea, Goal, Intensity,
};

use crate::bmi::round_one_decimal;

const NORMAL_TIPS: &[&str] = &[
    "Your weight is in a healthy range. Keep a balanced mix of cardio and strength work.",
    "Aim for at least 150 minutes of moderate activity each week.",
    "Keep meals built around vegetables, lean protein, and whole grains.",
];

const UNDERWEIGHT_TIPS: &[&str] = &[
    "Add calorie-dense foods such as nuts, nut butters, avocado, and whole milk to your meals.",
    "Eat five to six smaller meals a day instead of two or three large ones.",
    "Favor strength training over long cardio sessions to build lean mass.",
    "Include a protein source at every meal and snack.",
];

const OVERWEIGHT_TIPS: &[&str] = &[
    "Reduce sugary drinks and replace them with water or unsweetened tea.",
    "Add a 30-minute brisk walk to most days of the week.",
    "Watch portion sizes; use a smaller plate if it helps.",
    "Combine cardio with two strength sessions a week to protect muscle.",
];

const OBESE_TIPS: &[&str] = &[
    "Talk to a healthcare provider before starting an intense exercise program.",
    "Start with low-impact activity such as walking, cycling, or swimming.",
    "Reduce sugary drinks, fried foods, and heavily processed snacks.",
    "Set small weekly goals; losing 0.5 to 1 kg per week is a healthy pace.",
];

const FEMALE_TIP: &str =
    "Make sure you get enough iron and calcium, especially if you train often.";
const MALE_TIP: &str =
    "Include compound lifts like squats and push-ups to keep muscle and bone strong.";

/// Health tips for a BMI value and profile
///
/// `category` is free text (for example a stored label such as `"Underweight"`)
/// and is matched by substring.
#[must_use]
pub fn tips(bmi: f64, category: &str, gender: &str, age: u32) -> Vec<String> {
    let category = category.to_lowercase();
    let gender = gender.to_lowercase();

    let mut tips = vec![format!("Your BMI is {:.1}.", round_one_decimal(bmi))];

    let table = if category.contains("normal") {
        NORMAL_TIPS
    } else if category.contains("underweight") {
        UNDERWEIGHT_TIPS
    } else if category.contains("overweight") {
        OVERWEIGHT_TIPS
    } else {
        OBESE_TIPS
    };
    tips.extend(table.iter().map(|tip| (*tip).to_owned()));

    if gender.contains("female") {
        tips.push(FEMALE_TIP.to_owned());
    } else if gender.contains("male") {
        tips.push(MALE_TIP.to_owned());
    }

    tips.push(age_tip(age).to_owned());
    tips
}

/// Tips for a typed category
#[must_use]
pub fn tips_for_category(bmi: f64, category: BmiCategory, gender: &str, age: u32) -> Vec<String> {
    tips(bmi, category.as_str(), gender, age)
}

const fn age_tip(age: u32) -> &'static str {
    match age {
        0..=17 => "Stay active with play and sports for an hour a day, and avoid restrictive dieting while growing.",
        18..=39 => "This is a great time to build habits; mix strength, cardio, and enough sleep.",
        40..=59 => "Add balance and mobility work, and keep up strength training to slow muscle loss.",
        _ => "Prioritize balance, flexibility, and gentle strength work, and check in with your doctor regularly.",
    }
}

/// Follow-up questions to refine a plan
#[must_use]
pub fn questions(params: &DiscoveryParameters) -> Vec<String> {
    let mut questions = vec![
        "Do you have any injuries or medical conditions we should plan around?".to_owned(),
    ];

    questions.push(
        match params.goal {
            Goal::WeightLoss => "What does a typical day of eating look like for you?",
            Goal::Maintain => "Which activities do you enjoy most and want to keep doing?",
            Goal::Build => "Do you have access to weights or a gym?",
            Goal::Unknown => "What would you most like to achieve in the next three months?",
        }
        .to_owned(),
    );

    if params.intensity == Intensity::High && params.experience_level == ExperienceLevel::Beginner
    {
        questions.push(
            "You chose high intensity with little training history. Would you prefer a gentler first week?"
                .to_owned(),
        );
    }

    if params.days_per_week <= 4 {
        questions.push("Which days of the week work best for your workouts?".to_owned());
    }

    match params.focus_area {
        FocusArea::Flexibility => questions
            .push("Do you feel stiffness or limited mobility anywhere in particular?".to_owned()),
        FocusArea::Cardio => {
            questions.push("Do you prefer running, cycling, swimming, or walking?".to_owned());
        }
        FocusArea::Strength => {
            questions.push("Which muscle groups would you like to prioritize?".to_owned());
        }
        FocusArea::Mixed | FocusArea::Unknown => {}
    }

    match params.bmi_category {
        BmiCategory::Overweight | BmiCategory::Obese => questions.push(
            "Have you spoken with a doctor about starting a new exercise program?".to_owned(),
        ),
        BmiCategory::Underweight => {
            questions.push("Are you eating enough to support regular training?".to_owned());
        }
        BmiCategory::Normal | BmiCategory::Unknown => {}
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_female_checked_before_male() {
        let female = tips(22.0, "Normal", "Female", 30);
        assert!(female.iter().any(|t| t == FEMALE_TIP));
        assert!(!female.iter().any(|t| t == MALE_TIP));

        let male = tips(22.0, "Normal", "male", 30);
        assert!(male.iter().any(|t| t == MALE_TIP));
    }

    #[test]
    fn test_unrecognized_gender_adds_nothing() {
        let tips = tips(22.0, "normal", "prefer not to say", 30);
        assert!(!tips.iter().any(|t| t == FEMALE_TIP || t == MALE_TIP));
    }

    #[test]
    fn test_age_bands() {
        assert!(age_tip(17).contains("growing"));
        assert!(age_tip(18).contains("habits"));
        assert!(age_tip(40).contains("mobility"));
        assert!(age_tip(60).contains("doctor"));
    }

    #[test]
    fn test_overweight_tips_include_sugary_drinks() {
        let tips = tips(27.0, "Overweight", "", 30);
        assert!(tips.iter().any(|t| t.to_lowercase().contains("reduce sugary drinks")));
    }
}
