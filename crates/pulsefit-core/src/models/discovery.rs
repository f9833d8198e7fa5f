// ABOUTME: Discovery questionnaire answers that drive weekly schedule generation
// ABOUTME: Goal, intensity, experience, and focus enums with permissive label parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bmi::BmiCategory;

/// Primary fitness goal selected in the questionnaire
///
/// Parsing never fails: unrecognized answers become [`Goal::Unknown`], which
/// the catalog resolves to its default pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Lose body weight
    WeightLoss,
    /// Maintain current weight and fitness
    Maintain,
    /// Build muscle and strength
    Build,
    /// Answer not recognized
    #[serde(other)]
    Unknown,
}

impl Goal {
    /// All recognized goals, in questionnaire order
    pub const KNOWN: [Self; 3] = [Self::WeightLoss, Self::Maintain, Self::Build];

    /// Parse a questionnaire answer or stored label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("loss") || label.contains("lose") {
            Self::WeightLoss
        } else if label.contains("maintain") {
            Self::Maintain
        } else if label.contains("build") || label.contains("muscle") || label.contains("gain") {
            Self::Build
        } else {
            Self::Unknown
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::Maintain => "maintain",
            Self::Build => "build",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effort level, used both for the requested weekly intensity and per task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Light effort
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
    /// Answer not recognized
    #[serde(other)]
    Unknown,
}

impl Intensity {
    /// All recognized intensities, lowest first
    pub const KNOWN: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Parse a questionnaire answer or stored label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("low") || label.contains("light") {
            Self::Low
        } else if label.contains("medium") || label.contains("moderate") {
            Self::Medium
        } else if label.contains("high") || label.contains("intense") || label.contains("vigorous")
        {
            Self::High
        } else {
            Self::Unknown
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported exercise history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Little or no regular exercise
    Beginner,
    /// Exercises regularly
    Intermediate,
    /// Long, consistent training history
    Advanced,
    /// Answer not recognized
    #[serde(other)]
    Unknown,
}

impl ExperienceLevel {
    /// Parse a questionnaire answer or stored label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("beginner") || label.contains("new") || label.contains("never") {
            Self::Beginner
        } else if label.contains("intermediate") || label.contains("some") {
            Self::Intermediate
        } else if label.contains("advanced") || label.contains("expert") {
            Self::Advanced
        } else {
            Self::Unknown
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training category the user wants emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusArea {
    /// Endurance and heart health
    Cardio,
    /// Resistance training
    Strength,
    /// Mobility and stretching
    Flexibility,
    /// A balance of everything
    Mixed,
    /// Answer not recognized
    #[serde(other)]
    Unknown,
}

impl FocusArea {
    /// Parse a questionnaire answer or stored label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("cardio") {
            Self::Cardio
        } else if label.contains("strength") {
            Self::Strength
        } else if label.contains("flex") || label.contains("mobility") || label.contains("yoga") {
            Self::Flexibility
        } else if label.contains("mix") || label.contains("balance") {
            Self::Mixed
        } else {
            Self::Unknown
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Flexibility => "flexibility",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a days-per-week answer such as `"3-4 days"`, `"5-6"` or `"7"`
///
/// Whole numbers are read, the largest one wins and the result is clamped to
/// 1..=7, so `"10"` means every day. Answers without any digit map to 7, so an
/// unreadable answer keeps the full week rather than dropping days.
#[must_use]
pub fn days_per_week_from_answer(answer: &str) -> u8 {
    answer
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<u32>().unwrap_or(u32::MAX))
        .max()
        .map_or(7, |days| days.clamp(1, 7) as u8)
}

/// Immutable answers collected by the discovery questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryParameters {
    /// Category derived from the user's latest BMI
    pub bmi_category: BmiCategory,
    /// Primary goal
    pub goal: Goal,
    /// Requested weekly intensity
    pub intensity: Intensity,
    /// Requested training days per week (1-7)
    pub days_per_week: u8,
    /// Category to emphasize
    pub focus_area: FocusArea,
    /// Exercise history
    pub experience_level: ExperienceLevel,
}

impl DiscoveryParameters {
    /// Build parameters from raw questionnaire answers
    #[must_use]
    pub fn from_answers(
        bmi_category: BmiCategory,
        goal: &str,
        intensity: &str,
        days_per_week: &str,
        focus_area: &str,
        experience_level: &str,
    ) -> Self {
        Self {
            bmi_category,
            goal: Goal::from_label(goal),
            intensity: Intensity::from_label(intensity),
            days_per_week: days_per_week_from_answer(days_per_week),
            focus_area: FocusArea::from_label(focus_area),
            experience_level: ExperienceLevel::from_label(experience_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_answer_ranges_take_upper_bound() {
        assert_eq!(days_per_week_from_answer("3-4 days"), 4);
        assert_eq!(days_per_week_from_answer("5-6"), 6);
        assert_eq!(days_per_week_from_answer("7"), 7);
    }

    #[test]
    fn test_days_answer_reads_whole_numbers() {
        assert_eq!(days_per_week_from_answer("10"), 7);
        assert_eq!(days_per_week_from_answer("1-10 days"), 7);
        assert_eq!(days_per_week_from_answer("12 or 2"), 7);
        assert_eq!(days_per_week_from_answer("99999999999999999999"), 7);
    }

    #[test]
    fn test_days_answer_clamps_and_defaults() {
        assert_eq!(days_per_week_from_answer("0"), 1);
        assert_eq!(days_per_week_from_answer("whenever"), 7);
        assert_eq!(days_per_week_from_answer(""), 7);
    }
}
