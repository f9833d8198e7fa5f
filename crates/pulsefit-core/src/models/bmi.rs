// ABOUTME: BMI category classification and stored measurement records
// ABOUTME: Maps a BMI value to WHO adult categories and models history entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::bmi::{NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};

/// WHO adult BMI classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    Normal,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or more
    Obese,
    /// Category not known (no measurement yet)
    #[serde(other)]
    Unknown,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if !bmi.is_finite() || bmi <= 0.0 {
            Self::Unknown
        } else if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Parse a stored or displayed category label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.contains("underweight") {
            Self::Underweight
        } else if label.contains("normal") || label.contains("healthy") {
            Self::Normal
        } else if label.contains("overweight") {
            Self::Overweight
        } else if label.contains("obes") {
            Self::Obese
        } else {
            Self::Unknown
        }
    }

    /// Lowercase label, matching the text the tip rules inspect
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single BMI measurement kept in the user's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Computed BMI value
    pub bmi: f64,
    /// Category at the time of measurement
    pub category: BmiCategory,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
}

impl BmiRecord {
    /// Create a record stamped with the current time
    #[must_use]
    pub fn new(bmi: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            bmi,
            category: BmiCategory::from_bmi(bmi),
            weight_kg,
            height_cm,
            recorded_at: Utc::now(),
        }
    }
}
