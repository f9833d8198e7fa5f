// ABOUTME: Body Mass Index calculation with input validation
// ABOUTME: BMI = weight_kg / height_m^2, classified with WHO adult thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulsefit_core::constants::bmi::{MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM, MIN_WEIGHT_KG};
use pulsefit_core::errors::{AppError, AppResult};
use pulsefit_core::models::{BmiCategory, BmiRecord};

/// Compute BMI from weight in kilograms and height in centimeters
///
/// # Errors
///
/// Returns `InvalidInput` when the weight is not in (0, 500] kg or the height
/// is not in [50, 300] cm
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= MIN_WEIGHT_KG || weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::invalid_input(format!(
            "Weight must be greater than {MIN_WEIGHT_KG} and at most {MAX_WEIGHT_KG} kg, got {weight_kg}"
        )));
    }
    if !height_cm.is_finite() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::invalid_input(format!(
            "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm, got {height_cm}"
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Validate, compute, and classify a measurement into a new history record
///
/// # Errors
///
/// Propagates validation errors from [`calculate_bmi`]
pub fn measure(weight_kg: f64, height_cm: f64) -> AppResult<BmiRecord> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;
    Ok(BmiRecord::new(bmi, weight_kg, height_cm))
}

/// Round to one decimal place for display
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Category for a raw BMI value
#[must_use]
pub fn classify(bmi: f64) -> BmiCategory {
    BmiCategory::from_bmi(bmi)
}
