// ABOUTME: Profile commands for pulsefit-cli
// ABOUTME: Saves and shows the personal details the tips and coach rely on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulsefit::constants::bmi::{MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM};
use pulsefit::constants::messages::NO_PROFILE_YET;
use pulsefit::errors::{AppError, AppResult};
use pulsefit::models::UserProfile;
use pulsefit::storage::ProfileRepository;
use std::sync::Arc;
use tracing::info;

use super::CliContext;
use crate::helpers::display::display_profile;

/// Save or replace the profile
pub async fn set(
    ctx: &CliContext,
    name: String,
    age: u32,
    gender: String,
    height_cm: f64,
    weight_kg: f64,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Name must not be empty"));
    }
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::invalid_input(format!(
            "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"
        )));
    }
    if weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::invalid_input(format!(
            "Weight must be greater than 0 and at most {MAX_WEIGHT_KG} kg"
        )));
    }

    let profile = UserProfile {
        name: name.trim().to_owned(),
        age,
        gender: gender.trim().to_owned(),
        height_cm,
        weight_kg,
    };
    ProfileRepository::new(Arc::clone(&ctx.store))
        .save(&ctx.user, &profile)
        .await?;
    info!(user = %ctx.user, "Saved profile");

    println!("Profile saved.");
    display_profile(&profile);
    Ok(())
}

/// Show the saved profile
pub async fn show(ctx: &CliContext) -> AppResult<()> {
    match ProfileRepository::new(Arc::clone(&ctx.store))
        .load(&ctx.user)
        .await?
    {
        Some(profile) => display_profile(&profile),
        None => println!("{NO_PROFILE_YET}"),
    }
    Ok(())
}
