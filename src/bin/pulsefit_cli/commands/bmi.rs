// ABOUTME: BMI commands for pulsefit-cli
// ABOUTME: Records measurements, manages history, and prints tips for the latest value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulsefit::constants::messages::NO_PROFILE_YET;
use pulsefit::errors::{AppError, AppResult};
use pulsefit::intelligence::{bmi, tips as tip_rules};
use pulsefit::storage::{HistoryRepository, ProfileRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::CliContext;
use crate::helpers::display::{display_bmi_record, display_lines};

/// Compute and store a measurement, filling gaps from the profile
pub async fn record(
    ctx: &CliContext,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> AppResult<()> {
    let profile = ProfileRepository::new(Arc::clone(&ctx.store))
        .load(&ctx.user)
        .await?;

    let weight_kg = weight_kg
        .or_else(|| profile.as_ref().map(|p| p.weight_kg))
        .ok_or_else(|| AppError::invalid_input("Pass --weight-kg or save a profile first"))?;
    let height_cm = height_cm
        .or_else(|| profile.as_ref().map(|p| p.height_cm))
        .ok_or_else(|| AppError::invalid_input("Pass --height-cm or save a profile first"))?;

    let record = bmi::measure(weight_kg, height_cm)?;
    HistoryRepository::new(Arc::clone(&ctx.store))
        .append(&ctx.user, record.clone())
        .await?;
    info!(user = %ctx.user, bmi = record.bmi, category = %record.category, "Recorded BMI");

    display_bmi_record(&record);
    Ok(())
}

/// List measurements, newest first
pub async fn history(ctx: &CliContext, limit: usize) -> AppResult<()> {
    let records = HistoryRepository::new(Arc::clone(&ctx.store))
        .list(&ctx.user)
        .await?;
    if records.is_empty() {
        println!("No measurements yet, run `bmi record`");
        return Ok(());
    }
    for record in records.iter().take(limit) {
        display_bmi_record(record);
    }
    Ok(())
}

/// Delete one measurement
pub async fn delete(ctx: &CliContext, id: Uuid) -> AppResult<()> {
    let removed = HistoryRepository::new(Arc::clone(&ctx.store))
        .delete(&ctx.user, id)
        .await?;
    if !removed {
        return Err(AppError::not_found(format!("Measurement {id}")).with_user_id(&ctx.user));
    }
    println!("Deleted measurement {id}.");
    Ok(())
}

/// Delete all measurements
pub async fn clear(ctx: &CliContext) -> AppResult<()> {
    HistoryRepository::new(Arc::clone(&ctx.store))
        .clear(&ctx.user)
        .await?;
    println!("History cleared.");
    Ok(())
}

/// Print tips for the latest measurement
pub async fn tips(ctx: &CliContext, gender: Option<String>, age: Option<u32>) -> AppResult<()> {
    let Some(latest) = HistoryRepository::new(Arc::clone(&ctx.store))
        .latest(&ctx.user)
        .await?
    else {
        println!("No measurements yet, run `bmi record`");
        return Ok(());
    };

    let profile = ProfileRepository::new(Arc::clone(&ctx.store))
        .load(&ctx.user)
        .await?;
    let gender = gender
        .or_else(|| profile.as_ref().map(|p| p.gender.clone()))
        .unwrap_or_default();
    let Some(age) = age.or_else(|| profile.as_ref().map(|p| p.age)) else {
        println!("{NO_PROFILE_YET}");
        return Ok(());
    };

    display_lines(&tip_rules::tips_for_category(
        latest.bmi,
        latest.category,
        &gender,
        age,
    ));
    Ok(())
}
