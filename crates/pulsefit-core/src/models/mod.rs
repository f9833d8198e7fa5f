// ABOUTME: Core data models and types for the Pulsefit companion
// ABOUTME: Re-exports schedule, discovery, BMI, and profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `DiscoveryParameters`: questionnaire answers driving schedule generation
//! - `DayTask` / `TaskPool` / `AdjustedSchedule`: the weekly plan at each stage
//! - `ScheduleProgress`: per-weekday completion flags
//! - `BmiRecord` / `BmiCategory`: measurement history
//! - `UserProfile`: personal details

mod bmi;
mod discovery;
mod profile;
mod schedule;

pub use bmi::{BmiCategory, BmiRecord};
pub use discovery::{
    days_per_week_from_answer, DiscoveryParameters, ExperienceLevel, FocusArea, Goal, Intensity,
};
pub use profile::UserProfile;
pub use schedule::{AdjustedSchedule, DayTask, ScheduleProgress, TaskCategory, TaskPool, Weekday};
