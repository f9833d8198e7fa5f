// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Keeps `crate::constants::...` paths stable for the application layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pulsefit_core::constants::{bmi, reminders, schedule, service_names, storage_keys};

/// User-facing messages shared by the CLI and services
pub mod messages {
    /// Shown when a user has no stored schedule or generation produced nothing
    pub const NO_SCHEDULE_YET: &str = "No schedule yet, run `plan generate`";
    /// Shown when no profile has been saved
    pub const NO_PROFILE_YET: &str = "No profile yet, run `profile set`";
}
