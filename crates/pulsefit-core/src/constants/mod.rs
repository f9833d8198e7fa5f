// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for BMI classification, schedule tuning, and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// BMI classification thresholds (WHO adult cut-offs)
pub mod bmi {
    /// Below this value a BMI is classified as underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this value (and at or above underweight) a BMI is normal
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this value (and at or above normal) a BMI is overweight
    pub const OVERWEIGHT_UPPER: f64 = 30.0;

    /// Smallest accepted body weight in kilograms (exclusive)
    pub const MIN_WEIGHT_KG: f64 = 0.0;
    /// Largest accepted body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Smallest accepted height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Largest accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;
}

/// Weekly schedule tuning defaults
pub mod schedule {
    /// Number of days in every authored task pool
    pub const DAYS_PER_POOL: usize = 7;

    /// Duration multiplier for beginners, in percent
    pub const BEGINNER_DURATION_PERCENT: u32 = 80;
    /// Duration multiplier for intermediate users, in percent
    pub const INTERMEDIATE_DURATION_PERCENT: u32 = 100;
    /// Duration multiplier for advanced users, in percent
    pub const ADVANCED_DURATION_PERCENT: u32 = 120;
    /// Duration multiplier when the experience level is not recognized
    pub const UNKNOWN_DURATION_PERCENT: u32 = 100;

    /// Duration multiplier for tasks matching the focus area, in percent
    pub const FOCUS_BOOST_PERCENT: u32 = 115;

    /// Floor applied after experience scaling
    pub const MIN_TASK_MINUTES: u32 = 10;

    /// Highest days-per-week answer served by the spaced-out subset
    pub const SPACED_SUBSET_MAX_DAYS: u8 = 4;
    /// Highest days-per-week answer served by the first-six-days rule
    pub const SIX_DAY_MAX_DAYS: u8 = 6;
    /// Number of leading pool positions kept for 5-6 days per week
    pub const SIX_DAY_POSITIONS: usize = 6;

    /// Recent pool indices excluded from the next selection by default
    pub const DEFAULT_POOL_HISTORY_LEN: usize = 1;
}

/// Reminder scheduling defaults
pub mod reminders {
    /// Local hour of day (0-23) after which the daily reminder may fire
    pub const DEFAULT_REMINDER_HOUR: u32 = 18;
    /// Seconds between reminder checks
    pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 900;
}

/// Key prefixes used by the key-value store
pub mod storage_keys {
    /// Prefix for persisted user profiles
    pub const PROFILE_PREFIX: &str = "profile";
    /// Prefix for BMI measurement history
    pub const HISTORY_PREFIX: &str = "bmi_history";
    /// Prefix for the generated weekly schedule
    pub const SCHEDULE_PREFIX: &str = "schedule";
    /// Prefix for per-weekday completion flags
    pub const PROGRESS_PREFIX: &str = "schedule_progress";
    /// Prefix for recently selected pool indices
    pub const POOL_HISTORY_PREFIX: &str = "schedule_pools";
}

/// Service identity used in logs
pub mod service_names {
    /// Service name for structured logging
    pub const PULSEFIT: &str = "pulsefit";
}
