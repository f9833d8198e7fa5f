// ABOUTME: Schedule adjustment tuning: experience multipliers, focus boost, day filtering
// ABOUTME: Percent-based integers so flooring never suffers from float rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulsefit_core::constants::schedule::{
    ADVANCED_DURATION_PERCENT, BEGINNER_DURATION_PERCENT, FOCUS_BOOST_PERCENT,
    INTERMEDIATE_DURATION_PERCENT, MIN_TASK_MINUTES, SIX_DAY_MAX_DAYS, SIX_DAY_POSITIONS,
    SPACED_SUBSET_MAX_DAYS, UNKNOWN_DURATION_PERCENT,
};
use pulsefit_core::models::{ExperienceLevel, Weekday};
use serde::{Deserialize, Serialize};

/// Schedule adjustment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAdjustmentConfig {
    /// Duration multipliers per experience level
    pub experience: ExperienceMultipliers,
    /// Duration multiplier for tasks matching the focus area, in percent
    pub focus_boost_percent: u32,
    /// Minimum duration after experience scaling
    pub min_task_minutes: u32,
    /// Day filtering rules
    pub days: DayFilterConfig,
}

impl Default for ScheduleAdjustmentConfig {
    fn default() -> Self {
        Self {
            experience: ExperienceMultipliers::default(),
            focus_boost_percent: FOCUS_BOOST_PERCENT,
            min_task_minutes: MIN_TASK_MINUTES,
            days: DayFilterConfig::default(),
        }
    }
}

/// Experience level duration multipliers, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceMultipliers {
    /// Beginner multiplier
    pub beginner_percent: u32,
    /// Intermediate multiplier
    pub intermediate_percent: u32,
    /// Advanced multiplier
    pub advanced_percent: u32,
    /// Multiplier for an unrecognized level
    pub unknown_percent: u32,
}

impl Default for ExperienceMultipliers {
    fn default() -> Self {
        Self {
            beginner_percent: BEGINNER_DURATION_PERCENT,
            intermediate_percent: INTERMEDIATE_DURATION_PERCENT,
            advanced_percent: ADVANCED_DURATION_PERCENT,
            unknown_percent: UNKNOWN_DURATION_PERCENT,
        }
    }
}

impl ExperienceMultipliers {
    /// Multiplier for `level`
    #[must_use]
    pub const fn percent_for(&self, level: ExperienceLevel) -> u32 {
        match level {
            ExperienceLevel::Beginner => self.beginner_percent,
            ExperienceLevel::Intermediate => self.intermediate_percent,
            ExperienceLevel::Advanced => self.advanced_percent,
            ExperienceLevel::Unknown => self.unknown_percent,
        }
    }
}

/// Which weekdays stay active for a days-per-week answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFilterConfig {
    /// Answers up to this value use `spaced_days`
    pub spaced_subset_max_days: u8,
    /// Curated days for low-frequency weeks
    pub spaced_days: Vec<Weekday>,
    /// Answers above the spaced limit and up to this value keep the leading positions
    pub six_day_max_days: u8,
    /// Leading pool positions kept for mid-frequency weeks
    pub six_day_positions: usize,
}

impl Default for DayFilterConfig {
    fn default() -> Self {
        Self {
            spaced_subset_max_days: SPACED_SUBSET_MAX_DAYS,
            spaced_days: vec![
                Weekday::Monday,
                Weekday::Wednesday,
                Weekday::Friday,
                Weekday::Saturday,
            ],
            six_day_max_days: SIX_DAY_MAX_DAYS,
            six_day_positions: SIX_DAY_POSITIONS,
        }
    }
}
