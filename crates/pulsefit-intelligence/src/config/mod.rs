// ABOUTME: Configuration module for pulsefit-intelligence crate
// ABOUTME: Global schedule tuning loaded once from defaults plus environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod error;
mod schedule;

pub use error::ConfigError;
pub use schedule::{DayFilterConfig, ExperienceMultipliers, ScheduleAdjustmentConfig};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Intelligence configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Schedule adjustment tuning
    pub schedule: ScheduleAdjustmentConfig,
}

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when multipliers are not monotonic, the focus boost
    /// shrinks durations, the minimum duration is zero, or the day rules are
    /// inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let schedule = &self.schedule;
        let experience = &schedule.experience;

        if experience.beginner_percent == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "beginner_percent must be > 0",
            ));
        }
        if experience.beginner_percent > experience.intermediate_percent
            || experience.intermediate_percent > experience.advanced_percent
        {
            return Err(ConfigError::InvalidRange(
                "experience multipliers must satisfy beginner <= intermediate <= advanced",
            ));
        }
        if experience.unknown_percent == 0 {
            return Err(ConfigError::ValueOutOfRange("unknown_percent must be > 0"));
        }
        if schedule.focus_boost_percent < 100 {
            return Err(ConfigError::ValueOutOfRange(
                "focus_boost_percent must be >= 100",
            ));
        }
        if schedule.min_task_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange("min_task_minutes must be > 0"));
        }

        let days = &schedule.days;
        if days.spaced_days.is_empty() {
            return Err(ConfigError::ValueOutOfRange("spaced_days must not be empty"));
        }
        if days.spaced_subset_max_days >= days.six_day_max_days {
            return Err(ConfigError::InvalidRange(
                "spaced_subset_max_days must be < six_day_max_days",
            ));
        }
        if days.six_day_positions == 0
            || days.six_day_positions > pulsefit_core::constants::schedule::DAYS_PER_POOL
        {
            return Err(ConfigError::ValueOutOfRange(
                "six_day_positions must be between 1 and 7",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let experience = &mut self.schedule.experience;
        override_from_env("PULSEFIT_BEGINNER_PERCENT", &mut experience.beginner_percent)?;
        override_from_env(
            "PULSEFIT_INTERMEDIATE_PERCENT",
            &mut experience.intermediate_percent,
        )?;
        override_from_env("PULSEFIT_ADVANCED_PERCENT", &mut experience.advanced_percent)?;
        override_from_env(
            "PULSEFIT_FOCUS_BOOST_PERCENT",
            &mut self.schedule.focus_boost_percent,
        )?;
        override_from_env(
            "PULSEFIT_MIN_TASK_MINUTES",
            &mut self.schedule.min_task_minutes,
        )?;
        Ok(self)
    }
}

fn override_from_env<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = std::env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {val}")))?;
    }
    Ok(())
}
