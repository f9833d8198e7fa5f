// ABOUTME: Pure transforms turning a selected pool into the user's weekly schedule
// ABOUTME: Filters active days, scales by experience, then boosts focus-matching tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Schedule Adjuster
//!
//! Applied in a fixed order: day filtering, experience scaling (floored and
//! clamped to the minimum), focus boost (floored). The boost applies to the
//! already scaled value, so the two multipliers compound.

use pulsefit_core::models::{
    AdjustedSchedule, DayTask, DiscoveryParameters, ExperienceLevel, FocusArea, TaskPool,
};

use crate::config::ScheduleAdjustmentConfig;

/// Applies day filtering and duration adjustments to a pool
#[derive(Debug, Clone, Default)]
pub struct ScheduleAdjuster {
    config: ScheduleAdjustmentConfig,
}

impl ScheduleAdjuster {
    /// Adjuster using `config`
    #[must_use]
    pub const fn new(config: ScheduleAdjustmentConfig) -> Self {
        Self { config }
    }

    /// Tuning in use
    #[must_use]
    pub const fn config(&self) -> &ScheduleAdjustmentConfig {
        &self.config
    }

    /// Full pipeline for one pool
    #[must_use]
    pub fn adjust(&self, pool: &TaskPool, params: &DiscoveryParameters) -> AdjustedSchedule {
        let tasks = self
            .filter_days(pool, params.days_per_week)
            .into_iter()
            .map(|task| {
                let scaled = self.scale_duration(task.duration_minutes, params.experience_level);
                let boosted = self.boost_duration(&task, scaled, params.focus_area);
                task.with_duration(boosted)
            })
            .collect();
        AdjustedSchedule::new(tasks)
    }

    /// Tasks active for a days-per-week answer, in pool order
    ///
    /// Low answers (zero included) keep the curated spaced-out days, mid
    /// answers keep the leading positions, anything else keeps the full week.
    #[must_use]
    pub fn filter_days(&self, pool: &TaskPool, days_per_week: u8) -> Vec<DayTask> {
        let rules = &self.config.days;
        if days_per_week <= rules.spaced_subset_max_days {
            pool.tasks()
                .iter()
                .filter(|task| rules.spaced_days.contains(&task.day))
                .cloned()
                .collect()
        } else if days_per_week <= rules.six_day_max_days {
            pool.tasks()
                .iter()
                .take(rules.six_day_positions)
                .cloned()
                .collect()
        } else {
            pool.tasks().to_vec()
        }
    }

    /// Experience-scaled duration, floored and clamped to the minimum
    #[must_use]
    pub fn scale_duration(&self, minutes: u32, level: ExperienceLevel) -> u32 {
        let percent = self.config.experience.percent_for(level);
        apply_percent(minutes, percent).max(self.config.min_task_minutes)
    }

    /// Duration after the focus boost, given the already scaled `minutes`
    #[must_use]
    pub fn boost_duration(&self, task: &DayTask, minutes: u32, focus: FocusArea) -> u32 {
        if task.category.matches_focus(focus) && !task.category.is_boost_exempt() {
            apply_percent(minutes, self.config.focus_boost_percent)
        } else {
            minutes
        }
    }
}

/// `minutes * percent / 100`, rounded down
const fn apply_percent(minutes: u32, percent: u32) -> u32 {
    minutes.saturating_mul(percent) / 100
}
