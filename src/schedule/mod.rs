// ABOUTME: Schedule service wiring the generator to persistence
// ABOUTME: One generation or completion update in flight per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Schedule Service
//!
//! Owns the per-user state the generator needs between calls (recent pool
//! indices per goal and intensity) and the completion flags, both kept in the
//! key-value store.

use crate::config::{IntelligenceConfig, ScheduleServiceConfig};
use crate::errors::{AppError, AppResult};
use crate::storage::{KeyValueStore, ScheduleRepository};
use chrono::{Datelike, NaiveDate};
use pulsefit_core::models::{
    AdjustedSchedule, DayTask, DiscoveryParameters, ScheduleProgress, Weekday,
};
use pulsefit_intelligence::{
    EntropySource, GeneratedSchedule, MixedEntropy, PoolSelector, ScheduleAdjuster,
    ScheduleGenerator, TaskPoolCatalog,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Today's task and whether it is done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayTask {
    /// The scheduled task
    pub task: DayTask,
    /// Completion flag
    pub completed: bool,
}

/// Entropy shared by the service's generator
pub type BoxedEntropy = Box<dyn EntropySource + Send>;

/// Generates, stores, and tracks weekly schedules per user
pub struct ScheduleService {
    repository: ScheduleRepository,
    generator: Mutex<ScheduleGenerator<'static, BoxedEntropy>>,
    pool_history_len: usize,
    user_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ScheduleService {
    /// Service over the built-in catalog with global tuning and production entropy
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, config: &ScheduleServiceConfig) -> Self {
        Self::with_parts(
            store,
            TaskPoolCatalog::builtin(),
            Box::new(MixedEntropy::new()),
            ScheduleAdjuster::new(IntelligenceConfig::global().schedule.clone()),
            config.pool_history_len,
        )
    }

    /// Service with an explicit catalog, entropy source, and adjuster
    #[must_use]
    pub fn with_parts(
        store: Arc<dyn KeyValueStore>,
        catalog: &'static TaskPoolCatalog,
        entropy: BoxedEntropy,
        adjuster: ScheduleAdjuster,
        pool_history_len: usize,
    ) -> Self {
        let generator = ScheduleGenerator::new(catalog, PoolSelector::new(entropy), adjuster);
        Self {
            repository: ScheduleRepository::new(store),
            generator: Mutex::new(generator),
            pool_history_len,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    fn user_lock(&self, user: &str) -> AppResult<Arc<tokio::sync::Mutex<()>>> {
        let mut locks = self
            .user_locks
            .lock()
            .map_err(|_| AppError::internal("Schedule lock table poisoned"))?;
        Ok(locks.entry(user.to_owned()).or_default().clone())
    }

    /// Drop `lock` and forget the user's entry once nobody else holds or awaits it
    fn release_user_lock(&self, user: &str, lock: Arc<tokio::sync::Mutex<()>>) {
        let Ok(mut locks) = self.user_locks.lock() else {
            return;
        };
        drop(lock);
        // Clones are only handed out under the table lock, so a count of one is final
        if locks
            .get(user)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(user);
        }
    }

    /// Users with an operation currently in flight or queued
    #[must_use]
    pub fn active_user_locks(&self) -> usize {
        self.user_locks.lock().map_or(0, |locks| locks.len())
    }

    /// Generate and store a new schedule for `user`
    ///
    /// Returns `Ok(None)` when the catalog has nothing to offer; the stored
    /// schedule is left untouched in that case. A new schedule resets the
    /// completion flags.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the store fails
    pub async fn generate(
        &self,
        user: &str,
        params: &DiscoveryParameters,
    ) -> AppResult<Option<GeneratedSchedule>> {
        let lock = self.user_lock(user)?;
        let result = {
            let _guard = lock.lock().await;
            self.generate_locked(user, params).await
        };
        self.release_user_lock(user, lock);
        result
    }

    async fn generate_locked(
        &self,
        user: &str,
        params: &DiscoveryParameters,
    ) -> AppResult<Option<GeneratedSchedule>> {
        let (goal, intensity) = (params.goal, params.intensity);
        let mut history = self
            .repository
            .load_pool_history(user, goal, intensity)
            .await?;
        let previous: HashSet<usize> = history
            .iter()
            .rev()
            .take(self.pool_history_len)
            .copied()
            .collect();

        let generated = {
            let mut generator = self
                .generator
                .lock()
                .map_err(|_| AppError::internal("Schedule generator lock poisoned"))?;
            generator.generate(params, &previous)
        };

        let Some(generated) = generated else {
            warn!(user, "Schedule generation produced nothing, catalog is empty");
            return Ok(None);
        };

        if generated.fell_back {
            warn!(
                user,
                goal = %goal,
                intensity = %intensity,
                "Served default schedule for unrecognized goal and intensity"
            );
        }

        self.repository
            .save_schedule(user, &generated.schedule)
            .await?;
        self.repository
            .save_progress(user, &ScheduleProgress::default())
            .await?;

        if self.pool_history_len > 0 {
            history.push(generated.pool_index);
            let excess = history.len().saturating_sub(self.pool_history_len);
            history.drain(..excess);
            self.repository
                .save_pool_history(user, goal, intensity, &history)
                .await?;
        }

        info!(
            user,
            pool_index = generated.pool_index,
            days = generated.schedule.len(),
            "Stored new weekly schedule"
        );
        Ok(Some(generated))
    }

    /// The stored schedule, empty if none
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn schedule(&self, user: &str) -> AppResult<AdjustedSchedule> {
        self.repository.load_schedule(user).await
    }

    /// The stored completion flags
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn progress(&self, user: &str) -> AppResult<ScheduleProgress> {
        self.repository.load_progress(user).await
    }

    /// Flip completion for `day`, returning the new flag
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no task is scheduled on `day`, or a
    /// storage error if persistence fails
    pub async fn toggle_completion(&self, user: &str, day: Weekday) -> AppResult<bool> {
        let lock = self.user_lock(user)?;
        let result = {
            let _guard = lock.lock().await;
            self.toggle_locked(user, day).await
        };
        self.release_user_lock(user, lock);
        result
    }

    async fn toggle_locked(&self, user: &str, day: Weekday) -> AppResult<bool> {
        let schedule = self.repository.load_schedule(user).await?;
        if schedule.task_for(day).is_none() {
            return Err(AppError::not_found(format!("Task for {day}")).with_user_id(user));
        }

        let mut progress = self.repository.load_progress(user).await?;
        let completed = progress.toggle(day);
        self.repository.save_progress(user, &progress).await?;
        info!(user, %day, completed, "Toggled task completion");
        Ok(completed)
    }

    /// Completed share of scheduled days, 0.0 with no schedule
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn completion_ratio(&self, user: &str) -> AppResult<f64> {
        let schedule = self.repository.load_schedule(user).await?;
        let progress = self.repository.load_progress(user).await?;
        Ok(progress.completion_ratio(&schedule))
    }

    /// Task scheduled on `date`'s weekday, if that day is active
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails
    pub async fn today_task(&self, user: &str, date: NaiveDate) -> AppResult<Option<TodayTask>> {
        let day = Weekday::from(date.weekday());
        let schedule = self.repository.load_schedule(user).await?;
        let Some(task) = schedule.task_for(day).cloned() else {
            return Ok(None);
        };
        let progress = self.repository.load_progress(user).await?;
        Ok(Some(TodayTask {
            completed: progress.is_completed(day),
            task,
        }))
    }
}
