// ABOUTME: Typed repositories over the key-value store
// ABOUTME: Profiles, BMI history, schedules, completion progress, and per-pair pool history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{user_key, KeyValueStore};
use crate::constants::storage_keys::{
    HISTORY_PREFIX, POOL_HISTORY_PREFIX, PROFILE_PREFIX, PROGRESS_PREFIX, SCHEDULE_PREFIX,
};
use crate::errors::{AppError, AppResult};
use pulsefit_core::models::{
    AdjustedSchedule, BmiRecord, Goal, Intensity, ScheduleProgress, UserProfile,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    store
        .get(key)
        .await?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|e| {
                AppError::serialization(format!("Malformed document under {key}: {e}"))
                    .with_resource_id(key)
            })
        })
        .transpose()
}

/// Like [`load_json`], but a malformed document is logged and treated as absent
async fn load_json_lenient<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed stored document");
            Ok(None)
        }
    }
}

async fn save_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    store.put(key, serde_json::to_string(value)?).await
}

/// Stores one profile per user
#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileRepository {
    /// Repository over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Save or replace the user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails
    pub async fn save(&self, user: &str, profile: &UserProfile) -> AppResult<()> {
        save_json(self.store.as_ref(), &user_key(PROFILE_PREFIX, user), profile).await
    }

    /// Load the user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails or the document is malformed
    pub async fn load(&self, user: &str) -> AppResult<Option<UserProfile>> {
        load_json(self.store.as_ref(), &user_key(PROFILE_PREFIX, user)).await
    }
}

/// BMI measurement history, one list per user
#[derive(Clone)]
pub struct HistoryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryRepository {
    /// Repository over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn read(&self, user: &str) -> AppResult<Vec<BmiRecord>> {
        Ok(load_json(self.store.as_ref(), &user_key(HISTORY_PREFIX, user))
            .await?
            .unwrap_or_default())
    }

    async fn write(&self, user: &str, records: &[BmiRecord]) -> AppResult<()> {
        save_json(self.store.as_ref(), &user_key(HISTORY_PREFIX, user), &records).await
    }

    /// Append a measurement
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written
    pub async fn append(&self, user: &str, record: BmiRecord) -> AppResult<()> {
        let mut records = self.read(user).await?;
        records.push(record);
        self.write(user, &records).await
    }

    /// All measurements, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn list(&self, user: &str) -> AppResult<Vec<BmiRecord>> {
        let mut records = self.read(user).await?;
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }

    /// Most recent measurement
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read
    pub async fn latest(&self, user: &str) -> AppResult<Option<BmiRecord>> {
        Ok(self
            .read(user)
            .await?
            .into_iter()
            .max_by_key(|record| record.recorded_at))
    }

    /// Remove one measurement, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written
    pub async fn delete(&self, user: &str, id: Uuid) -> AppResult<bool> {
        let mut records = self.read(user).await?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write(user, &records).await?;
        Ok(true)
    }

    /// Remove all measurements
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails
    pub async fn clear(&self, user: &str) -> AppResult<()> {
        self.store
            .delete(&user_key(HISTORY_PREFIX, user))
            .await
            .map(|_| ())
    }
}

/// Generated schedule, completion flags, and recent pool indices
#[derive(Clone)]
pub struct ScheduleRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ScheduleRepository {
    /// Repository over `store`
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Save the user's schedule
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails
    pub async fn save_schedule(&self, user: &str, schedule: &AdjustedSchedule) -> AppResult<()> {
        save_json(self.store.as_ref(), &user_key(SCHEDULE_PREFIX, user), schedule).await
    }

    /// Load the user's schedule; missing or malformed documents yield an empty schedule
    ///
    /// # Errors
    ///
    /// Returns an error only if the store read itself fails
    pub async fn load_schedule(&self, user: &str) -> AppResult<AdjustedSchedule> {
        Ok(
            load_json_lenient(self.store.as_ref(), &user_key(SCHEDULE_PREFIX, user))
                .await?
                .unwrap_or_default(),
        )
    }

    /// Save completion flags
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails
    pub async fn save_progress(&self, user: &str, progress: &ScheduleProgress) -> AppResult<()> {
        save_json(self.store.as_ref(), &user_key(PROGRESS_PREFIX, user), progress).await
    }

    /// Load completion flags; missing or malformed documents yield no completions
    ///
    /// # Errors
    ///
    /// Returns an error only if the store read itself fails
    pub async fn load_progress(&self, user: &str) -> AppResult<ScheduleProgress> {
        Ok(
            load_json_lenient(self.store.as_ref(), &user_key(PROGRESS_PREFIX, user))
                .await?
                .unwrap_or_default(),
        )
    }

    /// Recently selected pool indices for one goal and intensity, oldest first
    ///
    /// Indices only make sense within the candidate list they were drawn
    /// from, so each pair keeps its own history.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store read itself fails
    pub async fn load_pool_history(
        &self,
        user: &str,
        goal: Goal,
        intensity: Intensity,
    ) -> AppResult<Vec<usize>> {
        Ok(self
            .load_pool_histories(user)
            .await?
            .remove(&pool_history_slot(goal, intensity))
            .unwrap_or_default())
    }

    /// Replace the recent pool indices for one goal and intensity
    ///
    /// # Errors
    ///
    /// Returns an error if the store read or write fails
    pub async fn save_pool_history(
        &self,
        user: &str,
        goal: Goal,
        intensity: Intensity,
        indices: &[usize],
    ) -> AppResult<()> {
        let mut histories = self.load_pool_histories(user).await?;
        histories.insert(pool_history_slot(goal, intensity), indices.to_vec());
        save_json(
            self.store.as_ref(),
            &user_key(POOL_HISTORY_PREFIX, user),
            &histories,
        )
        .await
    }

    async fn load_pool_histories(&self, user: &str) -> AppResult<BTreeMap<String, Vec<usize>>> {
        Ok(
            load_json_lenient(self.store.as_ref(), &user_key(POOL_HISTORY_PREFIX, user))
                .await?
                .unwrap_or_default(),
        )
    }
}

fn pool_history_slot(goal: Goal, intensity: Intensity) -> String {
    format!("{goal}/{intensity}")
}
