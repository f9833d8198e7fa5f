// ABOUTME: Key-value storage abstraction with in-memory and file backends
// ABOUTME: Typed repositories for profiles, BMI history, and schedules sit on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Values are stored as JSON text so a corrupted document can be read back and
//! handled by the repository instead of failing inside the backend.

/// File-per-key backend
pub mod file;
/// In-memory backend
pub mod memory;
/// Typed repositories
pub mod repositories;

pub use file::FileStore;
pub use memory::InMemoryStore;
pub use repositories::{HistoryRepository, ProfileRepository, ScheduleRepository};

use crate::errors::AppResult;
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Capacity of the change notification channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEventKind {
    /// Value written
    Put,
    /// Value removed
    Delete,
}

/// Change notification emitted by a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    /// Affected key
    pub key: String,
    /// Kind of change
    pub kind: StoreEventKind,
}

/// Key-value document store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw document stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous document
    async fn put(&self, key: &str, value: String) -> AppResult<()>;

    /// Remove `key`, returning whether it existed
    async fn delete(&self, key: &str) -> AppResult<bool>;

    /// Receive change notifications for writes and deletes made after this call
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

/// Build a per-user key such as `schedule:alice`
#[must_use]
pub fn user_key(prefix: &str, user: &str) -> String {
    format!("{prefix}:{user}")
}

fn notify(events: &broadcast::Sender<StoreEvent>, key: &str, kind: StoreEventKind) {
    // No subscribers is not an error
    let _ = events.send(StoreEvent {
        key: key.to_owned(),
        kind,
    });
}
