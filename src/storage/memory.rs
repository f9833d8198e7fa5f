// ABOUTME: In-memory key-value store for tests and ephemeral sessions
// ABOUTME: RwLock-guarded map with broadcast change notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{notify, KeyValueStore, StoreEvent, StoreEventKind, EVENT_CHANNEL_CAPACITY};
use crate::errors::AppResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// In-memory store; clones share the same data
#[derive(Clone)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    events: broadcast::Sender<StoreEvent>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            events,
        }
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        self.entries.write().await.insert(key.to_owned(), value);
        notify(&self.events, key, StoreEventKind::Put);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<bool> {
        let existed = self.entries.write().await.remove(key).is_some();
        if existed {
            notify(&self.events, key, StoreEventKind::Delete);
        }
        Ok(existed)
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
