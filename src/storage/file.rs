// ABOUTME: File-backed key-value store keeping one JSON document per key
// ABOUTME: Writes go to a temporary file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{notify, KeyValueStore, StoreEvent, StoreEventKind, EVENT_CHANNEL_CAPACITY};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::broadcast;
use tracing::debug;

/// Store rooted at a directory
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
    events: broadcast::Sender<StoreEvent>,
}

impl FileStore {
    /// Open a store in `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}: {e}",
                root.display()
            ))
            .with_source(e)
        })?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root, events })
    }

    /// Directory holding the documents
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document path for `key`
    ///
    /// ASCII letters, digits and `-` are kept; every other byte, `_`
    /// included, becomes `_XX` in uppercase hex. The escape is one-to-one, so
    /// distinct keys never share a file.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

fn encode_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(char::from(byte));
        } else {
            let _ = write!(name, "_{byte:02X}");
        }
    }
    name
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {key}: {e}")).with_source(e)),
        }
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value.as_bytes())
            .await
            .map_err(|e| AppError::storage(format!("Failed to write {key}: {e}")).with_source(e))?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {key}: {e}")).with_source(e)
        })?;
        notify(&self.events, key, StoreEventKind::Put);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<bool> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => {
                notify(&self.events, key, StoreEventKind::Delete);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => {
                Err(AppError::storage(format!("Failed to delete {key}: {e}")).with_source(e))
            }
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
