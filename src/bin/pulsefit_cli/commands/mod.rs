// ABOUTME: Command modules for pulsefit-cli and the context they share
// ABOUTME: Each command reads the user, configuration, and store from CliContext
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod bmi;
pub mod coach;
pub mod plan;
pub mod profile;
pub mod remind;

use pulsefit::config::AppConfig;
use pulsefit::storage::KeyValueStore;
use std::sync::Arc;

/// Everything a command needs
pub struct CliContext {
    /// Active user
    pub user: String,
    /// Loaded configuration
    pub config: AppConfig,
    /// Backing store
    pub store: Arc<dyn KeyValueStore>,
}
