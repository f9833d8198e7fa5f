// ABOUTME: Environment configuration for the Pulsefit application layer
// ABOUTME: Data directory, reminder cadence, pool history, and coach endpoint settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{reminders, schedule, service_names};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Default coach endpoint (a local Ollama server)
pub const DEFAULT_LLM_BASE_URL: &str = "http://localhost:11434/v1";
/// Default coach model
pub const DEFAULT_LLM_MODEL: &str = "qwen2.5:7b-instruct";
/// Default coach request timeout
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;
/// Largest accepted pool history length
pub const MAX_POOL_HISTORY_LEN: usize = 16;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Daily reminder settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderConfig {
    /// Local hour (0-23) at or after which a reminder may fire
    pub hour: u32,
    /// Seconds between background checks
    pub check_interval_secs: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            hour: reminders::DEFAULT_REMINDER_HOUR,
            check_interval_secs: reminders::DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

/// Schedule service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleServiceConfig {
    /// How many recently selected pool indices to avoid on the next generation
    pub pool_history_len: usize,
}

impl Default for ScheduleServiceConfig {
    fn default() -> Self {
        Self {
            pool_history_len: schedule::DEFAULT_POOL_HISTORY_LEN,
        }
    }
}

/// Chat completion endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LlmConfig {
    /// `OpenAI`-compatible base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Bearer token, if the endpoint requires one
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Whole-request timeout
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LLM_BASE_URL.to_owned(),
            model: DEFAULT_LLM_MODEL.to_owned(),
            api_key: None,
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Directory holding the file store
    pub data_dir: PathBuf,
    /// Reminder settings
    pub reminders: ReminderConfig,
    /// Schedule service settings
    pub schedule: ScheduleServiceConfig,
    /// Coach endpoint settings
    pub llm: LlmConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            data_dir: default_data_dir(),
            reminders: ReminderConfig::default(),
            schedule: ScheduleServiceConfig::default(),
            llm: LlmConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var("PULSEFIT_ENV").unwrap_or_default(),
            ),
            data_dir: env::var("PULSEFIT_DATA_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map_or(defaults.data_dir, PathBuf::from),
            reminders: ReminderConfig {
                hour: env_parse_or("PULSEFIT_REMINDER_HOUR", defaults.reminders.hour)?,
                check_interval_secs: env_parse_or(
                    "PULSEFIT_REMINDER_INTERVAL_SECS",
                    defaults.reminders.check_interval_secs,
                )?,
            },
            schedule: ScheduleServiceConfig {
                pool_history_len: env_parse_or(
                    "PULSEFIT_POOL_HISTORY_LEN",
                    defaults.schedule.pool_history_len,
                )?,
            },
            llm: LlmConfig {
                base_url: env::var("PULSEFIT_LLM_BASE_URL").unwrap_or(defaults.llm.base_url),
                model: env::var("PULSEFIT_LLM_MODEL").unwrap_or(defaults.llm.model),
                api_key: env::var("PULSEFIT_LLM_API_KEY")
                    .ok()
                    .filter(|key| !key.is_empty()),
                timeout_secs: env_parse_or(
                    "PULSEFIT_LLM_TIMEOUT_SECS",
                    defaults.llm.timeout_secs,
                )?,
            },
        };

        config.validate()?;
        info!(
            environment = %config.environment,
            data_dir = %config.data_dir.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.reminders.hour > 23 {
            bail!(
                "PULSEFIT_REMINDER_HOUR must be between 0 and 23, got {}",
                self.reminders.hour
            );
        }
        if self.reminders.check_interval_secs == 0 {
            bail!("PULSEFIT_REMINDER_INTERVAL_SECS must be greater than 0");
        }
        if self.schedule.pool_history_len > MAX_POOL_HISTORY_LEN {
            bail!(
                "PULSEFIT_POOL_HISTORY_LEN must be at most {MAX_POOL_HISTORY_LEN}, got {}",
                self.schedule.pool_history_len
            );
        }
        if self.llm.timeout_secs == 0 {
            bail!("PULSEFIT_LLM_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }

    /// Human-readable summary for `--verbose` output
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pulsefit Configuration:\n\
             - Environment: {}\n\
             - Data directory: {}\n\
             - Reminder hour: {}:00 (check every {} s)\n\
             - Pool history: {}\n\
             - Coach: {} ({}, key {})",
            self.environment,
            self.data_dir.display(),
            self.reminders.hour,
            self.reminders.check_interval_secs,
            self.schedule.pool_history_len,
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() {
                "set"
            } else {
                "not set"
            },
        )
    }
}

/// Platform data directory for the store, falling back to the working directory
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(service_names::PULSEFIT)
}

fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key}: {value}")),
        Err(_) => Ok(default),
    }
}
