// ABOUTME: Tests for environment-driven configuration
// ABOUTME: Application settings, schedule tuning overrides, and logging options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pulsefit::config::{AppConfig, Environment, IntelligenceConfig};
use pulsefit::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const APP_VARS: [&str; 9] = [
    "PULSEFIT_ENV",
    "PULSEFIT_DATA_DIR",
    "PULSEFIT_REMINDER_HOUR",
    "PULSEFIT_REMINDER_INTERVAL_SECS",
    "PULSEFIT_POOL_HISTORY_LEN",
    "PULSEFIT_LLM_BASE_URL",
    "PULSEFIT_LLM_MODEL",
    "PULSEFIT_LLM_API_KEY",
    "PULSEFIT_LLM_TIMEOUT_SECS",
];

const TUNING_VARS: [&str; 3] = [
    "PULSEFIT_BEGINNER_PERCENT",
    "PULSEFIT_FOCUS_BOOST_PERCENT",
    "PULSEFIT_MIN_TASK_MINUTES",
];

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("TESTING"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("whatever"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear(&APP_VARS);
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.reminders.hour, 18);
    assert_eq!(config.schedule.pool_history_len, 1);
    assert!(config.llm.api_key.is_none());
}

#[test]
#[serial]
fn test_app_config_overrides() {
    clear(&APP_VARS);
    env::set_var("PULSEFIT_ENV", "production");
    env::set_var("PULSEFIT_DATA_DIR", "/tmp/pulsefit-test");
    env::set_var("PULSEFIT_REMINDER_HOUR", "7");
    env::set_var("PULSEFIT_POOL_HISTORY_LEN", "2");
    env::set_var("PULSEFIT_LLM_API_KEY", "secret");

    let config = AppConfig::from_env().unwrap();
    clear(&APP_VARS);

    assert!(config.environment.is_production());
    assert_eq!(config.data_dir, PathBuf::from("/tmp/pulsefit-test"));
    assert_eq!(config.reminders.hour, 7);
    assert_eq!(config.schedule.pool_history_len, 2);
    assert_eq!(config.llm.api_key.as_deref(), Some("secret"));
    assert!(config.summary().contains("key set"));
    assert!(!config.summary().contains("secret"));
}

#[test]
#[serial]
fn test_app_config_rejects_bad_values() {
    clear(&APP_VARS);
    env::set_var("PULSEFIT_REMINDER_HOUR", "25");
    assert!(AppConfig::from_env().is_err());

    env::set_var("PULSEFIT_REMINDER_HOUR", "evening");
    assert!(AppConfig::from_env().is_err());
    clear(&APP_VARS);

    env::set_var("PULSEFIT_LLM_TIMEOUT_SECS", "0");
    assert!(AppConfig::from_env().is_err());
    clear(&APP_VARS);
}

#[test]
#[serial]
fn test_tuning_overrides() {
    clear(&TUNING_VARS);
    env::set_var("PULSEFIT_BEGINNER_PERCENT", "70");
    env::set_var("PULSEFIT_MIN_TASK_MINUTES", "5");
    let config = IntelligenceConfig::load().unwrap();
    clear(&TUNING_VARS);

    assert_eq!(config.schedule.experience.beginner_percent, 70);
    assert_eq!(config.schedule.min_task_minutes, 5);
    assert_eq!(config.schedule.focus_boost_percent, 115);
}

#[test]
#[serial]
fn test_tuning_rejects_shrinking_boost() {
    clear(&TUNING_VARS);
    env::set_var("PULSEFIT_FOCUS_BOOST_PERCENT", "90");
    assert!(IntelligenceConfig::load().is_err());

    env::set_var("PULSEFIT_FOCUS_BOOST_PERCENT", "lots");
    assert!(IntelligenceConfig::load().is_err());
    clear(&TUNING_VARS);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "pulsefit-test");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "pulsefit-test");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
}
