// ABOUTME: Configuration module for application settings
// ABOUTME: Environment-driven settings; schedule tuning lives in pulsefit-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LlmConfig, ReminderConfig, ScheduleServiceConfig};
pub use pulsefit_intelligence::config::{IntelligenceConfig, ScheduleAdjustmentConfig};
