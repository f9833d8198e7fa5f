// ABOUTME: Weekly schedule engine, BMI calculator, and coaching rule tables
// ABOUTME: Synchronous and pure; persistence and networking live in the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulsefit Intelligence
//!
//! - **catalog**: authored task pools keyed by goal and intensity
//! - **selector**: pool choice with exclusion of recent pools and injectable entropy
//! - **adjuster**: day filtering, experience scaling, and focus boost
//! - **generator**: the three composed into one call
//! - **bmi** / **tips**: measurement math and rule-based advice
//! - **config**: tuning loaded from the environment

/// BMI calculation and classification
pub mod bmi;

/// Authored task pools
pub mod catalog;

/// Pool selection and entropy sources
pub mod selector;

/// Schedule adjustment transforms
pub mod adjuster;

/// Schedule generation pipeline
pub mod generator;

/// Tips and follow-up questions
pub mod tips;

/// Intelligence configuration
pub mod config;

pub use adjuster::ScheduleAdjuster;
pub use catalog::{CatalogLookup, TaskPoolCatalog};
pub use config::{ConfigError, IntelligenceConfig, ScheduleAdjustmentConfig};
pub use generator::{GeneratedSchedule, ScheduleGenerator};
pub use selector::{
    EntropySource, FixedSequenceEntropy, MixedEntropy, PoolSelection, PoolSelector, SeededEntropy,
};
