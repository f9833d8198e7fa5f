// ABOUTME: Main library entry point for the Pulsefit fitness companion
// ABOUTME: Wires storage, schedule generation, reminders, and the chat coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulsefit
//!
//! A fitness companion backend: BMI tracking, a personalized weekly workout
//! schedule built from a short discovery questionnaire, daily reminders, and
//! an optional chat coach backed by any `OpenAI`-compatible endpoint.
//!
//! ## Architecture
//!
//! - **`pulsefit-core`**: errors, constants, and domain models
//! - **`pulsefit-intelligence`**: BMI math, the task pool catalog, pool
//!   selection, schedule adjustment, and tips
//! - **This crate**: configuration, logging, persistence, and services built
//!   on top of the engine
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pulsefit::config::AppConfig;
//! use pulsefit::errors::AppResult;
//! use pulsefit::models::{BmiCategory, DiscoveryParameters};
//! use pulsefit::schedule::ScheduleService;
//! use pulsefit::storage::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::default();
//!     let service = ScheduleService::new(Arc::new(InMemoryStore::new()), &config.schedule);
//!     let params = DiscoveryParameters::from_answers(
//!         BmiCategory::Normal, "Lose weight", "Low", "3-4 days", "Cardio", "Beginner",
//!     );
//!     if let Some(generated) = service.generate("alex", &params).await? {
//!         println!("{} training days", generated.schedule.len());
//!     }
//!     Ok(())
//! }
//! ```

/// Chat coach answering questions with the user's context
pub mod coach;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and `OpenAI`-compatible client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Workout reminders
pub mod notifications;

/// Schedule service over the generation engine
pub mod schedule;

/// Key-value persistence and typed repositories
pub mod storage;

/// Domain models from the core crate
pub mod models {
    pub use pulsefit_core::models::*;
}

/// Schedule engine, BMI, and tips
pub use pulsefit_intelligence as intelligence;
