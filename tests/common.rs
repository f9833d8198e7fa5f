// ABOUTME: Shared test utilities for Pulsefit integration tests
// ABOUTME: Quiet logging, questionnaire builders, and in-memory service setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pulsefit`

use pulsefit::intelligence::{
    FixedSequenceEntropy, ScheduleAdjuster, TaskPoolCatalog,
};
use pulsefit::models::{
    BmiCategory, DayTask, DiscoveryParameters, ExperienceLevel, FocusArea, Goal, Intensity,
    TaskCategory, TaskPool, Weekday,
};
use pulsefit::schedule::ScheduleService;
use pulsefit::storage::{InMemoryStore, KeyValueStore};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may already have installed one
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parameters with the given answers and a normal BMI
pub fn params(
    goal: Goal,
    intensity: Intensity,
    days_per_week: u8,
    focus_area: FocusArea,
    experience_level: ExperienceLevel,
) -> DiscoveryParameters {
    DiscoveryParameters {
        bmi_category: BmiCategory::Normal,
        goal,
        intensity,
        days_per_week,
        focus_area,
        experience_level,
    }
}

/// A week where every day has the same category and duration
pub fn uniform_pool(category: TaskCategory, minutes: u32) -> TaskPool {
    TaskPool::new(std::array::from_fn(|i| DayTask {
        day: Weekday::ALL[i],
        description: format!("Task {i}"),
        category,
        duration_minutes: minutes,
        intensity: Intensity::Medium,
        notes: String::new(),
    }))
}

/// In-memory store and a schedule service replaying `draws`
pub fn service_with_draws(
    draws: Vec<u64>,
    pool_history_len: usize,
) -> (Arc<dyn KeyValueStore>, ScheduleService) {
    init_test_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let service = ScheduleService::with_parts(
        Arc::clone(&store),
        TaskPoolCatalog::builtin(),
        Box::new(FixedSequenceEntropy::new(draws)),
        ScheduleAdjuster::default(),
        pool_history_len,
    );
    (store, service)
}
