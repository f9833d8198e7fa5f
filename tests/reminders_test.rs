// ABOUTME: Tests for the daily workout reminder scheduler
// ABOUTME: Firing window, once-per-day guarantee, completion, and the background loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use pulsefit::config::ReminderConfig;
use pulsefit::errors::{AppError, AppResult};
use pulsefit::models::{ExperienceLevel, FocusArea, Goal, Intensity, Weekday};
use pulsefit::notifications::{Notifier, Reminder, ReminderScheduler};
use pulsefit::schedule::ScheduleService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<Reminder>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, reminder: &Reminder) -> AppResult<()> {
        self.sent.lock().await.push(reminder.clone());
        Ok(())
    }
}

/// Fails for one user until `recover` is called
struct FlakyNotifier {
    failing_user: &'static str,
    failing: AtomicBool,
    sent: Mutex<Vec<Reminder>>,
}

impl FlakyNotifier {
    fn failing_for(user: &'static str) -> Self {
        Self {
            failing_user: user,
            failing: AtomicBool::new(true),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for FlakyNotifier {
    async fn notify(&self, reminder: &Reminder) -> AppResult<()> {
        if reminder.user == self.failing_user && self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service(
                "push",
                format!("push failed for {}", reminder.user),
            ));
        }
        self.sent.lock().await.push(reminder.clone());
        Ok(())
    }
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

async fn setup(
    hour: u32,
    check_interval_secs: u64,
) -> Result<(Arc<ScheduleService>, Arc<RecordingNotifier>, ReminderScheduler)> {
    let (_store, service) = common::service_with_draws(vec![0], 1);
    let service = Arc::new(service);
    let params = common::params(
        Goal::Maintain,
        Intensity::Medium,
        7,
        FocusArea::Mixed,
        ExperienceLevel::Intermediate,
    );
    service.generate("alex", &params).await?;

    let notifier = Arc::new(RecordingNotifier::default());
    let scheduler = ReminderScheduler::new(
        Arc::clone(&service),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        vec!["alex".to_owned(), "nobody".to_owned()],
        ReminderConfig {
            hour,
            check_interval_secs,
        },
    );
    Ok((service, notifier, scheduler))
}

#[tokio::test]
async fn test_nothing_fires_before_the_hour() -> Result<()> {
    let (_service, notifier, scheduler) = setup(18, 60).await?;
    assert!(scheduler.check_once(at(1, 17, 59)).await?.is_empty());
    assert!(notifier.sent.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_fires_once_per_day() -> Result<()> {
    let (_service, notifier, scheduler) = setup(18, 60).await?;

    let fired = scheduler.check_once(at(1, 18, 0)).await?;
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].user, "alex");
    assert_eq!(fired[0].day, Weekday::Monday);
    assert!(fired[0].title().contains("Monday"));

    assert!(scheduler.check_once(at(1, 21, 30)).await?.is_empty());

    // Next day is a new reminder
    let fired = scheduler.check_once(at(2, 18, 5)).await?;
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].day, Weekday::Tuesday);

    assert_eq!(notifier.sent.lock().await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_completed_task_does_not_fire() -> Result<()> {
    let (service, _notifier, scheduler) = setup(18, 60).await?;
    service.toggle_completion("alex", Weekday::Wednesday).await?;
    assert!(scheduler.check_once(at(3, 19, 0)).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_background_loop_fires_and_stops() -> Result<()> {
    let (_service, notifier, scheduler) = setup(0, 1).await?;
    let handle = Arc::new(scheduler).start();

    // The first tick runs immediately
    let mut waited = Duration::ZERO;
    while notifier.sent.lock().await.is_empty() && waited < Duration::from_secs(3) {
        tokio::time::sleep(Duration::from_millis(20)).await;
        waited += Duration::from_millis(20);
    }
    handle.shutdown().await;

    assert_eq!(notifier.sent.lock().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_failing_user_does_not_block_others() -> Result<()> {
    let (_store, service) = common::service_with_draws(vec![0], 1);
    let service = Arc::new(service);
    let params = common::params(
        Goal::Maintain,
        Intensity::Medium,
        7,
        FocusArea::Mixed,
        ExperienceLevel::Intermediate,
    );
    service.generate("alex", &params).await?;
    service.generate("bea", &params).await?;

    let notifier = Arc::new(FlakyNotifier::failing_for("alex"));
    let scheduler = ReminderScheduler::new(
        Arc::clone(&service),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        vec!["alex".to_owned(), "bea".to_owned()],
        ReminderConfig {
            hour: 18,
            check_interval_secs: 60,
        },
    );

    let fired = scheduler.check_once(at(1, 18, 0)).await?;
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].user, "bea");

    // bea already has today's reminder; alex is still failing
    assert!(scheduler.check_once(at(1, 18, 15)).await?.is_empty());

    // alex was not marked as reminded, so the next check delivers once push works
    notifier.recover();
    let fired = scheduler.check_once(at(1, 18, 30)).await?;
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].user, "alex");

    let sent = notifier.sent.lock().await;
    let users: Vec<&str> = sent.iter().map(|r| r.user.as_str()).collect();
    assert_eq!(users, vec!["bea", "alex"]);
    Ok(())
}
