// ABOUTME: Daily workout reminders and the notifier abstraction they fire through
// ABOUTME: Log-based notifier by default; platform notifiers implement the same trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Reminder scheduler
pub mod reminders;

pub use reminders::{ReminderHandle, ReminderScheduler};

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use pulsefit_core::models::Weekday;
use tracing::info;

/// A reminder about today's unfinished task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// User the reminder is for
    pub user: String,
    /// Date the reminder refers to
    pub date: NaiveDate,
    /// Weekday of the task
    pub day: Weekday,
    /// Task description
    pub description: String,
    /// Planned minutes
    pub duration_minutes: u32,
}

impl Reminder {
    /// Notification title
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} workout reminder", self.day)
    }

    /// Notification body
    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "You haven't finished today's task yet: {} ({} min)",
            self.description, self.duration_minutes
        )
    }
}

/// Delivers reminders to the user
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one reminder
    async fn notify(&self, reminder: &Reminder) -> AppResult<()>;
}

/// Writes reminders to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, reminder: &Reminder) -> AppResult<()> {
        info!(
            user = %reminder.user,
            date = %reminder.date,
            title = %reminder.title(),
            "{}",
            reminder.body()
        );
        Ok(())
    }
}
