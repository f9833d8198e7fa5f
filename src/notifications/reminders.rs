// ABOUTME: Periodic check firing a reminder when today's task is still open
// ABOUTME: Background loop on a tokio interval with an mpsc shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Notifier, Reminder};
use crate::config::ReminderConfig;
use crate::errors::{AppError, AppResult};
use crate::schedule::ScheduleService;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Fires at most one reminder per user per day
pub struct ReminderScheduler {
    service: Arc<ScheduleService>,
    notifier: Arc<dyn Notifier>,
    users: Vec<String>,
    config: ReminderConfig,
    last_fired: Mutex<HashMap<String, NaiveDate>>,
}

impl ReminderScheduler {
    /// Scheduler watching `users`
    #[must_use]
    pub fn new(
        service: Arc<ScheduleService>,
        notifier: Arc<dyn Notifier>,
        users: Vec<String>,
        config: ReminderConfig,
    ) -> Self {
        Self {
            service,
            notifier,
            users,
            config,
            last_fired: Mutex::new(HashMap::new()),
        }
    }

    fn already_fired(&self, user: &str, date: NaiveDate) -> AppResult<bool> {
        let last_fired = self
            .last_fired
            .lock()
            .map_err(|_| AppError::internal("Reminder state lock poisoned"))?;
        Ok(last_fired.get(user) == Some(&date))
    }

    fn mark_fired(&self, user: &str, date: NaiveDate) -> AppResult<()> {
        self.last_fired
            .lock()
            .map_err(|_| AppError::internal("Reminder state lock poisoned"))?
            .insert(user.to_owned(), date);
        Ok(())
    }

    /// Run one check at local time `now`, returning the reminders fired
    ///
    /// Nothing fires before the configured hour, for a day without a task,
    /// for a completed task, or twice on the same date. A failure for one
    /// user is logged and the remaining users are still checked; that user is
    /// retried on the next check.
    ///
    /// # Errors
    ///
    /// Returns an error only if the per-day reminder state is unusable
    pub async fn check_once(&self, now: NaiveDateTime) -> AppResult<Vec<Reminder>> {
        if now.hour() < self.config.hour {
            return Ok(Vec::new());
        }

        let date = now.date();
        let mut fired = Vec::new();
        for user in &self.users {
            if self.already_fired(user, date)? {
                continue;
            }
            match self.remind_user(user, date).await {
                Ok(Some(reminder)) => {
                    self.mark_fired(user, date)?;
                    fired.push(reminder);
                }
                Ok(None) => {}
                Err(e) => warn!(user = %user, error = %e, "Reminder failed for user"),
            }
        }
        Ok(fired)
    }

    async fn remind_user(&self, user: &str, date: NaiveDate) -> AppResult<Option<Reminder>> {
        let Some(today) = self.service.today_task(user, date).await? else {
            return Ok(None);
        };
        if today.completed {
            return Ok(None);
        }

        let reminder = Reminder {
            user: user.to_owned(),
            date,
            day: today.task.day,
            description: today.task.description,
            duration_minutes: today.task.duration_minutes,
        };
        self.notifier.notify(&reminder).await?;
        Ok(Some(reminder))
    }

    /// Spawn the periodic check on the current tokio runtime
    #[must_use]
    pub fn start(self: Arc<Self>) -> ReminderHandle {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let interval_secs = self.config.check_interval_secs.max(1);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match self.check_once(Local::now().naive_local()).await {
                            Ok(fired) if !fired.is_empty() => {
                                debug!("Sent {} workout reminders", fired.len());
                            }
                            Ok(_) => {}
                            Err(e) => warn!("Reminder check failed: {}", e),
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Reminder task received shutdown signal");
                        break;
                    }
                }
            }
        });

        ReminderHandle { shutdown_tx, task }
    }
}

/// Handle to a running reminder loop
pub struct ReminderHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl ReminderHandle {
    /// Stop the loop and wait for it to exit
    pub async fn shutdown(self) {
        // A closed channel means the loop already ended
        let _ = self.shutdown_tx.send(()).await;
        if let Err(e) = self.task.await {
            warn!("Reminder task ended abnormally: {}", e);
        }
    }
}
