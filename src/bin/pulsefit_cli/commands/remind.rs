// ABOUTME: Reminder commands for pulsefit-cli
// ABOUTME: Runs a single check or keeps the reminder loop alive until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use pulsefit::errors::{AppError, AppResult};
use pulsefit::notifications::{LogNotifier, ReminderScheduler};
use pulsefit::schedule::ScheduleService;
use std::sync::Arc;
use tracing::info;

use super::CliContext;

fn scheduler(ctx: &CliContext) -> ReminderScheduler {
    ReminderScheduler::new(
        Arc::new(ScheduleService::new(
            Arc::clone(&ctx.store),
            &ctx.config.schedule,
        )),
        Arc::new(LogNotifier),
        vec![ctx.user.clone()],
        ctx.config.reminders.clone(),
    )
}

/// Run one check now
pub async fn check(ctx: &CliContext) -> AppResult<()> {
    let fired = scheduler(ctx)
        .check_once(Local::now().naive_local())
        .await?;
    if fired.is_empty() {
        println!("No reminder due.");
    }
    for reminder in fired {
        println!("{}: {}", reminder.title(), reminder.body());
    }
    Ok(())
}

/// Check on the configured interval until Ctrl-C
pub async fn watch(ctx: &CliContext) -> AppResult<()> {
    let handle = Arc::new(scheduler(ctx)).start();
    info!(
        interval_secs = ctx.config.reminders.check_interval_secs,
        "Watching for due workouts, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::internal(format!("Failed to listen for Ctrl-C: {e}")))?;
    handle.shutdown().await;
    Ok(())
}
