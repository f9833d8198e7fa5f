// ABOUTME: Weekly plan commands for pulsefit-cli
// ABOUTME: Generates plans from questionnaire answers and tracks daily completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use clap::Args;
use pulsefit::constants::messages::NO_SCHEDULE_YET;
use pulsefit::errors::{AppError, AppResult};
use pulsefit::intelligence::tips::questions as follow_up_questions;
use pulsefit::models::{BmiCategory, DiscoveryParameters, Weekday};
use pulsefit::schedule::ScheduleService;
use pulsefit::storage::HistoryRepository;
use std::sync::Arc;

use super::CliContext;
use crate::helpers::display::{display_lines, display_schedule};

/// Discovery questionnaire answers
#[derive(Args, Debug, Clone)]
pub struct Answers {
    /// Goal: "weight-loss", "maintain", or "build"
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// Intensity: low, medium, or high
    #[arg(long, default_value = "medium")]
    pub intensity: String,

    /// Days per week, e.g. "3-4", "5-6", or "7"
    #[arg(long, default_value = "3-4")]
    pub days: String,

    /// Focus: cardio, strength, flexibility, or mixed
    #[arg(long, default_value = "mixed")]
    pub focus: String,

    /// Experience: beginner, intermediate, or advanced
    #[arg(long, default_value = "beginner")]
    pub experience: String,
}

impl Answers {
    fn to_parameters(&self, bmi_category: BmiCategory) -> DiscoveryParameters {
        DiscoveryParameters::from_answers(
            bmi_category,
            &self.goal,
            &self.intensity,
            &self.days,
            &self.focus,
            &self.experience,
        )
    }
}

async fn latest_category(ctx: &CliContext) -> AppResult<BmiCategory> {
    Ok(HistoryRepository::new(Arc::clone(&ctx.store))
        .latest(&ctx.user)
        .await?
        .map_or(BmiCategory::Unknown, |record| record.category))
}

fn service(ctx: &CliContext) -> ScheduleService {
    ScheduleService::new(Arc::clone(&ctx.store), &ctx.config.schedule)
}

/// Generate and store a new plan
pub async fn generate(ctx: &CliContext, answers: &Answers) -> AppResult<()> {
    let params = answers.to_parameters(latest_category(ctx).await?);
    let service = service(ctx);

    let Some(generated) = service.generate(&ctx.user, &params).await? else {
        println!("{NO_SCHEDULE_YET}");
        return Ok(());
    };

    if generated.fell_back {
        println!(
            "No plan matches goal '{}' with intensity '{}', showing the general plan.",
            params.goal, params.intensity
        );
    }
    display_schedule(&generated.schedule, &service.progress(&ctx.user).await?);
    Ok(())
}

/// Show the stored plan
pub async fn show(ctx: &CliContext) -> AppResult<()> {
    let service = service(ctx);
    let schedule = service.schedule(&ctx.user).await?;
    if schedule.is_empty() {
        println!("{NO_SCHEDULE_YET}");
        return Ok(());
    }
    display_schedule(&schedule, &service.progress(&ctx.user).await?);
    println!(
        "\nCompleted: {:.0}%",
        service.completion_ratio(&ctx.user).await? * 100.0
    );
    Ok(())
}

/// Toggle completion for `day`
pub async fn complete(ctx: &CliContext, day: &str) -> AppResult<()> {
    let day = Weekday::from_label(day)
        .ok_or_else(|| AppError::invalid_input(format!("Unknown weekday '{day}'")))?;
    let completed = service(ctx).toggle_completion(&ctx.user, day).await?;
    println!(
        "{day} marked {}.",
        if completed { "done" } else { "not done" }
    );
    Ok(())
}

/// Show today's task
pub async fn today(ctx: &CliContext) -> AppResult<()> {
    let service = service(ctx);
    if service.schedule(&ctx.user).await?.is_empty() {
        println!("{NO_SCHEDULE_YET}");
        return Ok(());
    }

    match service
        .today_task(&ctx.user, Local::now().date_naive())
        .await?
    {
        Some(today) => {
            let task = &today.task;
            println!(
                "{}: {} ({}, {} min){}",
                task.day,
                task.description,
                task.category,
                task.duration_minutes,
                if today.completed { " - done" } else { "" }
            );
            if !task.notes.is_empty() {
                println!("  {}", task.notes);
            }
        }
        None => println!("Rest day, nothing scheduled today."),
    }
    Ok(())
}

/// Print follow-up questions for the answers
pub async fn questions(ctx: &CliContext, answers: &Answers) -> AppResult<()> {
    let params = answers.to_parameters(latest_category(ctx).await?);
    display_lines(&follow_up_questions(&params));
    Ok(())
}
