// ABOUTME: Pulsefit CLI - command-line front end for the fitness companion
// ABOUTME: Profile, BMI history, weekly plan, tips, coach, and reminder commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Save your profile
//! pulsefit-cli profile set --name Alex --age 34 --gender female --height-cm 168 --weight-kg 64
//!
//! # Record a BMI measurement (uses profile values when omitted)
//! pulsefit-cli bmi record --weight-kg 63.2
//!
//! # Generate this week's plan from questionnaire answers
//! pulsefit-cli plan generate --goal "Lose weight" --intensity low --days "3-4" --focus cardio --experience beginner
//!
//! # Mark Monday done and check today's task
//! pulsefit-cli plan complete mon
//! pulsefit-cli plan today
//!
//! # Ask the coach
//! pulsefit-cli coach ask "How do I warm up before a run?"
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pulsefit::config::AppConfig;
use pulsefit::logging::LoggingConfig;
use pulsefit::storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use tracing::debug;

use commands::CliContext;

#[derive(Parser)]
#[command(
    name = "pulsefit-cli",
    about = "Pulsefit fitness companion",
    long_about = "Track BMI, generate a personalized weekly workout plan, and talk to the coach."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// User whose data the command reads and writes
    #[arg(long, short = 'u', global = true, default_value = "default")]
    user: String,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Personal details
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// BMI measurements
    Bmi {
        #[command(subcommand)]
        action: BmiCommand,
    },

    /// Weekly workout plan
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Health tips for your latest BMI
    Tips {
        /// Gender override (defaults to the profile)
        #[arg(long)]
        gender: Option<String>,

        /// Age override (defaults to the profile)
        #[arg(long)]
        age: Option<u32>,
    },

    /// Follow-up questions for a set of questionnaire answers
    Questions {
        #[command(flatten)]
        answers: commands::plan::Answers,
    },

    /// Chat coach
    Coach {
        #[command(subcommand)]
        action: CoachCommand,
    },

    /// Workout reminders
    Remind {
        #[command(subcommand)]
        action: RemindCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Save or replace the profile
    Set {
        /// Display name
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender, free text
        #[arg(long, default_value = "")]
        gender: String,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,
    },

    /// Show the saved profile
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum BmiCommand {
    /// Compute and store a measurement
    Record {
        /// Weight in kilograms (defaults to the profile)
        #[arg(long)]
        weight_kg: Option<f64>,

        /// Height in centimeters (defaults to the profile)
        #[arg(long)]
        height_cm: Option<f64>,
    },

    /// List measurements, newest first
    History {
        /// Maximum entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Delete one measurement
    Delete {
        /// Measurement ID
        id: uuid::Uuid,
    },

    /// Delete all measurements
    Clear,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate a new weekly plan
    Generate {
        #[command(flatten)]
        answers: commands::plan::Answers,
    },

    /// Show the stored plan with completion marks
    Show,

    /// Toggle completion for a day (e.g. "mon" or "Monday")
    Complete {
        /// Weekday
        day: String,
    },

    /// Show today's task
    Today,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CoachCommand {
    /// Ask the coach a question
    Ask {
        /// The question
        question: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RemindCommand {
    /// Run one reminder check now
    Check,

    /// Keep checking on the configured interval until Ctrl-C
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    debug!("{}", config.summary());

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir).await?);
    let ctx = CliContext {
        user: cli.user,
        config,
        store,
    };

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Set {
                name,
                age,
                gender,
                height_cm,
                weight_kg,
            } => {
                commands::profile::set(&ctx, name, age, gender, height_cm, weight_kg).await?;
            }
            ProfileCommand::Show => commands::profile::show(&ctx).await?,
        },
        Command::Bmi { action } => match action {
            BmiCommand::Record {
                weight_kg,
                height_cm,
            } => commands::bmi::record(&ctx, weight_kg, height_cm).await?,
            BmiCommand::History { limit } => commands::bmi::history(&ctx, limit).await?,
            BmiCommand::Delete { id } => commands::bmi::delete(&ctx, id).await?,
            BmiCommand::Clear => commands::bmi::clear(&ctx).await?,
        },
        Command::Plan { action } => match action {
            PlanCommand::Generate { answers } => commands::plan::generate(&ctx, &answers).await?,
            PlanCommand::Show => commands::plan::show(&ctx).await?,
            PlanCommand::Complete { day } => commands::plan::complete(&ctx, &day).await?,
            PlanCommand::Today => commands::plan::today(&ctx).await?,
        },
        Command::Tips { gender, age } => commands::bmi::tips(&ctx, gender, age).await?,
        Command::Questions { answers } => commands::plan::questions(&ctx, &answers).await?,
        Command::Coach { action } => match action {
            CoachCommand::Ask { question } => commands::coach::ask(&ctx, &question).await?,
        },
        Command::Remind { action } => match action {
            RemindCommand::Check => commands::remind::check(&ctx).await?,
            RemindCommand::Watch => commands::remind::watch(&ctx).await?,
        },
    }

    Ok(())
}
