// ABOUTME: Coach command for pulsefit-cli
// ABOUTME: Sends a question to the configured chat endpoint and prints the answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulsefit::coach::CoachService;
use pulsefit::errors::AppResult;
use pulsefit::llm::OpenAiCompatibleProvider;
use std::sync::Arc;

use super::CliContext;

/// Ask the coach a question
pub async fn ask(ctx: &CliContext, question: &str) -> AppResult<()> {
    let provider = OpenAiCompatibleProvider::from_config(&ctx.config.llm)?;
    let coach = CoachService::new(Arc::new(provider), Arc::clone(&ctx.store));

    match coach.ask(&ctx.user, question).await {
        Ok(answer) => println!("{answer}"),
        // The message already reads as a user-facing sentence
        Err(e) => eprintln!("{}", e.message),
    }
    Ok(())
}
