// ABOUTME: Chat coach answering free-form questions with the user's own context
// ABOUTME: Builds the prompt from profile, latest BMI, and weekly plan, then calls the LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach Service
//!
//! The coach is a pass-through to a chat completion endpoint. What it adds is
//! context: the question is sent together with a short summary of what the
//! store knows about the user. Failures reach the caller as an [`AppError`]
//! whose message is the user-facing text of the [`ChatError`] category.

use crate::errors::{AppError, AppResult};
use crate::llm::prompts::get_coach_system_prompt;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::storage::{HistoryRepository, KeyValueStore, ProfileRepository, ScheduleRepository};
use pulsefit_core::models::{AdjustedSchedule, BmiRecord, UserProfile};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{info, warn};

/// Sampling temperature for coach answers
const COACH_TEMPERATURE: f32 = 0.7;

/// Answer length cap
const COACH_MAX_TOKENS: u32 = 512;

/// Longest accepted question, in characters
pub const MAX_QUESTION_CHARS: usize = 2000;

/// Answers user questions through an [`LlmProvider`]
pub struct CoachService {
    provider: Arc<dyn LlmProvider>,
    profiles: ProfileRepository,
    history: HistoryRepository,
    schedules: ScheduleRepository,
}

impl CoachService {
    /// Coach reading user context from `store`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            profiles: ProfileRepository::new(Arc::clone(&store)),
            history: HistoryRepository::new(Arc::clone(&store)),
            schedules: ScheduleRepository::new(store),
        }
    }

    /// Context block describing `user`
    ///
    /// # Errors
    ///
    /// Returns an error if a store read fails
    pub async fn user_context(&self, user: &str) -> AppResult<String> {
        let profile = self.profiles.load(user).await?;
        let latest = self.history.latest(user).await?;
        let schedule = self.schedules.load_schedule(user).await?;
        Ok(format_context(
            profile.as_ref(),
            latest.as_ref(),
            &schedule,
        ))
    }

    /// Full request for `question`
    ///
    /// # Errors
    ///
    /// Returns an error if a store read fails
    pub async fn build_request(&self, user: &str, question: &str) -> AppResult<ChatRequest> {
        let context = self.user_context(user).await?;
        let prompt = format!("{context}\n\nQuestion: {}", question.trim());
        Ok(ChatRequest::new(vec![
            ChatMessage::system(get_coach_system_prompt()),
            ChatMessage::user(prompt),
        ])
        .with_temperature(COACH_TEMPERATURE)
        .with_max_tokens(COACH_MAX_TOKENS))
    }

    /// Ask the coach a question on behalf of `user`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty or oversized question, a storage
    /// error if context cannot be read, or an external-service error carrying
    /// the user-facing message when the chat call fails
    pub async fn ask(&self, user: &str, question: &str) -> AppResult<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::invalid_input("Question must not be empty"));
        }
        if question.chars().count() > MAX_QUESTION_CHARS {
            return Err(AppError::invalid_input(format!(
                "Question is longer than {MAX_QUESTION_CHARS} characters"
            )));
        }

        let request = self.build_request(user, question).await?;
        match self.provider.complete(&request).await {
            Ok(response) => {
                info!(
                    user,
                    provider = self.provider.name(),
                    model = %response.model,
                    "Coach answered"
                );
                Ok(response.content.trim().to_owned())
            }
            Err(e) => {
                warn!(user, provider = self.provider.name(), error = %e, "Coach request failed");
                Err(AppError::from(e).with_user_id(user))
            }
        }
    }
}

fn format_context(
    profile: Option<&UserProfile>,
    latest: Option<&BmiRecord>,
    schedule: &AdjustedSchedule,
) -> String {
    let mut context = String::from("User context:\n");

    match profile {
        Some(profile) => {
            let _ = writeln!(context, "- Profile: {}", profile.context_line());
        }
        None => context.push_str("- Profile: not recorded\n"),
    }

    match latest {
        Some(record) => {
            let _ = writeln!(
                context,
                "- Latest BMI: {:.1} ({})",
                record.bmi, record.category
            );
        }
        None => context.push_str("- Latest BMI: not recorded\n"),
    }

    if schedule.is_empty() {
        context.push_str("- Weekly plan: none generated yet");
    } else {
        let days: Vec<String> = schedule
            .tasks()
            .iter()
            .map(|task| {
                format!(
                    "{} {} ({}, {} min)",
                    task.day.abbreviation(),
                    task.description,
                    task.category,
                    task.duration_minutes
                )
            })
            .collect();
        let _ = write!(context, "- Weekly plan: {}", days.join("; "));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_without_data() {
        let context = format_context(None, None, &AdjustedSchedule::empty());
        assert!(context.contains("Profile: not recorded"));
        assert!(context.contains("Latest BMI: not recorded"));
        assert!(context.contains("none generated yet"));
    }

    #[test]
    fn test_context_includes_rounded_bmi() {
        let record = BmiRecord::new(22.456, 70.0, 176.5);
        let context = format_context(None, Some(&record), &AdjustedSchedule::empty());
        assert!(context.contains("Latest BMI: 22.5 (normal)"));
    }
}
