// ABOUTME: Tests for the chat coach with scripted providers
// ABOUTME: Prompt context, answer pass-through, input checks, and failure categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use async_trait::async_trait;
use pulsefit::coach::CoachService;
use pulsefit::errors::ErrorCode;
use pulsefit::intelligence::bmi;
use pulsefit::llm::{
    ChatError, ChatRequest, ChatResponse, LlmProvider, MessageRole,
};
use pulsefit::models::{ExperienceLevel, FocusArea, Goal, Intensity, UserProfile};
use pulsefit::schedule::ScheduleService;
use pulsefit::storage::{HistoryRepository, InMemoryStore, KeyValueStore, ProfileRepository};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ScriptedProvider {
    last_request: Mutex<Option<ChatRequest>>,
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(ChatResponse {
            content: "  Start with five minutes of easy walking.  \n".to_owned(),
            model: "scripted-model".to_owned(),
            finish_reason: Some("stop".to_owned()),
        })
    }
}

struct FailingProvider(fn() -> ChatError);

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn default_model(&self) -> &str {
        "none"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        Err((self.0)())
    }
}

async fn seeded_store() -> Result<Arc<dyn KeyValueStore>> {
    common::init_test_logging();
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    ProfileRepository::new(Arc::clone(&store))
        .save(
            "alex",
            &UserProfile {
                name: "Alex".to_owned(),
                age: 34,
                gender: "female".to_owned(),
                height_cm: 175.0,
                weight_kg: 70.0,
            },
        )
        .await?;
    HistoryRepository::new(Arc::clone(&store))
        .append("alex", bmi::measure(70.0, 175.0)?)
        .await?;
    Ok(store)
}

#[tokio::test]
async fn test_answer_is_trimmed_and_prompt_has_context() -> Result<()> {
    let store = seeded_store().await?;
    ScheduleService::new(Arc::clone(&store), &Default::default())
        .generate(
            "alex",
            &common::params(
                Goal::WeightLoss,
                Intensity::Low,
                4,
                FocusArea::Cardio,
                ExperienceLevel::Beginner,
            ),
        )
        .await?;

    let provider = Arc::new(ScriptedProvider::default());
    let coach = CoachService::new(Arc::clone(&provider) as Arc<dyn LlmProvider>, store);

    let answer = coach.ask("alex", "  How do I warm up?  ").await?;
    assert_eq!(answer, "Start with five minutes of easy walking.");

    let request = provider.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.messages[0].role, MessageRole::System);
    let prompt = &request.messages[1].content;
    assert!(prompt.contains("Name: Alex"));
    assert!(prompt.contains("Latest BMI: 22.9 (normal)"));
    assert!(prompt.contains("Mon "));
    assert!(prompt.ends_with("Question: How do I warm up?"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_user_gets_placeholder_context() -> Result<()> {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let coach = CoachService::new(Arc::new(ScriptedProvider::default()), store);
    let context = coach.user_context("sam").await?;
    assert!(context.contains("Profile: not recorded"));
    assert!(context.contains("none generated yet"));
    Ok(())
}

#[tokio::test]
async fn test_empty_question_rejected() -> Result<()> {
    let coach = CoachService::new(Arc::new(ScriptedProvider::default()), seeded_store().await?);
    let err = coach.ask("alex", "   ").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    Ok(())
}

#[tokio::test]
async fn test_failures_map_to_user_messages() -> Result<()> {
    let cases: [(fn() -> ChatError, ErrorCode); 4] = [
        (
            || ChatError::NoConnectivity("dns".to_owned()),
            ErrorCode::ExternalServiceUnavailable,
        ),
        (|| ChatError::Timeout(60), ErrorCode::ExternalServiceTimeout),
        (
            || ChatError::Server {
                status: 503,
                message: "overloaded".to_owned(),
            },
            ErrorCode::ExternalServiceError,
        ),
        (
            || ChatError::InvalidResponse("no choices".to_owned()),
            ErrorCode::ExternalServiceError,
        ),
    ];

    let store = seeded_store().await?;
    for (make_error, code) in cases {
        let coach = CoachService::new(Arc::new(FailingProvider(make_error)), Arc::clone(&store));
        let err = coach.ask("alex", "Am I doing enough?").await.unwrap_err();
        assert_eq!(err.code, code);
        assert_eq!(err.message, make_error().user_message());
        assert_eq!(err.context.user_id.as_deref(), Some("alex"));
    }
    Ok(())
}
