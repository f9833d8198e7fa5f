// ABOUTME: System prompts for the chat coach loaded at compile time
// ABOUTME: Keeps the coach persona in a markdown file next to the code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Pulsefit coach persona and boundaries
pub const COACH_SYSTEM_PROMPT: &str = include_str!("coach_system.md");

/// Get the system prompt for the fitness coach
#[must_use]
pub const fn get_coach_system_prompt() -> &'static str {
    COACH_SYSTEM_PROMPT
}
