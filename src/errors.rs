// ABOUTME: Error types for the application layer
// ABOUTME: Re-exports the core error system so callers use `crate::errors::*`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! The application layer shares `AppError` with the core and intelligence
//! crates. Chat failures have their own enum in [`crate::llm::ChatError`].

pub use pulsefit_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
