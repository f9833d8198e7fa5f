// ABOUTME: Core types and constants for the Pulsefit fitness companion
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulsefit Core
//!
//! Foundation crate providing shared types and constants. This crate is
//! designed to change infrequently, enabling incremental compilation benefits
//! in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Schedule, questionnaire, BMI, and profile data models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
