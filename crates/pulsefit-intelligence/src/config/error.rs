// ABOUTME: Configuration error types for intelligence module validation
// ABOUTME: Covers invalid ranges, environment parse failures, and catalog defects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values that must be ordered are not
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Task pool catalog structure is broken
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl From<ConfigError> for pulsefit_core::errors::AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
