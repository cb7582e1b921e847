//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Compromise gap threshold must be in (0, 100], got {0}")]
    InvalidCompromiseGap(f64),

    #[error("At least one alternative scenario must be allowed")]
    InvalidMaxScenarios,

    #[error("Low-confidence threshold must be in [0.1, 1.0], got {0}")]
    InvalidConfidenceThreshold(f64),

    #[error("Score threshold {name} must be in [0, 100], got {value}")]
    InvalidScoreThreshold { name: &'static str, value: f64 },

    #[error("Weakness threshold ({weakness}) must be below strength threshold ({strength})")]
    ThresholdsOverlap { strength: f64, weakness: f64 },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
