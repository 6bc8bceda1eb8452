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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Temperature must be in (0, 2]")]
    InvalidTemperature,

    #[error("Max output tokens must be positive")]
    InvalidMaxOutputTokens,

    #[error("Invalid generation timeout")]
    InvalidGenerationTimeout,

    #[error("Request timeout ({request_secs}s) must exceed the generation timeout ({generation_secs}s)")]
    RequestTimeoutNotAboveGeneration {
        request_secs: u64,
        generation_secs: u64,
    },

    #[error("Mock AI provider is not allowed in production")]
    MockProviderInProduction,
}
