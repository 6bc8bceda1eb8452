//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SLIDESMITH` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use slidesmith::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::application::handlers::synthesis::GenerationSettings;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads; [`AppConfig::validate()`]
/// then decides whether it is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini/OpenAI/mock)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SLIDESMITH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SLIDESMITH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SLIDESMITH__AI__PROVIDER=openai` -> `ai.provider = openai`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SLIDESMITH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The request timeout layer must outlast the generation timeout so a slow
    /// backend is reported through the envelope rather than a bare 408.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate(&self.server.environment)?;
        if self.server.request_timeout_secs <= self.ai.timeout_secs {
            return Err(ValidationError::RequestTimeoutNotAboveGeneration {
                request_secs: self.server.request_timeout_secs,
                generation_secs: self.ai.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Sampling and time limits handed to the synthesis handler
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: self.ai.temperature,
            max_output_tokens: self.ai.max_output_tokens,
            timeout: self.ai.timeout(),
        }
    }
}
