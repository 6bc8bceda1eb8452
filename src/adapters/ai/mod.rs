//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for the supported generative backends.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models (default)
//! - `OpenAIProvider` - OpenAI GPT models with JSON schema response format
//! - `MockAIProvider` - Configurable mock for development and testing

mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use gemini_provider::{to_gemini_schema, GeminiConfig, GeminiProvider};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Builds the configured provider once, for sharing across requests.
///
/// Key presence is checked by `AiConfig::validate`; a missing key here
/// surfaces as `AuthenticationFailed`.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match config.provider {
        AiProvider::Gemini => {
            let key = config
                .gemini_api_key
                .clone()
                .ok_or(AIError::AuthenticationFailed)?;
            let mut gemini = GeminiConfig::new(key).with_timeout(config.timeout());
            if let Some(model) = &config.gemini_model {
                gemini = gemini.with_model(model);
            }
            if let Some(url) = &config.gemini_base_url {
                gemini = gemini.with_base_url(url);
            }
            Ok(Arc::new(GeminiProvider::new(gemini)?))
        }
        AiProvider::OpenAI => {
            let key = config
                .openai_api_key
                .clone()
                .ok_or(AIError::AuthenticationFailed)?;
            let mut openai = OpenAIConfig::new(key).with_timeout(config.timeout());
            if let Some(model) = &config.openai_model {
                openai = openai.with_model(model);
            }
            if let Some(url) = &config.openai_base_url {
                openai = openai.with_base_url(url);
            }
            Ok(Arc::new(OpenAIProvider::new(openai)?))
        }
        AiProvider::Mock => Ok(Arc::new(MockAIProvider::new())),
    }
}
