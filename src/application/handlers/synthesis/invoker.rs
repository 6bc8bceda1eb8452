//! GenerationInvoker - One bounded, schema-constrained call to a generative backend.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::time::timeout;
use uuid::Uuid;

use crate::domain::synthesis::ComposedPrompt;
use crate::ports::{AIProvider, FinishReason, MessageRole, StructuredRequest};

use super::SynthesisError;

/// Name under which the output schema is announced to backends.
pub const OUTPUT_SCHEMA_NAME: &str = "presentation_envelope";

/// Sampling and time limits for a generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 4000,
            timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationSettings {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Submits a composed prompt to the backend and returns the parsed JSON output.
///
/// No retries happen here; the error says whether retrying makes sense.
pub struct GenerationInvoker<P: ?Sized + AIProvider> {
    provider: Arc<P>,
    settings: GenerationSettings,
}

impl<P: ?Sized + AIProvider> GenerationInvoker<P> {
    pub fn new(provider: Arc<P>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Runs one generation.
    ///
    /// # Errors
    ///
    /// - `BackendTimeout` when the call exceeds `settings.timeout`
    /// - `BackendUnavailable` / `BackendRejected` per the provider failure
    /// - `MalformedOutput` when the completion is not a JSON document
    pub async fn invoke(
        &self,
        prompt: &ComposedPrompt,
        output_schema: &Value,
    ) -> Result<Value, SynthesisError> {
        let trace_id = Uuid::new_v4().to_string();
        let mut request = StructuredRequest::new(output_schema.clone(), trace_id.clone())
            .with_system_prompt(prompt.system_instruction.clone())
            .with_schema_name(OUTPUT_SCHEMA_NAME)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_output_tokens);
        for turn in &prompt.messages {
            request = request.with_message(MessageRole::User, turn.content());
        }

        let info = self.provider.provider_info();
        tracing::info!(
            trace_id = %trace_id,
            provider = %info.name,
            model = %info.model,
            turns = prompt.messages.len(),
            "Invoking generative backend"
        );

        let response = match timeout(self.settings.timeout, self.provider.generate_structured(request)).await {
            Ok(result) => result?,
            Err(_) => return Err(SynthesisError::backend_timeout(self.settings.timeout)),
        };

        tracing::debug!(
            trace_id = %trace_id,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            finish_reason = ?response.finish_reason,
            "Backend responded"
        );

        parse_completion(&response.content).map_err(|err| {
            if response.finish_reason == FinishReason::Length {
                SynthesisError::malformed_output(format!(
                    "output truncated at {} tokens",
                    self.settings.max_output_tokens
                ))
            } else {
                err
            }
        })
    }
}

/// Parses completion text as JSON, tolerating a surrounding code fence.
pub fn parse_completion(content: &str) -> Result<Value, SynthesisError> {
    let text = strip_code_fence(content.trim());
    if text.is_empty() {
        return Err(SynthesisError::malformed_output("backend returned empty output"));
    }
    serde_json::from_str(text)
        .map_err(|e| SynthesisError::malformed_output(format!("output is not valid JSON: {}", e)))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
