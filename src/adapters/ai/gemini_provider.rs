//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! Calls `models/{model}:generateContent` with `responseMimeType:
//! application/json` and a `responseSchema`. Gemini accepts only an OpenAPI
//! subset of JSON Schema, so the output schema is translated first.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key).with_model("gemini-2.5-pro");
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, FinishReason, MessageRole, ProviderInfo, StructuredRequest,
    StructuredResponse, TokenUsage,
};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-pro", "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API (default: https://generativelanguage.googleapis.com/v1beta).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the HTTP client cannot be built
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::invalid_request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn to_gemini_request(&self, request: &StructuredRequest) -> GenerateContentRequest {
        let contents = request
            .messages
            .iter()
            .map(|msg| Content {
                role: Some(
                    match msg.role {
                        MessageRole::User => "user",
                        MessageRole::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: msg.content.clone(),
                }],
            })
            .collect();

        let system_instruction = request.system_prompt.as_ref().map(|text| Content {
            role: None,
            parts: vec![Part { text: text.clone() }],
        });

        GenerateContentRequest {
            system_instruction,
            contents,
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: "application/json".to_string(),
                response_schema: to_gemini_schema(&request.output_schema),
            },
        }
    }

    async fn send_request(&self, request: &StructuredRequest) -> Result<Response, AIError> {
        let body = self.to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::timeout(self.config.timeout.as_secs() as u32)
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(30);
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        match status.as_u16() {
            400 if body.contains("API_KEY_INVALID") => Err(AIError::AuthenticationFailed),
            400 if message.contains("exceeds the maximum number of tokens") => {
                Err(AIError::context_too_long(0, 0))
            }
            400 => Err(AIError::invalid_request(message)),
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::rate_limited(retry_after)),
            504 => Err(AIError::timeout(self.config.timeout.as_secs() as u32)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, message
            ))),
            _ => Err(AIError::invalid_request(format!(
                "Unexpected status {}: {}",
                status, message
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<StructuredResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse Gemini response: {}", e)))?;

        if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AIError::content_filtered(format!("prompt blocked: {}", reason)));
        }

        let candidate = parsed
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| AIError::parse("Gemini API returned no candidates"))?;

        let finish_reason = match candidate.finish_reason.as_deref() {
            Some("STOP") | None => FinishReason::Stop,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST")
            | Some("PROHIBITED_CONTENT") | Some("SPII") => FinishReason::ContentFilter,
            Some(_) => FinishReason::Error,
        };

        if finish_reason == FinishReason::ContentFilter {
            return Err(AIError::content_filtered(
                candidate.finish_reason.unwrap_or_default(),
            ));
        }

        let content: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if content.is_empty() {
            return Err(AIError::parse("Gemini API returned no text in the response candidates"));
        }

        let usage = parsed
            .usage_metadata
            .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        Ok(StructuredResponse {
            content,
            usage,
            model: parsed.model_version.unwrap_or_else(|| self.config.model.clone()),
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> Result<StructuredResponse, AIError> {
        tracing::debug!(
            trace_id = %request.trace_id,
            model = %self.config.model,
            messages = request.messages.len(),
            "Sending Gemini generateContent"
        );
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model, 1_048_576)
    }
}

/// Translates a JSON Schema into Gemini's OpenAPI schema subset.
///
/// Keeps `type` (upper-cased), `description`, `properties`, `items`,
/// `required`, `enum`, `nullable`, `minItems` and `maxItems`; every other
/// keyword is dropped.
pub fn to_gemini_schema(schema: &Value) -> Value {
    let Some(obj) = schema.as_object() else {
        return schema.clone();
    };

    let mut out = Map::new();
    for (key, value) in obj {
        match key.as_str() {
            "type" => {
                if let Some(t) = value.as_str() {
                    out.insert(key.clone(), Value::String(t.to_ascii_uppercase()));
                }
            }
            "properties" => {
                if let Some(props) = value.as_object() {
                    let translated = props
                        .iter()
                        .map(|(name, prop)| (name.clone(), to_gemini_schema(prop)))
                        .collect();
                    out.insert(key.clone(), Value::Object(translated));
                }
            }
            "items" => {
                out.insert(key.clone(), to_gemini_schema(value));
            }
            "description" | "required" | "enum" | "nullable" | "minItems" | "maxItems" => {
                out.insert(key.clone(), value.clone());
            }
            _ => {}
        }
    }
    Value::Object(out)
}

/// Extracts `error.status: error.message` from a Gemini error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status.is_empty() {
                msg
            } else {
                format!("{}: {}", status, msg)
            }
        })
        .unwrap_or_else(|_| body.to_string())
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> StructuredRequest {
        StructuredRequest::new(
            json!({
                "$schema": "http://json-schema.org/draft-07/schema#",
                "type": "object",
                "required": ["message"],
                "properties": {"message": {"type": "string", "minLength": 1}}
            }),
            "trace-1",
        )
        .with_system_prompt("You build slides")
        .with_message(MessageRole::User, "Create a deck about bees")
        .with_temperature(0.7)
        .with_max_tokens(4000)
    }

    fn provider(server: &MockServer) -> GeminiProvider {
        GeminiProvider::new(GeminiConfig::new("test-key").with_base_url(server.uri())).unwrap()
    }

    fn candidate(text: &str, finish: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": finish
            }],
            "usageMetadata": {"promptTokenCount": 50, "candidatesTokenCount": 25, "totalTokenCount": 75},
            "modelVersion": "gemini-2.5-pro-001"
        })
    }

    #[test]
    fn schema_translation_drops_unsupported_keywords() {
        let translated = to_gemini_schema(&json!({
            "$schema": "x",
            "title": "Envelope",
            "type": "object",
            "required": ["a"],
            "properties": {
                "a": {"type": "string", "minLength": 1, "format": "uri", "description": "A"},
                "b": {"type": "array", "items": {"type": "string"}}
            }
        }));

        assert_eq!(
            translated,
            json!({
                "type": "OBJECT",
                "required": ["a"],
                "properties": {
                    "a": {"type": "STRING", "description": "A"},
                    "b": {"type": "ARRAY", "items": {"type": "STRING"}}
                }
            })
        );
    }

    #[test]
    fn request_uses_json_mime_type_and_model_role() {
        let provider = GeminiProvider::new(GeminiConfig::new("k")).unwrap();
        let req = request().with_message(MessageRole::Assistant, "Done");
        let body = serde_json::to_value(provider.to_gemini_request(&req)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You build slides");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4000);
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn error_message_prefers_status_and_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(error_message(body), "RESOURCE_EXHAUSTED: Quota exceeded");
        assert_eq!(error_message("plain"), "plain");
    }

    #[tokio::test]
    async fn successful_generation_returns_text_and_usage() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-pro:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(
                json!({"generationConfig": {"responseMimeType": "application/json"}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"message\":\"hi\"}", "STOP")))
            .mount(&server)
            .await;

        let response = provider(&server).generate_structured(request()).await.unwrap();

        assert_eq!(response.content, "{\"message\":\"hi\"}");
        assert_eq!(response.usage.total_tokens, 75);
        assert_eq!(response.model, "gemini-2.5-pro-001");
    }

    #[tokio::test]
    async fn invalid_api_key_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT",
                    "details": [{"reason": "API_KEY_INVALID"}]
                }
            })))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn quota_exhaustion_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "9"))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 9 }));
    }

    #[tokio::test]
    async fn server_error_maps_to_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn safety_stop_maps_to_content_filtered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"finishReason": "SAFETY"}]
            })))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::ContentFiltered { .. }));
    }

    #[tokio::test]
    async fn blocked_prompt_maps_to_content_filtered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::ContentFiltered { .. }));
    }

    #[tokio::test]
    async fn missing_candidates_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::Parse(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider(&server).generate_structured(request()).await.unwrap_err();
        assert!(matches!(err, AIError::Parse(_)));
    }

    #[tokio::test]
    async fn slow_backend_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate("{}", "STOP"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = GeminiConfig::new("k")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(200));
        let err = GeminiProvider::new(config)
            .unwrap()
            .generate_structured(request())
            .await
            .unwrap_err();
        assert!(matches!(err, AIError::Timeout { .. }));
    }
}
