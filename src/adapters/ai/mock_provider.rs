//! Mock AI Provider for development and testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing the service and its tests to run without calling real model APIs.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for timeout testing
//! - Error and panic injection for resilience testing
//! - Call tracking for verification
//! - A canned presentation when the queue is empty
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_json(json!({"message": "Done", "presentation": deck}))
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.generate_structured(request).await?;
//! ```

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, FinishReason, MessageRole, ProviderInfo, StructuredRequest,
    StructuredResponse, TokenUsage,
};

/// Mock AI provider.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<StructuredRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        usage: TokenUsage,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(MockError),
    /// Panic inside the provider call.
    Panic(String),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate context too long.
    ContextTooLong { tokens: u32, max: u32 },
    /// Simulate content filtering.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate an unreadable provider response.
    Parse { message: String },
    /// Simulate a rejected request.
    InvalidRequest { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContextTooLong { tokens, max } => AIError::context_too_long(tokens, max),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Parse { message } => AIError::parse(message),
            MockError::InvalidRequest { message } => AIError::invalid_request(message),
            MockError::Timeout { timeout_secs } => AIError::timeout(timeout_secs),
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 128000),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful raw-text response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_response_full(content, TokenUsage::new(10, 20), FinishReason::Stop)
    }

    /// Adds a successful response serialized from a JSON value.
    pub fn with_json(self, value: Value) -> Self {
        self.with_response(value.to_string())
    }

    /// Adds a successful response with full configuration.
    pub fn with_response_full(
        self,
        content: impl Into<String>,
        usage: TokenUsage,
        finish_reason: FinishReason,
    ) -> Self {
        lock(&self.responses).push_back(MockResponse::Success {
            content: content.into(),
            usage,
            finish_reason,
        });
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Queues a panic.
    pub fn with_panic(self, message: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Panic(message.into()));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the provider info.
    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<StructuredRequest> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Gets the next response, or a canned deck built from the last user turn.
    fn next_response(&self, request: &StructuredRequest) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: Self::canned_envelope(request).to_string(),
                usage: TokenUsage::new(5, 10),
                finish_reason: FinishReason::Stop,
            })
    }

    fn canned_envelope(request: &StructuredRequest) -> Value {
        let topic = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled".to_string());

        json!({
            "message": "Here is a draft presentation.",
            "presentation": {
                "title": topic,
                "slides": [
                    {"title": "Introduction", "content": ["Overview", "Goals"]},
                    {"title": "Details", "content": ["Key point one", "Key point two"]},
                    {"title": "Summary", "content": ["Takeaways"], "notes": "Thank the audience"}
                ]
            }
        })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> Result<StructuredResponse, AIError> {
        let response = self.next_response(&request);
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match response {
            MockResponse::Success {
                content,
                usage,
                finish_reason,
            } => Ok(StructuredResponse {
                content,
                usage,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
            MockResponse::Panic(message) => panic!("{}", message),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> StructuredRequest {
        StructuredRequest::new(json!({"type": "object"}), "trace-123")
            .with_message(MessageRole::User, "Ocean currents")
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.generate_structured(test_request()).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, "mock-model-1");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_json(json!({"n": 2}));

        let r1 = provider.generate_structured(test_request()).await.unwrap();
        let r2 = provider.generate_structured(test_request()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "{\"n\":2}");
    }

    #[tokio::test]
    async fn mock_provider_falls_back_to_canned_deck() {
        let provider = MockAIProvider::new();

        let response = provider.generate_structured(test_request()).await.unwrap();
        let value: Value = serde_json::from_str(&response.content).unwrap();

        assert_eq!(value["presentation"]["title"], "Ocean currents");
        assert_eq!(value["presentation"]["slides"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider =
            MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = provider.generate_structured(test_request()).await.unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new().with_response("1").with_response("2");

        assert_eq!(provider.call_count(), 0);
        provider.generate_structured(test_request()).await.unwrap();
        provider.generate_structured(test_request()).await.unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[0].messages[0].content, "Ocean currents");

        provider.clear_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn mock_provider_respects_delay() {
        let provider = MockAIProvider::new()
            .with_response("Delayed response")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.generate_structured(test_request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    #[should_panic(expected = "boom")]
    async fn mock_provider_can_panic() {
        let provider = MockAIProvider::new().with_panic("boom");
        let _ = provider.generate_structured(test_request()).await;
    }

    #[test]
    fn mock_provider_returns_info() {
        let info = ProviderInfo::new("custom", "custom-model", 32000).with_structured_output(false);
        let provider = MockAIProvider::new().with_provider_info(info);

        let info = provider.provider_info();
        assert_eq!(info.name, "custom");
        assert_eq!(info.max_context_tokens, 32000);
        assert!(!info.supports_structured_output);
    }

    #[test]
    fn mock_error_converts_to_ai_error() {
        let err: AIError = MockError::ContextTooLong { tokens: 100, max: 50 }.into();
        assert!(matches!(err, AIError::ContextTooLong { tokens: 100, max: 50 }));

        let err: AIError = MockError::AuthenticationFailed.into();
        assert!(matches!(err, AIError::AuthenticationFailed));

        let err: AIError = MockError::Parse { message: "x".into() }.into();
        assert!(matches!(err, AIError::Parse(_)));

        let err: AIError = MockError::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 30 }));
    }
}
