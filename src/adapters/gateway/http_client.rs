//! HTTP gateway - talks to a remote synthesis service over `/api/chat`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::session::TurnRequest;
use crate::domain::synthesis::SynthesisResult;
use crate::ports::{GatewayError, PresentationSchemaValidator, SynthesisGateway};

use super::chat_request_body;

/// Gateway that POSTs turn requests to a synthesis service.
///
/// Returned presentations are validated again before they reach the session.
pub struct HttpSynthesisGateway {
    client: Client,
    base_url: String,
    validator: Arc<dyn PresentationSchemaValidator>,
}

impl HttpSynthesisGateway {
    /// Creates a gateway for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// - `Transport` if the HTTP client cannot be built
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        validator: Arc<dyn PresentationSchemaValidator>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            validator,
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }

    fn parse_envelope(&self, body: &Value) -> Result<SynthesisResult, GatewayError> {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| GatewayError::invalid_response("envelope has no message"))?;

        match body.get("presentation") {
            None | Some(Value::Null) => Ok(SynthesisResult {
                message: message.to_string(),
                presentation: None,
                error: body.get("error").and_then(Value::as_str).map(str::to_string),
            }),
            Some(raw) => {
                let presentation = self
                    .validator
                    .validate_presentation(raw)
                    .map_err(|e| GatewayError::invalid_response(e.to_string()))?;
                Ok(SynthesisResult::success(message, presentation))
            }
        }
    }
}

#[async_trait]
impl SynthesisGateway for HttpSynthesisGateway {
    async fn synthesize(&self, request: TurnRequest) -> Result<SynthesisResult, GatewayError> {
        let response = self
            .client
            .post(self.chat_url())
            .json(&chat_request_body(&request))
            .send()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // 400 and 500 answers still carry a degraded envelope; keep its descriptor.
            let degraded = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| self.parse_envelope(&body).ok())
                .filter(|result| !result.is_success() && result.error.is_some());

            return match degraded {
                Some(result) => {
                    tracing::debug!(status = status.as_u16(), "Synthesis service answered with a degraded envelope");
                    Ok(result)
                }
                None => Err(GatewayError::Status {
                    status: status.as_u16(),
                }),
            };
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;

        self.parse_envelope(&body)
    }
}
