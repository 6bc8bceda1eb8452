//! Synthesis Gateway Port - How a session reaches the synthesis service.
//!
//! The session state holder only knows this trait. Adapters either call the
//! handler in-process or POST to a remote `/api/chat` endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::session::TurnRequest;
use crate::domain::synthesis::SynthesisResult;

/// Port for running one synthesis turn.
///
/// A returned `SynthesisResult` may itself be degraded; `Err` is reserved for
/// failures to obtain any envelope at all.
#[async_trait]
pub trait SynthesisGateway: Send + Sync {
    async fn synthesize(&self, request: TurnRequest) -> Result<SynthesisResult, GatewayError>;
}

/// Failures reaching the synthesis service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Connection failed or the request timed out.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("synthesis service returned status {status}")]
    Status { status: u16 },

    /// The response body was not a usable envelope.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
