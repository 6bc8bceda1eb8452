//! Synthesis error taxonomy.

use std::time::Duration;

use thiserror::Error;

use crate::ports::{AIError, SchemaViolation};

/// Every way a synthesis call can fail.
///
/// `Display` renders the error descriptor carried in degraded envelopes:
/// `[CODE] detail`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The request had no usable user turn or a malformed field.
    #[error("[INVALID_REQUEST] {0}")]
    InvalidRequest(String),

    /// Backend could not be reached, is overloaded, or rate limited us.
    #[error("[BACKEND_UNAVAILABLE] {0}")]
    BackendUnavailable(String),

    /// Backend refused the request (auth, content filter, context length).
    #[error("[BACKEND_REJECTED] {0}")]
    BackendRejected(String),

    /// Backend did not answer within the configured limit.
    #[error("[BACKEND_TIMEOUT] backend did not respond within {timeout_secs}s")]
    BackendTimeout { timeout_secs: u64 },

    /// Backend answered with something that is not a JSON document.
    #[error("[MALFORMED_OUTPUT] {0}")]
    MalformedOutput(String),

    /// Backend output parsed but does not satisfy the presentation schema.
    #[error("[SCHEMA_VIOLATION] {0}")]
    SchemaViolation(#[from] SchemaViolation),

    /// A bug: panic or broken invariant while generating.
    #[error("[INTERNAL_FAULT] {0}")]
    InternalFault(String),
}

impl SynthesisError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Timeout expressed in whole seconds, rounded up so sub-second limits
    /// never render as `0s`.
    pub fn backend_timeout(limit: Duration) -> Self {
        let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
        Self::BackendTimeout {
            timeout_secs: millis.saturating_add(999) / 1000,
        }
    }

    pub fn malformed_output(message: impl Into<String>) -> Self {
        Self::MalformedOutput(message.into())
    }

    pub fn internal_fault(message: impl Into<String>) -> Self {
        Self::InternalFault(message.into())
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SynthesisError::InvalidRequest(_) => "INVALID_REQUEST",
            SynthesisError::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            SynthesisError::BackendRejected(_) => "BACKEND_REJECTED",
            SynthesisError::BackendTimeout { .. } => "BACKEND_TIMEOUT",
            SynthesisError::MalformedOutput(_) => "MALFORMED_OUTPUT",
            SynthesisError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            SynthesisError::InternalFault(_) => "INTERNAL_FAULT",
        }
    }

    /// Returns true for faults that are bugs rather than classified failures.
    pub fn is_internal(&self) -> bool {
        matches!(self, SynthesisError::InternalFault(_))
    }
}

impl From<AIError> for SynthesisError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::RateLimited { .. } | AIError::Unavailable { .. } | AIError::Network(_) => {
                SynthesisError::BackendUnavailable(err.to_string())
            }
            AIError::AuthenticationFailed
            | AIError::InvalidRequest(_)
            | AIError::ContentFiltered { .. }
            | AIError::ContextTooLong { .. } => SynthesisError::BackendRejected(err.to_string()),
            AIError::Timeout { timeout_secs } => SynthesisError::BackendTimeout {
                timeout_secs: u64::from(timeout_secs),
            },
            AIError::Parse(message) => SynthesisError::MalformedOutput(message),
        }
    }
}
