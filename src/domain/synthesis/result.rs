//! Synthesis result envelope.

use std::fmt;

use serde::Serialize;

use crate::domain::presentation::Presentation;

/// Assistant text shown for every handled failure.
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Summary used when the model returns a blank explanation.
pub const DEFAULT_SUMMARY: &str = "Here is your updated presentation.";

/// Response of one synthesis call.
///
/// Exactly one shape: `presentation` is present on success and `null` on
/// failure, in which case `error` describes the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisResult {
    pub message: String,
    pub presentation: Option<Presentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SynthesisResult {
    /// Successful synthesis with the model's explanation.
    pub fn success(message: impl Into<String>, presentation: Presentation) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            DEFAULT_SUMMARY.to_string()
        } else {
            message
        };
        Self {
            message,
            presentation: Some(presentation),
            error: None,
        }
    }

    /// Degraded response carrying an error descriptor.
    pub fn degraded(error: impl fmt::Display) -> Self {
        Self {
            message: APOLOGY_MESSAGE.to_string(),
            presentation: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.presentation.is_some()
    }
}
