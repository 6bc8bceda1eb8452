//! HTTP DTOs for the synthesis endpoints
//!
//! The response body is the `SynthesisResult` envelope itself; only the
//! request needs a wire type.

use serde::Deserialize;
use serde_json::Value;

/// Request body of `POST /api/chat`.
///
/// Entries of `messages` stay untyped here; the sanitizer decides which ones
/// are usable. `currentPresentation` is validated before use.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub messages: Vec<Value>,
    #[serde(default)]
    pub current_presentation: Option<Value>,
}
