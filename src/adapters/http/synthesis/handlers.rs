//! HTTP handlers for synthesis endpoints
//!
//! These handlers connect Axum routes to the synthesis command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::application::handlers::synthesis::{
    GenerationSettings, SynthesisError, SynthesizeCommand, SynthesizeHandler,
};
use crate::domain::synthesis::SynthesisResult;
use crate::ports::{AIProvider, PresentationSchemaValidator};

use super::dto::SynthesisRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct SynthesisAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub validator: Arc<dyn PresentationSchemaValidator>,
    pub settings: GenerationSettings,
}

impl SynthesisAppState {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        validator: Arc<dyn PresentationSchemaValidator>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            ai_provider,
            validator,
            settings,
        }
    }

    pub fn synthesize_handler(&self) -> SynthesizeHandler<dyn AIProvider> {
        SynthesizeHandler::new(
            self.ai_provider.clone(),
            self.validator.clone(),
            self.settings,
        )
    }
}

type EnvelopeResponse = (StatusCode, Json<SynthesisResult>);

fn invalid_request(detail: impl Into<String>) -> EnvelopeResponse {
    let err = SynthesisError::invalid_request(detail);
    tracing::warn!(code = err.code(), error = %err, "Rejected malformed chat request");
    (StatusCode::BAD_REQUEST, Json(SynthesisResult::degraded(err)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Synthesize or edit a presentation from the conversation
///
/// POST /api/chat
///
/// Classified failures answer 200 with a degraded envelope, internal faults
/// answer 500, malformed bodies answer 400; the body shape is the same.
pub async fn chat(
    State(app_state): State<SynthesisAppState>,
    payload: Result<Json<SynthesisRequest>, JsonRejection>,
) -> EnvelopeResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_request(rejection.body_text()),
    };

    let current_presentation = match req.current_presentation {
        None => None,
        Some(raw) => match app_state.validator.validate_presentation(&raw) {
            Ok(presentation) => Some(presentation),
            Err(violation) => return invalid_request(format!("currentPresentation: {}", violation)),
        },
    };

    let cmd = SynthesizeCommand {
        messages: req.messages,
        current_presentation,
    };

    match app_state.synthesize_handler().handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result)),
        Err(err) if err.is_internal() => {
            tracing::error!(code = err.code(), error = %err, "Internal fault during synthesis");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SynthesisResult::degraded(err)),
            )
        }
        Err(err) => (StatusCode::OK, Json(SynthesisResult::degraded(err))),
    }
}

/// Get the JSON Schema of the generated envelope
///
/// GET /api/schema
pub async fn get_schema(State(app_state): State<SynthesisAppState>) -> Json<Value> {
    Json(app_state.validator.output_schema().clone())
}
