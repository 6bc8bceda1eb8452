//! Route definitions for synthesis endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat, get_schema, SynthesisAppState};

/// Create synthesis router with all endpoints
///
/// # Endpoints
///
/// - `POST /api/chat` - Synthesize or edit a presentation
/// - `GET /api/schema` - Output JSON Schema
pub fn routes() -> Router<SynthesisAppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/schema", get(get_schema))
}
