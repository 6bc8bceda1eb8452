//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the synthesis routes with the tower-http layers
//! shared by every endpoint.

pub mod synthesis;

use std::time::Duration;

use http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use synthesis::{synthesis_router, SynthesisAppState};

/// Builds the application router with tracing, CORS and request timeout layers.
pub fn app_router(state: SynthesisAppState, server: &ServerConfig) -> Router {
    synthesis_router()
        .with_state(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
