//! Synthesis Gateway Adapters.
//!
//! - `InProcessGateway` - Calls `SynthesizeHandler` directly
//! - `HttpSynthesisGateway` - POSTs to a remote `/api/chat`

mod http_client;
mod in_process;

pub use http_client::HttpSynthesisGateway;
pub use in_process::InProcessGateway;

use serde_json::{json, Value};

use crate::domain::session::TurnRequest;

/// Renders a turn request as the `/api/chat` request body.
pub fn chat_request_body(request: &TurnRequest) -> Value {
    json!({
        "messages": request.messages.iter().map(|m| m.to_json()).collect::<Vec<_>>(),
        "currentPresentation": request.current_presentation,
    })
}
