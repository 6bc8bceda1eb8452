//! In-process gateway - runs synthesis in the same process as the session.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::handlers::synthesis::{SynthesizeCommand, SynthesizeHandler};
use crate::domain::session::TurnRequest;
use crate::domain::synthesis::SynthesisResult;
use crate::ports::{AIProvider, GatewayError, SynthesisGateway};

/// Gateway backed by a local `SynthesizeHandler`. Never fails.
pub struct InProcessGateway<P: ?Sized + AIProvider> {
    handler: Arc<SynthesizeHandler<P>>,
}

impl<P: ?Sized + AIProvider> InProcessGateway<P> {
    pub fn new(handler: Arc<SynthesizeHandler<P>>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<P: ?Sized + AIProvider + 'static> SynthesisGateway for InProcessGateway<P> {
    async fn synthesize(&self, request: TurnRequest) -> Result<SynthesisResult, GatewayError> {
        let cmd = SynthesizeCommand {
            messages: request.messages.iter().map(|m| m.to_json()).collect(),
            current_presentation: request.current_presentation,
        };
        Ok(self.handler.synthesize(cmd).await)
    }
}
