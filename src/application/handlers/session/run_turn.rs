//! RunTurnHandler - Drive one chat turn of a session through a synthesis gateway.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::session::{DeckSession, SessionError, TurnResolution};
use crate::domain::synthesis::SynthesisResult;
use crate::ports::SynthesisGateway;

/// Command to run one turn.
#[derive(Debug, Clone)]
pub struct RunTurnCommand {
    pub content: String,
}

/// Handler for session turns.
///
/// The session lock is held only to submit and to resolve, never across the
/// gateway call, so other callers observe `Awaiting` and are turned away.
pub struct RunTurnHandler<G: ?Sized + SynthesisGateway> {
    gateway: Arc<G>,
}

impl<G: ?Sized + SynthesisGateway> RunTurnHandler<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Submits the user turn, awaits synthesis, and applies the result.
    ///
    /// # Errors
    ///
    /// Returns the `SessionError` from `submit`; the session is unchanged.
    pub async fn handle(
        &self,
        session: &Mutex<DeckSession>,
        cmd: RunTurnCommand,
    ) -> Result<TurnResolution, SessionError> {
        let ticket = session.lock().await.submit(cmd.content)?;
        let turn_id = ticket.turn_id;

        let result = match self.gateway.synthesize(ticket.request).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(turn_id = %turn_id, error = %err, "Synthesis gateway failed");
                SynthesisResult::degraded(err)
            }
        };

        let resolution = session.lock().await.resolve(turn_id, result);
        if resolution == TurnResolution::Discarded {
            tracing::debug!(turn_id = %turn_id, "Discarded stale turn result");
        }
        Ok(resolution)
    }
}
