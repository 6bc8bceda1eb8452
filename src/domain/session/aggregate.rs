//! Deck session aggregate - the client-side session state holder.
//!
//! Owns the running conversation and the current presentation. Turn taking
//! is gated by `SessionStatus`: a session accepts one submit, then ignores
//! further submits until that turn resolves. Every turn gets a `TurnId`
//! fencing token, so a result for a stale or abandoned turn is dropped
//! instead of overwriting newer state.

use crate::domain::conversation::Message;
use crate::domain::foundation::{SessionId, StateMachine, TurnId};
use crate::domain::presentation::Presentation;
use crate::domain::synthesis::{SynthesisResult, APOLOGY_MESSAGE, DEFAULT_SUMMARY};

use super::{SessionError, SessionStatus};

/// Snapshot sent to the synthesis service for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRequest {
    pub messages: Vec<Message>,
    pub current_presentation: Option<Presentation>,
}

/// Issued by `submit`; the result must present the same `turn_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTicket {
    pub turn_id: TurnId,
    pub request: TurnRequest,
}

/// What happened when a result was offered to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResolution {
    /// The result was applied and the session is idle again.
    Applied { presentation_replaced: bool },
    /// The result did not belong to the pending turn and was ignored.
    Discarded,
}

/// Single-owner chat session.
#[derive(Debug, Clone)]
pub struct DeckSession {
    id: SessionId,
    messages: Vec<Message>,
    presentation: Option<Presentation>,
    status: SessionStatus,
    pending_turn: Option<TurnId>,
}

impl Default for DeckSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckSession {
    /// Creates an empty idle session.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            messages: Vec::new(),
            presentation: None,
            status: SessionStatus::Idle,
            pending_turn: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn pending_turn(&self) -> Option<TurnId> {
        self.pending_turn
    }

    /// Submits a user turn.
    ///
    /// The user message is appended immediately and the session moves to
    /// `Awaiting`. The returned ticket carries the full history and current
    /// presentation for the synthesis call.
    ///
    /// # Errors
    ///
    /// - `TurnInFlight` while a previous turn is unresolved
    /// - `Abandoned` after `abandon`
    /// - `EmptyMessage` for blank input
    pub fn submit(&mut self, content: impl Into<String>) -> Result<TurnTicket, SessionError> {
        if !self.status.accepts_input() {
            return Err(match self.status {
                SessionStatus::Abandoned => SessionError::Abandoned,
                _ => SessionError::TurnInFlight,
            });
        }

        let message = Message::user(content).map_err(|_| SessionError::EmptyMessage)?;
        self.status = self
            .status
            .transition_to(SessionStatus::Awaiting)
            .map_err(|_| SessionError::TurnInFlight)?;
        self.messages.push(message);

        let turn_id = TurnId::new();
        self.pending_turn = Some(turn_id);

        Ok(TurnTicket {
            turn_id,
            request: TurnRequest {
                messages: self.messages.clone(),
                current_presentation: self.presentation.clone(),
            },
        })
    }

    /// Applies the result of the pending turn.
    ///
    /// An assistant message is always appended; the presentation is replaced
    /// only when the result carries one. Results for any other turn, or
    /// arriving after the session was abandoned, are discarded.
    pub fn resolve(&mut self, turn_id: TurnId, result: SynthesisResult) -> TurnResolution {
        if self.status != SessionStatus::Awaiting || self.pending_turn != Some(turn_id) {
            return TurnResolution::Discarded;
        }

        let SynthesisResult {
            message,
            presentation,
            ..
        } = result;
        let fallback = if presentation.is_some() {
            DEFAULT_SUMMARY
        } else {
            APOLOGY_MESSAGE
        };
        let reply = Message::assistant(message)
            .or_else(|_| Message::assistant(fallback))
            .ok();
        if let Some(reply) = reply {
            self.messages.push(reply);
        }

        let presentation_replaced = presentation.is_some();
        if let Some(presentation) = presentation {
            self.presentation = Some(presentation);
        }

        self.pending_turn = None;
        self.status = SessionStatus::Idle;

        TurnResolution::Applied {
            presentation_replaced,
        }
    }

    /// Tears the session down; any in-flight result will be discarded.
    pub fn abandon(&mut self) {
        self.status = SessionStatus::Abandoned;
        self.pending_turn = None;
    }
}
