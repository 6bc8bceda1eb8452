//! Session module - client-side state holder for one chat session.

mod aggregate;
mod errors;
mod status;

pub use aggregate::{DeckSession, TurnRequest, TurnResolution, TurnTicket};
pub use errors::SessionError;
pub use status::SessionStatus;
