//! Session-specific error types.

use thiserror::Error;

/// Errors returned when a turn cannot be submitted.
///
/// A rejected submit leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A synthesis call is already in flight.
    #[error("a turn is already in flight")]
    TurnInFlight,

    /// The session was abandoned.
    #[error("session has been abandoned")]
    Abandoned,

    /// The submitted text was blank.
    #[error("message cannot be empty")]
    EmptyMessage,
}
