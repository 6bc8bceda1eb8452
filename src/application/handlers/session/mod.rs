//! Session handlers.

mod run_turn;

pub use run_turn::{RunTurnCommand, RunTurnHandler};
