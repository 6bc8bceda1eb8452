//! Session turn status.

use serde::Serialize;

use crate::domain::foundation::StateMachine;

/// Turn-taking status of a chat session.
///
/// `Idle -> Awaiting` on submit, `Awaiting -> Idle` when the turn resolves.
/// `Abandoned` is terminal; late results are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Awaiting,
    Abandoned,
}

impl SessionStatus {
    /// Returns true if a new turn may be submitted.
    pub fn accepts_input(&self) -> bool {
        matches!(self, SessionStatus::Idle)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Idle, Awaiting) | (Awaiting, Idle) | (Idle, Abandoned) | (Awaiting, Abandoned)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Idle => vec![Awaiting, Abandoned],
            Awaiting => vec![Idle, Abandoned],
            Abandoned => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_can_start_a_turn() {
        assert_eq!(
            SessionStatus::Idle.transition_to(SessionStatus::Awaiting),
            Ok(SessionStatus::Awaiting)
        );
    }

    #[test]
    fn awaiting_cannot_start_another_turn() {
        assert!(SessionStatus::Awaiting
            .transition_to(SessionStatus::Awaiting)
            .is_err());
    }

    #[test]
    fn abandoned_is_terminal() {
        assert!(SessionStatus::Abandoned.is_terminal());
        assert!(!SessionStatus::Abandoned.accepts_input());
    }

    #[test]
    fn only_idle_accepts_input() {
        assert!(SessionStatus::Idle.accepts_input());
        assert!(!SessionStatus::Awaiting.accepts_input());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for status in [
            SessionStatus::Idle,
            SessionStatus::Awaiting,
            SessionStatus::Abandoned,
        ] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }
}
