//! Draft lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of one draft per (user context, instrument).
///
/// `NoDraft -> InProgress -> { Submitted | Discarded }`. Answers recorded
/// while `InProgress` loop back to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    NoDraft,
    InProgress,
    Submitted,
    Discarded,
}

impl StateMachine for DraftStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DraftStatus::*;
        matches!(
            (self, target),
            (NoDraft, InProgress)
                | (InProgress, InProgress)
                | (InProgress, Submitted)
                | (InProgress, Discarded)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DraftStatus::*;
        match self {
            NoDraft => vec![InProgress],
            InProgress => vec![InProgress, Submitted, Discarded],
            Submitted | Discarded => vec![],
        }
    }
}
