//! State machine trait for status enums.
//!
//! Lifecycle statuses (such as a draft's) implement this to get validated
//! transitions with a uniform error.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for DraftStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (NoDraft, InProgress) | (InProgress, Submitted))
///     }
///     // ...
/// }
///
/// let status = DraftStatus::InProgress.transition_to(DraftStatus::Submitted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Toggle {
        Open,
        Closed,
    }

    impl StateMachine for Toggle {
        fn can_transition_to(&self, target: &Self) -> bool {
            matches!((self, target), (Toggle::Open, Toggle::Closed))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Toggle::Open => vec![Toggle::Closed],
                Toggle::Closed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_reports_both_states_on_failure() {
        let err = Toggle::Closed.transition_to(Toggle::Open).unwrap_err();
        assert!(err.to_string().contains("Closed"));
        assert!(err.to_string().contains("Open"));
    }

    #[test]
    fn default_is_terminal_uses_valid_transitions() {
        assert!(!Toggle::Open.is_terminal());
        assert!(Toggle::Closed.is_terminal());
        assert_eq!(Toggle::Open.transition_to(Toggle::Closed), Ok(Toggle::Closed));
    }
}
