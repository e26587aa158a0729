//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the state machine trait
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod percentage;
mod score_percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{TestType, MAX_TEST_TYPE_LENGTH};
pub use percentage::Percentage;
pub use score_percentage::ScorePercentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
