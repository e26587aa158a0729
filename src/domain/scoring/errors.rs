//! Invalid answer input.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Malformed or out-of-range answers.
///
/// Always surfaced to the caller; answers are never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("Expected {expected} answers, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Answer {value} for item '{item}' (position {position}) is outside {min}..={max}")]
    OutOfRange {
        item: String,
        position: usize,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Unknown item '{item}'")]
    UnknownItem { item: String },

    #[error("Missing answer for item '{item}'")]
    MissingItem { item: String },

    #[error("Position {position} skips ahead of the {recorded} answers recorded so far")]
    PositionSkipped { position: usize, recorded: usize },

    #[error("Position {position} is beyond the instrument's {total} items")]
    PositionBeyondEnd { position: usize, total: usize },
}

impl From<InvalidInputError> for DomainError {
    fn from(err: InvalidInputError) -> Self {
        let base = DomainError::new(ErrorCode::InvalidInput, err.to_string());
        match &err {
            InvalidInputError::OutOfRange { item, value, .. } => base
                .with_detail("item", item.as_str())
                .with_detail("value", value.to_string()),
            InvalidInputError::UnknownItem { item } | InvalidInputError::MissingItem { item } => {
                base.with_detail("item", item.as_str())
            }
            _ => base,
        }
    }
}
