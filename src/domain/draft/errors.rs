//! Draft-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TestType};
use crate::domain::scoring::InvalidInputError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A second draft was started before the first was resumed or discarded.
    #[error("A draft for '{0}' is already in progress; resume or discard it first")]
    Conflict(TestType),

    #[error("No draft in progress for '{0}'")]
    NotFound(TestType),

    #[error("Draft is for '{draft}', not '{instrument}'")]
    InstrumentMismatch { draft: TestType, instrument: TestType },

    #[error("Invalid draft state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl DraftError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DraftError::Conflict(_) => ErrorCode::DraftConflict,
            DraftError::NotFound(_) => ErrorCode::DraftNotFound,
            DraftError::InstrumentMismatch { .. } => ErrorCode::InvalidInput,
            DraftError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            DraftError::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }
}

impl From<DraftError> for DomainError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::InvalidInput(inner) => inner.into(),
            DraftError::Conflict(ref test_type) | DraftError::NotFound(ref test_type) => {
                DomainError::new(err.code(), err.to_string())
                    .with_detail("test_type", test_type.as_str())
            }
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
