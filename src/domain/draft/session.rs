//! DraftSession aggregate - an in-progress answer set.
//!
//! A draft exists between the first recorded answer and either submission
//! or an explicit discard. There is at most one draft per instrument in a
//! user context; a new draft supersedes, never merges with, an old one.

use serde::{Deserialize, Serialize};

use super::{DraftError, DraftProgress, DraftStatus};
use crate::domain::foundation::{StateMachine, TestType, Timestamp};
use crate::domain::instrument::InstrumentDefinition;
use crate::domain::scoring::{AnswerSet, InvalidInputError, ItemScorer};

fn in_progress() -> DraftStatus {
    DraftStatus::InProgress
}

/// Responses recorded so far for one instrument.
///
/// # Invariants
///
/// - `answers.len() <= instrument.item_count()`
/// - every recorded answer is within the instrument's scale
/// - `saved_at` is refreshed on every recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSession {
    test_type: TestType,
    answers: Vec<i32>,
    saved_at: Timestamp,

    /// Only in-progress drafts are persisted.
    #[serde(skip, default = "in_progress")]
    status: DraftStatus,
}

impl DraftSession {
    /// Starts a draft with its first answer (`NoDraft -> InProgress`).
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `first_answer` is outside the scale
    pub fn start(instrument: &InstrumentDefinition, first_answer: i32) -> Result<Self, DraftError> {
        let status = DraftStatus::NoDraft
            .transition_to(DraftStatus::InProgress)
            .map_err(|e| DraftError::InvalidState(e.to_string()))?;

        let first_item = instrument.items().first().ok_or(InvalidInputError::PositionBeyondEnd {
            position: 0,
            total: 0,
        })?;
        ItemScorer::check_value(first_item, 0, instrument.scale(), first_answer)?;

        Ok(Self {
            test_type: instrument.id().clone(),
            answers: vec![first_answer],
            saved_at: Timestamp::now(),
            status,
        })
    }

    /// Reconstitute a draft from persistence (no validation).
    pub fn reconstitute(test_type: TestType, answers: Vec<i32>, saved_at: Timestamp) -> Self {
        Self {
            test_type,
            answers,
            saved_at,
            status: DraftStatus::InProgress,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn test_type(&self) -> &TestType {
        &self.test_type
    }

    pub fn answers(&self) -> &[i32] {
        &self.answers
    }

    pub fn saved_at(&self) -> &Timestamp {
        &self.saved_at
    }

    pub fn status(&self) -> DraftStatus {
        self.status
    }

    /// Returns the recorded answers as an answer set.
    pub fn answer_set(&self) -> AnswerSet {
        AnswerSet::new(self.answers.clone())
    }

    /// Progress against the instrument's item count.
    pub fn progress(&self, instrument: &InstrumentDefinition) -> DraftProgress {
        DraftProgress::new(self.answers.len(), instrument.item_count())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the answer at `position`, appending or overwriting.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless in progress
    /// - `InstrumentMismatch` if `instrument` is not this draft's instrument
    /// - `PositionBeyondEnd` if `position` is past the last item
    /// - `PositionSkipped` if `position` would leave a gap
    /// - `OutOfRange` if `value` is outside the scale
    pub fn record_answer(
        &mut self,
        instrument: &InstrumentDefinition,
        position: usize,
        value: i32,
    ) -> Result<DraftProgress, DraftError> {
        self.ensure_instrument(instrument)?;
        self.status = self
            .status
            .transition_to(DraftStatus::InProgress)
            .map_err(|e| DraftError::InvalidState(e.to_string()))?;

        let total = instrument.item_count();
        let item = instrument
            .items()
            .get(position)
            .ok_or(InvalidInputError::PositionBeyondEnd { position, total })?;
        if position > self.answers.len() {
            return Err(InvalidInputError::PositionSkipped {
                position,
                recorded: self.answers.len(),
            }
            .into());
        }
        ItemScorer::check_value(item, position, instrument.scale(), value)?;

        if position == self.answers.len() {
            self.answers.push(value);
        } else {
            self.answers[position] = value;
        }
        self.saved_at = Timestamp::now();
        Ok(self.progress(instrument))
    }

    /// Checks a persisted draft still fits its instrument.
    ///
    /// # Errors
    ///
    /// - `InstrumentMismatch`, `LengthMismatch` or `OutOfRange`
    pub fn validate_against(&self, instrument: &InstrumentDefinition) -> Result<(), DraftError> {
        self.ensure_instrument(instrument)?;
        if self.answers.len() > instrument.item_count() {
            return Err(InvalidInputError::LengthMismatch {
                expected: instrument.item_count(),
                actual: self.answers.len(),
            }
            .into());
        }
        for (position, (item, value)) in instrument.items().iter().zip(&self.answers).enumerate() {
            ItemScorer::check_value(item, position, instrument.scale(), *value)?;
        }
        Ok(())
    }

    /// `InProgress -> Submitted`.
    pub fn mark_submitted(&mut self) -> Result<(), DraftError> {
        self.status = self
            .status
            .transition_to(DraftStatus::Submitted)
            .map_err(|e| DraftError::InvalidState(e.to_string()))?;
        Ok(())
    }

    /// `InProgress -> Discarded`.
    pub fn discard(&mut self) -> Result<(), DraftError> {
        self.status = self
            .status
            .transition_to(DraftStatus::Discarded)
            .map_err(|e| DraftError::InvalidState(e.to_string()))?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_instrument(&self, instrument: &InstrumentDefinition) -> Result<(), DraftError> {
        if instrument.id() != &self.test_type {
            return Err(DraftError::InstrumentMismatch {
                draft: self.test_type.clone(),
                instrument: instrument.id().clone(),
            });
        }
        Ok(())
    }
}
