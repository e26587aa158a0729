//! Item Scorer - reverse-coding and raw-score aggregation.

use super::{AnswerSet, InvalidInputError};
use crate::domain::instrument::{InstrumentDefinition, Item, ScaleBounds};

/// Raw sums for an instrument and each of its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScores {
    pub total: i32,
    /// `(dimension key, raw sub-score)` in the instrument's dimension order.
    pub per_dimension: Vec<(String, i32)>,
}

/// Stateless scorer; every method is a pure function of its inputs.
pub struct ItemScorer;

impl ItemScorer {
    /// Checks length and range of every answer before any arithmetic.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the set does not answer every item exactly once
    /// - `OutOfRange` for the first value outside the instrument's scale
    pub fn validate(
        instrument: &InstrumentDefinition,
        answers: &AnswerSet,
    ) -> Result<(), InvalidInputError> {
        if answers.len() != instrument.item_count() {
            return Err(InvalidInputError::LengthMismatch {
                expected: instrument.item_count(),
                actual: answers.len(),
            });
        }
        for (position, (item, value)) in instrument
            .items()
            .iter()
            .zip(answers.values())
            .enumerate()
        {
            Self::check_value(item, position, instrument.scale(), *value)?;
        }
        Ok(())
    }

    /// Range-checks a single response.
    pub fn check_value(
        item: &Item,
        position: usize,
        scale: ScaleBounds,
        value: i32,
    ) -> Result<(), InvalidInputError> {
        if scale.contains(value) {
            Ok(())
        } else {
            Err(InvalidInputError::OutOfRange {
                item: item.id.clone(),
                position,
                value,
                min: scale.min,
                max: scale.max,
            })
        }
    }

    /// Applies reverse-coding to one in-range response.
    pub fn code_item(item: &Item, scale: ScaleBounds, value: i32) -> i32 {
        if item.reverse {
            scale.reflect(value)
        } else {
            value
        }
    }

    /// Validates, then returns every response after reverse-coding.
    pub fn coded_values(
        instrument: &InstrumentDefinition,
        answers: &AnswerSet,
    ) -> Result<Vec<i32>, InvalidInputError> {
        Self::validate(instrument, answers)?;
        let scale = instrument.scale();
        Ok(instrument
            .items()
            .iter()
            .zip(answers.values())
            .map(|(item, value)| Self::code_item(item, scale, *value))
            .collect())
    }

    /// Total raw score.
    pub fn score(
        instrument: &InstrumentDefinition,
        answers: &AnswerSet,
    ) -> Result<i32, InvalidInputError> {
        Ok(Self::coded_values(instrument, answers)?.iter().sum())
    }

    /// Total raw score plus one sub-score per dimension.
    pub fn score_with_dimensions(
        instrument: &InstrumentDefinition,
        answers: &AnswerSet,
    ) -> Result<RawScores, InvalidInputError> {
        let coded = Self::coded_values(instrument, answers)?;
        let per_dimension = instrument
            .dimensions()
            .iter()
            .map(|dimension| {
                let sum = dimension.positions().iter().map(|&p| coded[p]).sum();
                (dimension.key().to_string(), sum)
            })
            .collect();

        Ok(RawScores {
            total: coded.iter().sum(),
            per_dimension,
        })
    }
}
