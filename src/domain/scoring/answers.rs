//! AnswerSet - responses to an instrument, in item order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::InvalidInputError;
use crate::domain::instrument::InstrumentDefinition;

/// Positional responses; `values[i]` answers the instrument's i-th item.
///
/// Length and range are checked by the scorer, not on construction, so a
/// set can be assembled incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<i32>);

impl AnswerSet {
    pub fn new(values: Vec<i32>) -> Self {
        Self(values)
    }

    /// Builds a positional set from answers keyed by item id.
    ///
    /// # Errors
    ///
    /// - `UnknownItem` if a key is not an item of the instrument
    /// - `MissingItem` if an item has no answer
    pub fn from_keyed(
        instrument: &InstrumentDefinition,
        answers: &HashMap<String, i32>,
    ) -> Result<Self, InvalidInputError> {
        if let Some(unknown) = answers
            .keys()
            .find(|key| instrument.position_of(key).is_none())
        {
            return Err(InvalidInputError::UnknownItem {
                item: unknown.clone(),
            });
        }

        instrument
            .items()
            .iter()
            .map(|item| {
                answers
                    .get(&item.id)
                    .copied()
                    .ok_or_else(|| InvalidInputError::MissingItem {
                        item: item.id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl From<Vec<i32>> for AnswerSet {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}
