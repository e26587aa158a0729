//! ScoreEvaluator - scorer, normalizer and classifier in one pass.

use std::collections::BTreeMap;

use super::{
    AnswerSet, Classification, Classifier, DimensionScore, InvalidInputError, ItemScorer,
    Normalizer, ScoreResult,
};
use crate::domain::foundation::ScorePercentage;
use crate::domain::instrument::{ClassificationStrategy, InstrumentDefinition};

/// Produces a full `ScoreResult` from an answer set.
pub struct ScoreEvaluator;

impl ScoreEvaluator {
    /// Validates, scores, normalizes and classifies.
    ///
    /// Nothing is computed unless the whole answer set is valid.
    pub fn evaluate(
        instrument: &InstrumentDefinition,
        answers: &AnswerSet,
    ) -> Result<ScoreResult, InvalidInputError> {
        let raw = ItemScorer::score_with_dimensions(instrument, answers)?;
        let percentage = Normalizer::normalize(raw.total, instrument.raw_score_bounds());
        let scheme = instrument.classification().level_scheme();

        let per_dimension: BTreeMap<String, DimensionScore> = instrument
            .dimensions()
            .iter()
            .zip(raw.per_dimension)
            .map(|(dimension, (key, raw_score))| {
                let percentage = Normalizer::normalize(raw_score, dimension.bounds());
                let level = scheme
                    .map(|s| Classification::from_band(Classifier::classify_level(percentage, s)));
                (
                    key,
                    DimensionScore {
                        raw_score,
                        percentage,
                        level,
                    },
                )
            })
            .collect();

        let level = match instrument.classification() {
            ClassificationStrategy::Levels { bands } => {
                Classification::from_band(Classifier::classify_level(percentage, bands))
            }
            ClassificationStrategy::Quadrant(model) => {
                // Axes are validated against the dimensions at registry load.
                let axis = |key: &str| {
                    per_dimension
                        .get(key)
                        .map(|d| d.percentage)
                        .unwrap_or(ScorePercentage::ZERO)
                };
                let quadrant =
                    Classifier::classify_quadrant(axis(&model.x_dimension), axis(&model.y_dimension));
                Classification::Quadrant {
                    quadrant,
                    label: model.labels.label(quadrant).to_string(),
                }
            }
        };

        Ok(ScoreResult::new(raw.total, percentage, level, per_dimension))
    }
}
