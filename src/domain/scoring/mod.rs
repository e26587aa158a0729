//! Scoring Module - Pure domain services for scoring answer sets.
//!
//! # Components
//!
//! - `ItemScorer` - reverse-coding and raw sums (total and per dimension)
//! - `Normalizer` - raw score to one-decimal percentage
//! - `Classifier` - percentage to level band or quadrant
//! - `ScoreEvaluator` - all three in one pass, producing a `ScoreResult`
//!
//! All functions are pure and stateless. Invalid input is rejected before
//! any arithmetic, so no partial result is ever produced.

mod answers;
mod errors;
mod evaluator;
mod item_scorer;
mod normalizer;
mod result;

#[cfg(test)]
pub(crate) mod fixtures;

pub use answers::AnswerSet;
pub use errors::InvalidInputError;
pub use evaluator::ScoreEvaluator;
pub use item_scorer::{ItemScorer, RawScores};
pub use normalizer::{Classifier, Normalizer};
pub use result::{Classification, DimensionScore, ScoreResult};
