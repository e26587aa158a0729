//! Classification strategies attached to instrument definitions.
//!
//! An instrument is classified either by an ordered level scheme over its
//! total percentage, or by a two-axis quadrant model over two dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ConfigurationError;
use crate::domain::foundation::ScorePercentage;

/// One ordinal bucket of a level scheme.
///
/// A band covers percentages from the previous band's `upper_bound`
/// (inclusive) up to its own `upper_bound` (exclusive). The last band also
/// includes 100.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBand {
    pub upper_bound: ScorePercentage,
    pub tag: String,
    pub label: String,
}

impl LevelBand {
    pub fn new(upper_bound: ScorePercentage, tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            upper_bound,
            tag: tag.into(),
            label: label.into(),
        }
    }
}

/// Ordered, contiguous and exhaustive partition of `[0, 100]`.
///
/// # Invariants
///
/// - at least one band
/// - upper bounds strictly increase and are all above 0.0
/// - the last upper bound is exactly 100.0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelBand>", into = "Vec<LevelBand>")]
pub struct LevelScheme {
    bands: Vec<LevelBand>,
}

impl LevelScheme {
    /// Validates and builds a level scheme.
    ///
    /// # Errors
    ///
    /// - `NoLevelBands` if `bands` is empty
    /// - `EmptyBand` if the first upper bound is 0.0
    /// - `NonIncreasingBands` if bounds are not strictly increasing
    /// - `NotExhaustive` if the last bound is not 100.0
    pub fn new(bands: Vec<LevelBand>) -> Result<Self, ConfigurationError> {
        let first = bands.first().ok_or(ConfigurationError::NoLevelBands)?;
        if first.upper_bound == ScorePercentage::ZERO {
            return Err(ConfigurationError::EmptyBand {
                tag: first.tag.clone(),
            });
        }

        for pair in bands.windows(2) {
            if pair[1].upper_bound <= pair[0].upper_bound {
                return Err(ConfigurationError::NonIncreasingBands {
                    tag: pair[1].tag.clone(),
                    previous: pair[0].upper_bound.to_string(),
                    upper: pair[1].upper_bound.to_string(),
                });
            }
        }

        // Non-empty was checked above.
        let last = &bands[bands.len() - 1];
        if last.upper_bound != ScorePercentage::HUNDRED {
            return Err(ConfigurationError::NotExhaustive {
                last: last.upper_bound.to_string(),
            });
        }

        Ok(Self { bands })
    }

    /// Builds a scheme of `labels.len()` equal-width bands.
    ///
    /// `evenly(&[("low", "Low"), ("high", "High")])` splits at 50.0.
    pub fn evenly(labels: &[(&str, &str)]) -> Result<Self, ConfigurationError> {
        let count = labels.len() as u64;
        let bands = labels
            .iter()
            .enumerate()
            .map(|(i, (tag, label))| {
                LevelBand::new(ScorePercentage::from_fraction(i as u64 + 1, count), *tag, *label)
            })
            .collect();
        Self::new(bands)
    }

    /// Returns the bands in ascending order.
    pub fn bands(&self) -> &[LevelBand] {
        &self.bands
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Always false for a validated scheme.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl TryFrom<Vec<LevelBand>> for LevelScheme {
    type Error = ConfigurationError;

    fn try_from(bands: Vec<LevelBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<LevelScheme> for Vec<LevelBand> {
    fn from(scheme: LevelScheme) -> Self {
        scheme.bands
    }
}

/// One of the four regions of a two-axis percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// High X, high Y.
    Q1,
    /// High X, low Y.
    Q2,
    /// Low X, high Y.
    Q3,
    /// Low X, low Y.
    Q4,
}

impl Quadrant {
    /// All quadrants in label order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Quadrant::Q1 => "Q1",
            Quadrant::Q2 => "Q2",
            Quadrant::Q3 => "Q3",
            Quadrant::Q4 => "Q4",
        };
        write!(f, "{}", s)
    }
}

/// Display labels for each quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantLabels {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
}

impl QuadrantLabels {
    /// Returns the label for a quadrant.
    pub fn label(&self, quadrant: Quadrant) -> &str {
        match quadrant {
            Quadrant::Q1 => &self.q1,
            Quadrant::Q2 => &self.q2,
            Quadrant::Q3 => &self.q3,
            Quadrant::Q4 => &self.q4,
        }
    }
}

/// Two-axis model: each axis is the percentage of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantModel {
    pub x_dimension: String,
    pub y_dimension: String,
    pub labels: QuadrantLabels,
}

/// How an instrument's result is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ClassificationStrategy {
    /// Ordinal level over the total percentage.
    Levels { bands: LevelScheme },
    /// Quadrant over two dimension percentages.
    Quadrant(QuadrantModel),
}

impl ClassificationStrategy {
    /// Returns the level scheme, if this is a linear-level strategy.
    pub fn level_scheme(&self) -> Option<&LevelScheme> {
        match self {
            ClassificationStrategy::Levels { bands } => Some(bands),
            ClassificationStrategy::Quadrant(_) => None,
        }
    }
}
