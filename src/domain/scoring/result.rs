//! ScoreResult - the immutable outcome of scoring one answer set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ScorePercentage;
use crate::domain::instrument::{LevelBand, Quadrant};

/// Classification attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    Level { tag: String, label: String },
    Quadrant { quadrant: Quadrant, label: String },
}

impl Classification {
    pub fn from_band(band: &LevelBand) -> Self {
        Classification::Level {
            tag: band.tag.clone(),
            label: band.label.clone(),
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &str {
        match self {
            Classification::Level { label, .. } | Classification::Quadrant { label, .. } => label,
        }
    }

    /// Level tag, if this is a level classification.
    pub fn level_tag(&self) -> Option<&str> {
        match self {
            Classification::Level { tag, .. } => Some(tag),
            Classification::Quadrant { .. } => None,
        }
    }

    /// Quadrant, if this is a quadrant classification.
    pub fn quadrant(&self) -> Option<Quadrant> {
        match self {
            Classification::Quadrant { quadrant, .. } => Some(*quadrant),
            Classification::Level { .. } => None,
        }
    }
}

/// Sub-score of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub raw_score: i32,
    pub percentage: ScorePercentage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Classification>,
}

/// Result of scoring a complete answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    raw_score: i32,
    percentage: ScorePercentage,
    level: Classification,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    per_dimension: BTreeMap<String, DimensionScore>,
}

impl ScoreResult {
    pub fn new(
        raw_score: i32,
        percentage: ScorePercentage,
        level: Classification,
        per_dimension: BTreeMap<String, DimensionScore>,
    ) -> Self {
        Self {
            raw_score,
            percentage,
            level,
            per_dimension,
        }
    }

    pub fn raw_score(&self) -> i32 {
        self.raw_score
    }

    pub fn percentage(&self) -> ScorePercentage {
        self.percentage
    }

    pub fn level(&self) -> &Classification {
        &self.level
    }

    pub fn per_dimension(&self) -> &BTreeMap<String, DimensionScore> {
        &self.per_dimension
    }

    pub fn dimension(&self, key: &str) -> Option<&DimensionScore> {
        self.per_dimension.get(key)
    }
}
