//! InstrumentDefinition - immutable description of one questionnaire.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::{ClassificationStrategy, ConfigurationError};
use crate::domain::foundation::TestType;

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,

    /// Reverse-coded items are reflected around the scale midpoint.
    #[serde(default)]
    pub reverse: bool,

    /// Optional content domain (e.g. a Big Five trait).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reverse: false,
            domain: None,
        }
    }

    pub fn reversed(id: impl Into<String>) -> Self {
        Self {
            reverse: true,
            ..Self::new(id)
        }
    }

    pub fn in_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Per-item response bounds, inclusive.
///
/// A validated definition guarantees `min + max` fits in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: i32,
    pub max: i32,
}

impl ScaleBounds {
    /// Returns true if `value` is a valid response.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Point reflection around the scale midpoint: `min + max - value`.
    pub fn reflect(&self, value: i32) -> i32 {
        self.min + self.max - value
    }
}

/// Inclusive range a raw score can take.
///
/// # Invariants
///
/// - `max > min`, so normalization never divides by zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScoreBounds {
    min: i32,
    max: i32,
}

impl RawScoreBounds {
    /// # Errors
    ///
    /// - `InvalidRawBounds` if `max <= min`
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigurationError> {
        if max <= min {
            return Err(ConfigurationError::InvalidRawBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds of a sum over `item_count` items of the given scale.
    ///
    /// # Errors
    ///
    /// - `ScoreOverflow` if either bound does not fit in an `i32`
    /// - `InvalidRawBounds` if `max <= min`
    pub fn for_items(
        instrument: &str,
        item_count: usize,
        scale: ScaleBounds,
    ) -> Result<Self, ConfigurationError> {
        let overflow = || ConfigurationError::ScoreOverflow {
            instrument: instrument.to_string(),
            item_count,
            min: scale.min,
            max: scale.max,
        };
        let count = i32::try_from(item_count).map_err(|_| overflow())?;
        let min = count.checked_mul(scale.min).ok_or_else(overflow)?;
        let max = count.checked_mul(scale.max).ok_or_else(overflow)?;
        Self::new(min, max)
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, raw_score: i32) -> bool {
        (self.min..=self.max).contains(&raw_score)
    }
}

/// A named group of items scored as a sub-scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    key: String,
    item_ids: Vec<String>,
    positions: Vec<usize>,
    bounds: RawScoreBounds,
}

impl Dimension {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    /// Positions of the member items within the instrument's item list.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn bounds(&self) -> RawScoreBounds {
        self.bounds
    }
}

/// Serialized form of an instrument definition, as found in catalogs.
///
/// When `dimensions` is omitted, dimensions are derived from item `domain`
/// tags, in item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    pub id: String,
    pub name: String,
    pub scale_min: i32,
    pub scale_max: i32,
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimensions: BTreeMap<String, Vec<String>>,
    pub classification: ClassificationStrategy,
}

/// Immutable, validated instrument definition.
///
/// # Invariants
///
/// - `scale.max > scale.min`, at least one item, item ids unique
/// - `scale.min + scale.max` and both raw bounds fit in an `i32`
/// - every dimension is non-empty and references existing items
/// - quadrant axes name two distinct dimensions
/// - `raw_bounds` equals item count times the scale bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InstrumentSpec", into = "InstrumentSpec")]
pub struct InstrumentDefinition {
    id: TestType,
    name: String,
    scale: ScaleBounds,
    items: Vec<Item>,
    dimensions: Vec<Dimension>,
    raw_bounds: RawScoreBounds,
    classification: ClassificationStrategy,
}

impl InstrumentDefinition {
    /// Validates a spec into a definition.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigurationError` found.
    pub fn new(spec: InstrumentSpec) -> Result<Self, ConfigurationError> {
        let InstrumentSpec {
            id,
            name,
            scale_min,
            scale_max,
            items,
            dimensions,
            classification,
        } = spec;

        let test_type = TestType::new(id.clone()).map_err(|source| ConfigurationError::InvalidId {
            instrument: id.clone(),
            source,
        })?;

        if scale_max <= scale_min {
            return Err(ConfigurationError::InvalidScaleBounds {
                instrument: id,
                min: scale_min,
                max: scale_max,
            });
        }
        let scale = ScaleBounds {
            min: scale_min,
            max: scale_max,
        };

        if items.is_empty() {
            return Err(ConfigurationError::NoItems { instrument: id });
        }
        if scale_min.checked_add(scale_max).is_none() {
            return Err(ConfigurationError::ScoreOverflow {
                instrument: id,
                item_count: items.len(),
                min: scale_min,
                max: scale_max,
            });
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigurationError::DuplicateItem {
                    instrument: id.clone(),
                    item: item.id.clone(),
                });
            }
        }

        let groups = if dimensions.is_empty() {
            Self::dimensions_from_domains(&items)
        } else {
            dimensions
        };
        let dimensions = groups
            .into_iter()
            .map(|(key, item_ids)| Self::resolve_dimension(&id, &items, scale, key, item_ids))
            .collect::<Result<Vec<_>, _>>()?;

        // Every partial sum of coded answers lies within these bounds
        let raw_bounds = RawScoreBounds::for_items(&id, items.len(), scale)?;

        if let ClassificationStrategy::Quadrant(model) = &classification {
            for axis in [&model.x_dimension, &model.y_dimension] {
                if !dimensions.iter().any(|d| &d.key == axis) {
                    return Err(ConfigurationError::MissingAxisDimension {
                        instrument: id.clone(),
                        dimension: axis.clone(),
                    });
                }
            }
            if model.x_dimension == model.y_dimension {
                return Err(ConfigurationError::SameAxisDimension { instrument: id });
            }
        }

        Ok(Self {
            id: test_type,
            name,
            scale,
            items,
            dimensions,
            raw_bounds,
            classification,
        })
    }

    fn dimensions_from_domains(items: &[Item]) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for item in items {
            if let Some(domain) = &item.domain {
                groups.entry(domain.clone()).or_default().push(item.id.clone());
            }
        }
        groups
    }

    fn resolve_dimension(
        instrument: &str,
        items: &[Item],
        scale: ScaleBounds,
        key: String,
        item_ids: Vec<String>,
    ) -> Result<Dimension, ConfigurationError> {
        if item_ids.is_empty() {
            return Err(ConfigurationError::EmptyDimension {
                instrument: instrument.to_string(),
                dimension: key,
            });
        }
        let positions = item_ids
            .iter()
            .map(|item_id| {
                items
                    .iter()
                    .position(|item| &item.id == item_id)
                    .ok_or_else(|| ConfigurationError::UnknownDimensionItem {
                        instrument: instrument.to_string(),
                        dimension: key.clone(),
                        item: item_id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let bounds = RawScoreBounds::for_items(instrument, positions.len(), scale)?;

        Ok(Dimension {
            key,
            item_ids,
            positions,
            bounds,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &TestType {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> ScaleBounds {
        self.scale
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the position of an item by id.
    pub fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, key: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.key == key)
    }

    pub fn raw_score_bounds(&self) -> RawScoreBounds {
        self.raw_bounds
    }

    pub fn classification(&self) -> &ClassificationStrategy {
        &self.classification
    }
}

impl TryFrom<InstrumentSpec> for InstrumentDefinition {
    type Error = ConfigurationError;

    fn try_from(spec: InstrumentSpec) -> Result<Self, Self::Error> {
        Self::new(spec)
    }
}

impl From<InstrumentDefinition> for InstrumentSpec {
    fn from(def: InstrumentDefinition) -> Self {
        InstrumentSpec {
            id: def.id.into(),
            name: def.name,
            scale_min: def.scale.min,
            scale_max: def.scale.max,
            items: def.items,
            dimensions: def
                .dimensions
                .into_iter()
                .map(|d| (d.key, d.item_ids))
                .collect(),
            classification: def.classification,
        }
    }
}
