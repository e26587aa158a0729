//! Registry configuration errors.
//!
//! A `ConfigurationError` means an instrument definition is malformed. It is
//! raised while the registry loads and is fatal for startup.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Instrument '{instrument}': invalid test type: {source}")]
    InvalidId {
        instrument: String,
        source: ValidationError,
    },

    #[error("Instrument '{instrument}': scale max {max} must be greater than scale min {min}")]
    InvalidScaleBounds { instrument: String, min: i32, max: i32 },

    #[error("Raw score bounds invalid: max {max} must be greater than min {min}")]
    InvalidRawBounds { min: i32, max: i32 },

    #[error("Instrument '{instrument}': scores over {item_count} items of scale {min}..={max} overflow")]
    ScoreOverflow {
        instrument: String,
        item_count: usize,
        min: i32,
        max: i32,
    },

    #[error("Instrument '{instrument}' has no items")]
    NoItems { instrument: String },

    #[error("Instrument '{instrument}': duplicate item id '{item}'")]
    DuplicateItem { instrument: String, item: String },

    #[error("Instrument '{instrument}': dimension '{dimension}' is empty")]
    EmptyDimension { instrument: String, dimension: String },

    #[error("Instrument '{instrument}': dimension '{dimension}' references unknown item '{item}'")]
    UnknownDimensionItem {
        instrument: String,
        dimension: String,
        item: String,
    },

    #[error("Level scheme has no bands")]
    NoLevelBands,

    #[error("Level band '{tag}' upper bound {upper} must exceed the previous bound {previous}")]
    NonIncreasingBands {
        tag: String,
        previous: String,
        upper: String,
    },

    #[error("Level band '{tag}' has a zero upper bound and would be empty")]
    EmptyBand { tag: String },

    #[error("Level bands end at {last}, they must cover up to 100.0")]
    NotExhaustive { last: String },

    #[error("Instrument '{instrument}': quadrant axis '{dimension}' is not a dimension")]
    MissingAxisDimension { instrument: String, dimension: String },

    #[error("Instrument '{instrument}': quadrant axes must be two different dimensions")]
    SameAxisDimension { instrument: String },

    #[error("Duplicate instrument '{instrument}' in registry")]
    DuplicateInstrument { instrument: String },

    #[error("Failed to parse instrument catalog: {0}")]
    Parse(String),
}

impl From<ConfigurationError> for DomainError {
    fn from(err: ConfigurationError) -> Self {
        DomainError::new(ErrorCode::ConfigurationError, err.to_string())
    }
}
