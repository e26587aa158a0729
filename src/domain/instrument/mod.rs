//! Instrument Registry - static catalog of questionnaire definitions.
//!
//! # Components
//!
//! - `InstrumentDefinition` - items, scale bounds, reverse flags, dimensions
//! - `ClassificationStrategy` - linear levels or a two-axis quadrant model
//! - `InstrumentRegistry` - validated catalog, built-in or loaded from YAML
//!
//! Definitions are validated once, when the registry is built. A malformed
//! definition surfaces as `ConfigurationError` at startup rather than per
//! request.

pub mod catalog;
mod classification;
mod definition;
mod errors;
mod registry;

pub use classification::{
    ClassificationStrategy, LevelBand, LevelScheme, Quadrant, QuadrantLabels, QuadrantModel,
};
pub use definition::{
    Dimension, InstrumentDefinition, InstrumentSpec, Item, RawScoreBounds, ScaleBounds,
};
pub use errors::ConfigurationError;
pub use registry::InstrumentRegistry;
