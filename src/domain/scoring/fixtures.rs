//! Shared test fixtures for scoring, drafts and handlers.

use std::collections::BTreeMap;

use crate::domain::instrument::{
    ClassificationStrategy, InstrumentDefinition, InstrumentSpec, Item, LevelScheme,
};

/// Id of [`clarity_twelve`].
pub const CLARITY_TWELVE: &str = "clarity-12";

/// A 12-item, 1..=5 instrument with items 1, 2, 5, 6, 7, 9, 10 and 12
/// reverse-coded and five equal-width levels.
pub fn clarity_twelve() -> InstrumentDefinition {
    let reversed = [1, 2, 5, 6, 7, 9, 10, 12];
    let items = (1..=12)
        .map(|n| {
            let id = format!("c{}", n);
            if reversed.contains(&n) {
                Item::reversed(id)
            } else {
                Item::new(id)
            }
        })
        .collect();

    InstrumentDefinition::new(InstrumentSpec {
        id: CLARITY_TWELVE.to_string(),
        name: "Twelve item clarity".to_string(),
        scale_min: 1,
        scale_max: 5,
        items,
        dimensions: BTreeMap::new(),
        classification: ClassificationStrategy::Levels {
            bands: LevelScheme::evenly(&[
                ("very_low", "Very low"),
                ("low", "Low"),
                ("medium", "Medium"),
                ("high", "High"),
                ("very_high", "Very high"),
            ])
            .unwrap(),
        },
    })
    .unwrap()
}
