//! Built-in instrument catalog.
//!
//! Level cut-offs are the published raw-score cut-offs converted to the
//! percentage at which the next band starts, over each instrument's raw
//! score range.

use std::collections::BTreeMap;

use super::{
    ClassificationStrategy, ConfigurationError, InstrumentSpec, Item, LevelBand, LevelScheme,
    QuadrantLabels, QuadrantModel,
};
use crate::domain::foundation::ScorePercentage;

/// Rosenberg Self-Esteem Scale.
pub const ROSENBERG_SELF_ESTEEM: &str = "rses";
/// Ten-Item Big Five Inventory.
pub const BIG_FIVE_BFI10: &str = "bfi10";
/// Patient Health Questionnaire depression screen.
pub const DEPRESSION_PHQ9: &str = "phq9";
/// Satisfaction With Life Scale.
pub const LIFE_SATISFACTION_SWLS: &str = "swls";
/// Kessler Psychological Distress Scale.
pub const DISTRESS_K10: &str = "k10";
/// Self-Concept Clarity Scale.
pub const SELF_CONCEPT_CLARITY: &str = "sccs";
/// Two-axis industriousness model (drive x discipline).
pub const INDUSTRIOUSNESS: &str = "industriousness";

fn upto(tenths: u64) -> ScorePercentage {
    ScorePercentage::from_fraction(tenths, 1000)
}

fn band(tenths: u64, tag: &str, label: &str) -> LevelBand {
    LevelBand::new(upto(tenths), tag, label)
}

/// Items `<prefix>-1 ..= <prefix>-<count>`, reversing the given 1-based positions.
fn numbered_items(prefix: &str, count: usize, reversed: &[usize]) -> Vec<Item> {
    (1..=count)
        .map(|n| {
            let id = format!("{}-{}", prefix, n);
            if reversed.contains(&n) {
                Item::reversed(id)
            } else {
                Item::new(id)
            }
        })
        .collect()
}

fn levels(bands: Vec<LevelBand>) -> Result<ClassificationStrategy, ConfigurationError> {
    Ok(ClassificationStrategy::Levels {
        bands: LevelScheme::new(bands)?,
    })
}

fn spec(
    id: &str,
    name: &str,
    scale: (i32, i32),
    items: Vec<Item>,
    classification: ClassificationStrategy,
) -> InstrumentSpec {
    InstrumentSpec {
        id: id.to_string(),
        name: name.to_string(),
        scale_min: scale.0,
        scale_max: scale.1,
        items,
        dimensions: BTreeMap::new(),
        classification,
    }
}

/// Returns the specs of every built-in instrument, in dashboard order.
pub fn builtin_specs() -> Result<Vec<InstrumentSpec>, ConfigurationError> {
    Ok(vec![
        rosenberg()?,
        big_five()?,
        phq9()?,
        swls()?,
        k10()?,
        self_concept_clarity()?,
        industriousness(),
    ])
}

// Raw 10..=40; < 15 low and > 25 high on the 0..=30 convention.
fn rosenberg() -> Result<InstrumentSpec, ConfigurationError> {
    Ok(spec(
        ROSENBERG_SELF_ESTEEM,
        "Rosenberg Self-Esteem Scale",
        (1, 4),
        numbered_items(ROSENBERG_SELF_ESTEEM, 10, &[2, 5, 6, 8, 9]),
        levels(vec![
            band(500, "low", "Low self-esteem"),
            band(867, "normal", "Normal self-esteem"),
            band(1000, "high", "High self-esteem"),
        ])?,
    ))
}

fn big_five() -> Result<InstrumentSpec, ConfigurationError> {
    let traits = [
        "extraversion",
        "agreeableness",
        "conscientiousness",
        "neuroticism",
        "openness",
    ];
    let reversed = [1, 3, 4, 5, 7];
    // Item n belongs to trait (n - 1) % 5.
    let items = (1..=10)
        .map(|n: usize| {
            let id = format!("{}-{}", BIG_FIVE_BFI10, n);
            let item = if reversed.contains(&n) {
                Item::reversed(id)
            } else {
                Item::new(id)
            };
            item.in_domain(traits[(n - 1) % traits.len()])
        })
        .collect();

    Ok(spec(
        BIG_FIVE_BFI10,
        "Big Five Inventory (10-item)",
        (1, 5),
        items,
        ClassificationStrategy::Levels {
            bands: LevelScheme::evenly(&[
                ("very_low", "Very low"),
                ("low", "Low"),
                ("average", "Average"),
                ("high", "High"),
                ("very_high", "Very high"),
            ])?,
        },
    ))
}

// Raw 0..=27; severity cut-offs at 5, 10, 15 and 20.
fn phq9() -> Result<InstrumentSpec, ConfigurationError> {
    Ok(spec(
        DEPRESSION_PHQ9,
        "Patient Health Questionnaire (PHQ-9)",
        (0, 3),
        numbered_items(DEPRESSION_PHQ9, 9, &[]),
        levels(vec![
            band(185, "minimal", "Minimal depression"),
            band(370, "mild", "Mild depression"),
            band(556, "moderate", "Moderate depression"),
            band(741, "moderately_severe", "Moderately severe depression"),
            band(1000, "severe", "Severe depression"),
        ])?,
    ))
}

// Raw 5..=35; bands start at 10, 15, 20, 21, 26 and 31.
fn swls() -> Result<InstrumentSpec, ConfigurationError> {
    Ok(spec(
        LIFE_SATISFACTION_SWLS,
        "Satisfaction With Life Scale",
        (1, 7),
        numbered_items(LIFE_SATISFACTION_SWLS, 5, &[]),
        levels(vec![
            band(167, "extremely_dissatisfied", "Extremely dissatisfied"),
            band(333, "dissatisfied", "Dissatisfied"),
            band(500, "slightly_dissatisfied", "Slightly dissatisfied"),
            band(533, "neutral", "Neutral"),
            band(700, "slightly_satisfied", "Slightly satisfied"),
            band(867, "satisfied", "Satisfied"),
            band(1000, "extremely_satisfied", "Extremely satisfied"),
        ])?,
    ))
}

// Raw 10..=50; bands start at 16, 22 and 30.
fn k10() -> Result<InstrumentSpec, ConfigurationError> {
    Ok(spec(
        DISTRESS_K10,
        "Kessler Psychological Distress Scale (K10)",
        (1, 5),
        numbered_items(DISTRESS_K10, 10, &[]),
        levels(vec![
            band(150, "low", "Likely to be well"),
            band(300, "moderate", "Mild distress"),
            band(500, "high", "Moderate distress"),
            band(1000, "very_high", "Severe distress"),
        ])?,
    ))
}

fn self_concept_clarity() -> Result<InstrumentSpec, ConfigurationError> {
    Ok(spec(
        SELF_CONCEPT_CLARITY,
        "Self-Concept Clarity Scale",
        (1, 5),
        numbered_items(SELF_CONCEPT_CLARITY, 12, &[1, 2, 3, 4, 5, 7, 8, 9, 10, 12]),
        ClassificationStrategy::Levels {
            bands: LevelScheme::evenly(&[
                ("low", "Low clarity"),
                ("moderate", "Moderate clarity"),
                ("high", "High clarity"),
            ])?,
        },
    ))
}

fn industriousness() -> InstrumentSpec {
    let mut items = numbered_items(INDUSTRIOUSNESS, 8, &[3, 7]);
    for (i, item) in items.iter_mut().enumerate() {
        item.domain = Some(if i < 4 { "drive" } else { "discipline" }.to_string());
    }

    spec(
        INDUSTRIOUSNESS,
        "Industriousness Quadrant",
        (1, 5),
        items,
        ClassificationStrategy::Quadrant(QuadrantModel {
            x_dimension: "drive".to_string(),
            y_dimension: "discipline".to_string(),
            labels: QuadrantLabels {
                q1: "Steady achiever".to_string(),
                q2: "Sprinter".to_string(),
                q3: "Methodical planner".to_string(),
                q4: "Coaster".to_string(),
            },
        }),
    )
}
