//! Normalizer & Classifier - raw score to percentage, percentage to level.

use crate::domain::foundation::ScorePercentage;
use crate::domain::instrument::{LevelBand, LevelScheme, Quadrant, RawScoreBounds};

/// Converts raw scores to percentages of their bounds.
pub struct Normalizer;

impl Normalizer {
    /// `(raw - min) / (max - min) * 100`, rounded to one decimal.
    ///
    /// Exact at both bounds. Scores outside the bounds clamp to 0.0 or
    /// 100.0; the scorer never produces them.
    pub fn normalize(raw_score: i32, bounds: RawScoreBounds) -> ScorePercentage {
        let span = i64::from(bounds.max()) - i64::from(bounds.min());
        let offset = (i64::from(raw_score) - i64::from(bounds.min())).clamp(0, span);
        ScorePercentage::from_fraction(offset as u64, span as u64)
    }
}

/// Maps percentages onto levels and quadrants.
pub struct Classifier;

impl Classifier {
    /// Selects the first band whose upper bound exceeds `percentage`.
    ///
    /// 100.0 falls into the last band.
    pub fn classify_level(percentage: ScorePercentage, scheme: &LevelScheme) -> &LevelBand {
        let bands = scheme.bands();
        bands
            .iter()
            .find(|band| percentage < band.upper_bound)
            .unwrap_or(&bands[bands.len() - 1])
    }

    /// Splits each axis at 50.0; exactly 50.0 counts as high.
    pub fn classify_quadrant(x: ScorePercentage, y: ScorePercentage) -> Quadrant {
        let high_x = x >= ScorePercentage::MIDPOINT;
        let high_y = y >= ScorePercentage::MIDPOINT;
        match (high_x, high_y) {
            (true, true) => Quadrant::Q1,
            (true, false) => Quadrant::Q2,
            (false, true) => Quadrant::Q3,
            (false, false) => Quadrant::Q4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TestType;
    use crate::domain::instrument::{catalog, ClassificationStrategy, InstrumentRegistry};
    use proptest::prelude::*;

    fn pct(value: f64) -> ScorePercentage {
        ScorePercentage::try_from(value).unwrap()
    }

    fn five_levels() -> LevelScheme {
        LevelScheme::evenly(&[
            ("very_low", "Very low"),
            ("low", "Low"),
            ("medium", "Medium"),
            ("high", "High"),
            ("very_high", "Very high"),
        ])
        .unwrap()
    }

    fn scheme_of(id: &str) -> LevelScheme {
        let registry = InstrumentRegistry::builtin().unwrap();
        match registry
            .get(&TestType::new(id).unwrap())
            .unwrap()
            .classification()
        {
            ClassificationStrategy::Levels { bands } => bands.clone(),
            ClassificationStrategy::Quadrant(_) => panic!("{} is not a level instrument", id),
        }
    }

    fn raw_level(id: &str, raw: i32) -> String {
        let registry = InstrumentRegistry::builtin().unwrap();
        let instrument = registry.get(&TestType::new(id).unwrap()).unwrap();
        let p = Normalizer::normalize(raw, instrument.raw_score_bounds());
        Classifier::classify_level(p, &scheme_of(id)).tag.clone()
    }

    #[test]
    fn normalize_is_exact_at_bounds_for_every_instrument() {
        let registry = InstrumentRegistry::builtin().unwrap();
        for instrument in registry.iter() {
            let bounds = instrument.raw_score_bounds();
            assert_eq!(Normalizer::normalize(bounds.min(), bounds), ScorePercentage::ZERO);
            assert_eq!(Normalizer::normalize(bounds.max(), bounds), ScorePercentage::HUNDRED);
        }
    }

    #[test]
    fn normalize_midpoint_of_twelve_item_scale() {
        let bounds = RawScoreBounds::new(12, 60).unwrap();
        assert_eq!(Normalizer::normalize(36, bounds), pct(50.0));
    }

    #[test]
    fn normalize_rounds_to_one_decimal() {
        let bounds = RawScoreBounds::new(0, 27).unwrap();
        assert_eq!(Normalizer::normalize(4, bounds).tenths(), 148);
        assert_eq!(Normalizer::normalize(9, bounds).tenths(), 333);
    }

    #[test]
    fn normalize_clamps_outside_bounds() {
        let bounds = RawScoreBounds::new(10, 40).unwrap();
        assert_eq!(Normalizer::normalize(5, bounds), ScorePercentage::ZERO);
        assert_eq!(Normalizer::normalize(41, bounds), ScorePercentage::HUNDRED);
    }

    #[test]
    fn middle_of_five_buckets_for_fifty_percent() {
        assert_eq!(Classifier::classify_level(pct(50.0), &five_levels()).tag, "medium");
    }

    #[test]
    fn bucket_lower_bounds_are_inclusive() {
        let scheme = five_levels();
        assert_eq!(Classifier::classify_level(pct(0.0), &scheme).tag, "very_low");
        assert_eq!(Classifier::classify_level(pct(19.9), &scheme).tag, "very_low");
        assert_eq!(Classifier::classify_level(pct(20.0), &scheme).tag, "low");
        assert_eq!(Classifier::classify_level(pct(79.9), &scheme).tag, "high");
        assert_eq!(Classifier::classify_level(pct(80.0), &scheme).tag, "very_high");
        assert_eq!(Classifier::classify_level(pct(100.0), &scheme).tag, "very_high");
    }

    #[test]
    fn phq9_published_cutoffs() {
        let id = catalog::DEPRESSION_PHQ9;
        assert_eq!(raw_level(id, 4), "minimal");
        assert_eq!(raw_level(id, 5), "mild");
        assert_eq!(raw_level(id, 9), "mild");
        assert_eq!(raw_level(id, 10), "moderate");
        assert_eq!(raw_level(id, 14), "moderate");
        assert_eq!(raw_level(id, 15), "moderately_severe");
        assert_eq!(raw_level(id, 19), "moderately_severe");
        assert_eq!(raw_level(id, 20), "severe");
        assert_eq!(raw_level(id, 27), "severe");
    }

    #[test]
    fn swls_published_cutoffs() {
        let id = catalog::LIFE_SATISFACTION_SWLS;
        assert_eq!(raw_level(id, 9), "extremely_dissatisfied");
        assert_eq!(raw_level(id, 10), "dissatisfied");
        assert_eq!(raw_level(id, 19), "slightly_dissatisfied");
        assert_eq!(raw_level(id, 20), "neutral");
        assert_eq!(raw_level(id, 21), "slightly_satisfied");
        assert_eq!(raw_level(id, 26), "satisfied");
        assert_eq!(raw_level(id, 31), "extremely_satisfied");
    }

    #[test]
    fn k10_and_rosenberg_cutoffs() {
        assert_eq!(raw_level(catalog::DISTRESS_K10, 15), "low");
        assert_eq!(raw_level(catalog::DISTRESS_K10, 16), "moderate");
        assert_eq!(raw_level(catalog::DISTRESS_K10, 22), "high");
        assert_eq!(raw_level(catalog::DISTRESS_K10, 30), "very_high");

        assert_eq!(raw_level(catalog::ROSENBERG_SELF_ESTEEM, 24), "low");
        assert_eq!(raw_level(catalog::ROSENBERG_SELF_ESTEEM, 25), "normal");
        assert_eq!(raw_level(catalog::ROSENBERG_SELF_ESTEEM, 35), "normal");
        assert_eq!(raw_level(catalog::ROSENBERG_SELF_ESTEEM, 36), "high");
    }

    #[test]
    fn quadrant_ties_resolve_high() {
        assert_eq!(Classifier::classify_quadrant(pct(50.0), pct(50.0)), Quadrant::Q1);
        assert_eq!(Classifier::classify_quadrant(pct(50.0), pct(49.9)), Quadrant::Q2);
        assert_eq!(Classifier::classify_quadrant(pct(49.9), pct(50.0)), Quadrant::Q3);
        assert_eq!(Classifier::classify_quadrant(pct(49.9), pct(49.9)), Quadrant::Q4);
    }

    proptest! {
        #[test]
        fn every_percentage_gets_exactly_one_level(tenths in 0u16..=1000) {
            let p = ScorePercentage::from_tenths(tenths).unwrap();
            let scheme = five_levels();
            let chosen = Classifier::classify_level(p, &scheme);

            let lower_bounds = std::iter::once(ScorePercentage::ZERO)
                .chain(scheme.bands().iter().map(|b| b.upper_bound));
            let containing: Vec<&LevelBand> = scheme
                .bands()
                .iter()
                .zip(lower_bounds)
                .filter(|(band, lower)| {
                    p >= *lower && (p < band.upper_bound || band.upper_bound == ScorePercentage::HUNDRED)
                })
                .map(|(band, _)| band)
                .collect();

            prop_assert_eq!(containing.len(), 1);
            prop_assert_eq!(containing[0], chosen);
        }

        #[test]
        fn quadrant_is_total_and_deterministic(x in 0u16..=1000, y in 0u16..=1000) {
            let x = ScorePercentage::from_tenths(x).unwrap();
            let y = ScorePercentage::from_tenths(y).unwrap();
            let first = Classifier::classify_quadrant(x, y);
            prop_assert!(Quadrant::ALL.contains(&first));
            prop_assert_eq!(first, Classifier::classify_quadrant(x, y));
        }

        #[test]
        fn normalize_is_monotonic(a in 12i32..=60, b in 12i32..=60) {
            let bounds = RawScoreBounds::new(12, 60).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Normalizer::normalize(lo, bounds) <= Normalizer::normalize(hi, bounds));
        }
    }
}
