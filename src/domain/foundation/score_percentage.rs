//! ScorePercentage value object (0.0-100.0, one decimal place).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

const TENTHS_PER_HUNDRED: u16 = 1000;

/// A normalized score in `[0.0, 100.0]` with one decimal place.
///
/// Stored as whole tenths of a percent so equality, ordering and the
/// extremes are exact. Serializes as a JSON number (`33.3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScorePercentage(u16);

impl ScorePercentage {
    /// 0.0%
    pub const ZERO: Self = Self(0);

    /// 50.0%, the axis split used for quadrant classification.
    pub const MIDPOINT: Self = Self(TENTHS_PER_HUNDRED / 2);

    /// 100.0%
    pub const HUNDRED: Self = Self(TENTHS_PER_HUNDRED);

    /// Creates a percentage from tenths of a percent (`333` is 33.3%).
    pub fn from_tenths(tenths: u16) -> Result<Self, ValidationError> {
        if tenths > TENTHS_PER_HUNDRED {
            return Err(ValidationError::out_of_range(
                "percentage_tenths",
                0,
                i32::from(TENTHS_PER_HUNDRED),
                i32::from(tenths),
            ));
        }
        Ok(Self(tenths))
    }

    /// Computes `offset / span * 100` rounded to one decimal, halves up.
    ///
    /// Callers guarantee `span > 0` and `offset <= span`; the result is
    /// clamped to 100.0 regardless.
    pub(crate) fn from_fraction(offset: u64, span: u64) -> Self {
        if span == 0 {
            return Self::ZERO;
        }
        let tenths = (offset * 2 * u64::from(TENTHS_PER_HUNDRED) + span) / (2 * span);
        Self(tenths.min(u64::from(TENTHS_PER_HUNDRED)) as u16)
    }

    /// Returns the value in tenths of a percent.
    pub fn tenths(&self) -> u16 {
        self.0
    }

    /// Returns the value as a float, e.g. `33.3`.
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for ScorePercentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for ScorePercentage {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "percentage",
                format!("{} is not within 0.0..=100.0", value),
            ));
        }
        Ok(Self((value * 10.0).round() as u16))
    }
}

impl From<ScorePercentage> for f64 {
    fn from(value: ScorePercentage) -> Self {
        value.value()
    }
}

impl fmt::Display for ScorePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value())
    }
}
