//! Clamped salary-split percentage controller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SplitBounds;

/// The current salary-split percentage, kept inside the configured bounds.
///
/// Out-of-range input never errors: `set` clamps the value into the
/// inclusive `[min, max]` range from the rate configuration. The shipped
/// bounds are [60, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitPercentage {
    value: Decimal,
    min: Decimal,
    max: Decimal,
}

impl SplitPercentage {
    /// Creates a controller at the upper bound (the traditional 100% split).
    pub fn new(bounds: &SplitBounds) -> Self {
        Self {
            value: bounds.max_percentage,
            min: bounds.min_percentage,
            max: bounds.max_percentage,
        }
    }

    /// Creates a controller holding `value`, clamped into the bounds.
    pub fn with_value(bounds: &SplitBounds, value: Decimal) -> Self {
        let mut split = Self::new(bounds);
        split.set(value);
        split
    }

    /// Replaces the current value, clamping out-of-range input.
    pub fn set(&mut self, value: Decimal) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Returns the current salary percentage.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the complementary bonus percentage (`100 − value`).
    pub fn bonus_percentage(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.value
    }
}
