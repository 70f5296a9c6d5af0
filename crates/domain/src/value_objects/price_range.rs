use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The [min, max] price band a position concentrates its liquidity over.
///
/// Bounds are user-controlled and deliberately unclamped: repeated nudges may
/// leave the range degenerate (`min == max`) or inverted (`min > max`). Both
/// states are tolerated here and resolved by the allocation policy instead of
/// being rejected at mutation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_price: Price,
    pub max_price: Price,
}

impl PriceRange {
    pub fn new(min_price: Price, max_price: Price) -> Self {
        Self {
            min_price,
            max_price,
        }
    }

    /// Builds a symmetric band of `width_percent` full width around `current`:
    /// half the width below, half above.
    pub fn around(current: Price, width_percent: Decimal) -> Self {
        let half_fraction = width_percent / Decimal::from(200);
        Self {
            min_price: Price::new(current.value * (Decimal::ONE - half_fraction)),
            max_price: Price::new(current.value * (Decimal::ONE + half_fraction)),
        }
    }

    pub fn contains(&self, price: Price) -> bool {
        price.value >= self.min_price.value && price.value <= self.max_price.value
    }

    pub fn width(&self) -> Decimal {
        self.max_price.value - self.min_price.value
    }

    pub fn midpoint(&self) -> Price {
        Price::new((self.min_price.value + self.max_price.value) / Decimal::TWO)
    }

    pub fn is_degenerate(&self) -> bool {
        self.min_price.value == self.max_price.value
    }

    pub fn is_inverted(&self) -> bool {
        self.min_price.value > self.max_price.value
    }

    /// Nudges the lower bound by `delta_percent` (e.g. `-1` shrinks it by 1%).
    pub fn adjust_min(&mut self, delta_percent: Decimal) {
        self.min_price = nudged(self.min_price, delta_percent);
    }

    /// Nudges the upper bound by `delta_percent`.
    pub fn adjust_max(&mut self, delta_percent: Decimal) {
        self.max_price = nudged(self.max_price, delta_percent);
    }
}

fn nudged(bound: Price, delta_percent: Decimal) -> Price {
    Price::new(bound.value * (Decimal::ONE + delta_percent / Decimal::ONE_HUNDRED))
}
