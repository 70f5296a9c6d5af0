use crate::value_objects::price::Price;
use crate::value_objects::price_range::PriceRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a deposit divides between the two paired assets.
///
/// `base + quote == 1` exactly: `quote` is the computed leg and `base` is
/// its complement, never a second computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositRatio {
    /// Fraction of value held as the base asset (token A).
    pub base: Decimal,
    /// Fraction of value held as the quote asset (token B).
    pub quote: Decimal,
}

impl DepositRatio {
    /// Derives the split from where the current price sits inside the range.
    ///
    /// Below (or at) the lower bound the position has been fully converted to
    /// the base asset; above (or at) the upper bound it is fully quote. In
    /// between, the quote share is the linear position of the price within
    /// the band: `(current - min) / (max - min)`.
    ///
    /// The at-or-below-min branch is checked first, so a degenerate range
    /// (`min == max == current`) resolves to a quote ratio of 0 instead of
    /// dividing by zero. Inverted ranges (`min > max`) always hit one of the
    /// boundary branches. The result is a ratio in `[0, 1]` for any input.
    pub fn from_price_position(current: Price, range: &PriceRange) -> Self {
        if current.value <= range.min_price.value {
            return Self::all_base();
        }
        if current.value >= range.max_price.value {
            return Self::all_quote();
        }
        let quote = (current.value - range.min_price.value) / range.width();
        Self {
            base: Decimal::ONE - quote,
            quote,
        }
    }

    pub fn all_base() -> Self {
        Self {
            base: Decimal::ONE,
            quote: Decimal::ZERO,
        }
    }

    pub fn all_quote() -> Self {
        Self {
            base: Decimal::ZERO,
            quote: Decimal::ONE,
        }
    }
}
