use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rate expressed in percent (`41.14` means 41.14%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl Percentage {
    pub fn from_percent(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_percent(&self) -> Decimal {
        self.0
    }

    /// The rate as a plain fraction (`41.14%` -> `0.4114`).
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    pub fn from_bps(bps: u32) -> Self {
        Self(Decimal::from(bps) / Decimal::ONE_HUNDRED)
    }

    pub fn to_bps(&self) -> u32 {
        (self.0 * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fraction_and_bps_round_trip() {
        let p = Percentage::from_percent(dec!(41.14));
        assert_eq!(p.as_fraction(), dec!(0.4114));
        assert_eq!(Percentage::from_bps(5).as_percent(), dec!(0.05));
        assert_eq!(Percentage::from_bps(30).to_bps(), 30);
    }
}
