use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spot price quoted as quote-asset units per one base-asset unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// Flips the quote direction (base-per-quote instead of quote-per-base).
    /// A zero price inverts to zero rather than dividing.
    pub fn invert(&self) -> Self {
        if self.value.is_zero() {
            return Self {
                value: Decimal::ZERO,
            };
        }
        Self {
            value: Decimal::ONE / self.value,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invert() {
        let p = Price::new(dec!(4));
        assert_eq!(p.invert().value, dec!(0.25));
        assert_eq!(Price::new(Decimal::ZERO).invert().value, Decimal::ZERO);
    }

    #[test]
    fn test_is_positive() {
        assert!(Price::new(dec!(3026.58)).is_positive());
        assert!(!Price::new(Decimal::ZERO).is_positive());
        assert!(!Price::new(dec!(-1)).is_positive());
    }
}
