use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numeric seeds a session starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub initial_current_price: Decimal,
    pub initial_min_price: Decimal,
    pub initial_max_price: Decimal,
    pub initial_deposit_amount: Decimal,
    pub initial_backtest_days: u32,
}

impl Default for SessionConfig {
    /// The dashboard's stock WETH/USDC seeds.
    fn default() -> Self {
        Self {
            initial_current_price: Decimal::new(302_658, 2),
            initial_min_price: Decimal::new(272_393, 2),
            initial_max_price: Decimal::new(332_924, 2),
            initial_deposit_amount: Decimal::new(1000, 0),
            initial_backtest_days: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_seeds() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_current_price, dec!(3026.58));
        assert_eq!(config.initial_min_price, dec!(2723.93));
        assert_eq!(config.initial_max_price, dec!(3329.24));
        assert_eq!(config.initial_deposit_amount, dec!(1000));
        assert_eq!(config.initial_backtest_days, 30);
    }
}
