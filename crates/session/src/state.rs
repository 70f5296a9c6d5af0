use crate::config::SessionConfig;
use crate::view::PositionView;
use lp_sim_domain::enums::RangePreset;
use lp_sim_domain::errors::DomainError;
use lp_sim_domain::math::allocation::DepositRatio;
use lp_sim_domain::math::deposit::split_deposit;
use lp_sim_domain::metrics::fees::{
    MAX_BACKTEST_DAYS, MIN_BACKTEST_DAYS, estimate_apr, project_fees,
};
use lp_sim_domain::value_objects::price::Price;
use lp_sim_domain::value_objects::price_range::PriceRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mutable state of one simulator session.
///
/// The current price is a fixed reference for the session; the range bounds,
/// deposit amount and backtest period are user-controlled. Each update
/// operation validates its input before mutating, so the state never holds a
/// negative deposit or an out-of-range period — but it MAY hold an inverted
/// or degenerate price range, which the allocation policy absorbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    current_price: Price,
    range: PriceRange,
    deposit_amount: Decimal,
    backtest_days: u32,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            current_price: Price::new(config.initial_current_price),
            range: PriceRange::new(
                Price::new(config.initial_min_price),
                Price::new(config.initial_max_price),
            ),
            deposit_amount: config.initial_deposit_amount,
            backtest_days: config.initial_backtest_days,
        }
    }

    pub fn current_price(&self) -> Price {
        self.current_price
    }

    pub fn range(&self) -> &PriceRange {
        &self.range
    }

    pub fn deposit_amount(&self) -> Decimal {
        self.deposit_amount
    }

    pub fn backtest_days(&self) -> u32 {
        self.backtest_days
    }

    /// Sets the deposit amount. Zero is valid; negatives are rejected and
    /// leave the state untouched.
    pub fn set_deposit_amount(&mut self, amount: Decimal) -> Result<(), DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::InvalidAmount);
        }
        debug!(%amount, "deposit amount set");
        self.deposit_amount = amount;
        Ok(())
    }

    /// Nudges the lower bound by a percentage of itself.
    pub fn adjust_min_price(&mut self, delta_percent: Decimal) {
        self.range.adjust_min(delta_percent);
        debug!(min = %self.range.min_price, "min price adjusted");
    }

    /// Nudges the upper bound by a percentage of itself.
    pub fn adjust_max_price(&mut self, delta_percent: Decimal) {
        self.range.adjust_max(delta_percent);
        debug!(max = %self.range.max_price, "max price adjusted");
    }

    /// Replaces the range with a symmetric preset band around the current
    /// price.
    pub fn apply_range_preset(&mut self, preset: RangePreset) {
        self.range = PriceRange::around(self.current_price, preset.width_percent());
        debug!(%preset, min = %self.range.min_price, max = %self.range.max_price, "range preset applied");
    }

    /// Sets the backtest period, rejecting day counts outside `[1, 365]`.
    pub fn set_backtest_days(&mut self, days: u32) -> Result<(), DomainError> {
        if !(MIN_BACKTEST_DAYS..=MAX_BACKTEST_DAYS).contains(&days) {
            return Err(DomainError::BacktestPeriodOutOfRange { days });
        }
        debug!(days, "backtest period set");
        self.backtest_days = days;
        Ok(())
    }

    /// Derives the full position view from the current state.
    ///
    /// # Errors
    ///
    /// Propagates the deposit converter's price/amount validation; with a
    /// state built through the update operations, only a non-positive
    /// configured current price can actually fail here.
    pub fn position(&self) -> Result<PositionView, DomainError> {
        let ratio = DepositRatio::from_price_position(self.current_price, &self.range);
        let split = split_deposit(self.deposit_amount, &ratio, self.current_price)?;
        let estimated_apr = estimate_apr(self.backtest_days)?;
        let fees = project_fees(self.deposit_amount, estimated_apr);

        Ok(PositionView {
            ratio,
            split,
            estimated_apr,
            fees,
            in_range: self.range.contains(self.current_price),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn state() -> SessionState {
        SessionState::new(&SessionConfig::default())
    }

    #[test]
    fn test_default_view_reference_values() {
        let view = state().position().unwrap();

        // Stock seeds put the price almost exactly mid-range.
        assert!((view.ratio.quote - dec!(0.5)).abs() < dec!(0.001));
        assert_eq!(
            view.split.base_value + view.split.quote_value,
            dec!(1000)
        );
        assert!((view.split.base_tokens - dec!(0.1652)).abs() < dec!(0.0001));
        assert!((view.estimated_apr.as_percent() - dec!(41.85)).abs() < dec!(0.01));
        assert!((view.fees.daily.fees - dec!(1.147)).abs() < dec!(0.001));
        assert!(view.in_range);
    }

    #[test]
    fn test_preset_recenters_range() {
        let mut s = state();
        s.apply_range_preset(RangePreset::Balanced);

        let current = s.current_price().value;
        assert_eq!(s.range().min_price.value, current * dec!(0.9));
        assert_eq!(s.range().max_price.value, current * dec!(1.1));
        // A symmetric band always contains its center.
        assert!(s.position().unwrap().in_range);
    }

    #[test]
    fn test_rejected_deposit_leaves_state_unchanged() {
        let mut s = state();
        let before = s.clone();

        assert_eq!(
            s.set_deposit_amount(dec!(-5)).unwrap_err(),
            DomainError::InvalidAmount
        );
        assert_eq!(s, before);

        s.set_deposit_amount(Decimal::ZERO).unwrap();
        assert_eq!(s.deposit_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_rejected_backtest_days_leave_state_unchanged() {
        let mut s = state();

        for days in [0, 366, 1000] {
            assert_eq!(
                s.set_backtest_days(days).unwrap_err(),
                DomainError::BacktestPeriodOutOfRange { days }
            );
            assert_eq!(s.backtest_days(), 30);
        }

        s.set_backtest_days(365).unwrap();
        assert_eq!(s.backtest_days(), 365);
    }

    #[test]
    fn test_nudging_min_past_max_still_yields_a_view() {
        let mut s = state();
        // Push the lower bound far above the upper bound.
        for _ in 0..10 {
            s.adjust_min_price(dec!(10));
        }
        assert!(s.range().is_inverted());

        // The view stays total: the allocation collapses to a boundary.
        let view = s.position().unwrap();
        assert!(view.ratio.quote == Decimal::ZERO || view.ratio.quote == Decimal::ONE);
        assert!(!view.in_range);
    }

    #[test]
    fn test_adjustments_move_bounds_multiplicatively() {
        let mut s = state();
        let min = s.range().min_price.value;
        let max = s.range().max_price.value;

        s.adjust_min_price(dec!(-1));
        s.adjust_max_price(dec!(1));

        assert_eq!(s.range().min_price.value, min * dec!(0.99));
        assert_eq!(s.range().max_price.value, max * dec!(1.01));
    }
}
