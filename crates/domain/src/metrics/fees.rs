//! Fee and yield estimation.
//!
//! The APR here is a placeholder backtest, not a simulation over historical
//! data: a fixed baseline plus a smooth bounded oscillation driven by the
//! selected day count. Continuity matters because the value is displayed
//! live while the user drags the period control.

use crate::errors::DomainError;
use crate::value_objects::percentage::Percentage;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Shortest accepted backtest period, in days.
pub const MIN_BACKTEST_DAYS: u32 = 1;
/// Longest accepted backtest period, in days.
pub const MAX_BACKTEST_DAYS: u32 = 365;

/// Baseline annualized rate, in percent.
const BASELINE_APR: Decimal = Decimal::from_parts(4114, 0, 0, false, 2);
/// Oscillation amplitude around the baseline, in percent.
const APR_AMPLITUDE: f64 = 5.0;
/// Day-count divisor controlling the oscillation period.
const APR_PERIOD_DIVISOR: f64 = 10.0;

const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);
const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Estimates the annualized fee rate for a backtest period.
///
/// `baseline + sin(days / 10) * amplitude`, so the result always stays within
/// `baseline ± amplitude` and moves smoothly as the day count changes.
///
/// # Errors
///
/// [`DomainError::BacktestPeriodOutOfRange`] if `backtest_days` falls outside
/// `[1, 365]`.
pub fn estimate_apr(backtest_days: u32) -> Result<Percentage, DomainError> {
    if !(MIN_BACKTEST_DAYS..=MAX_BACKTEST_DAYS).contains(&backtest_days) {
        return Err(DomainError::BacktestPeriodOutOfRange {
            days: backtest_days,
        });
    }

    // sin is not available on Decimal; round-trip through f64.
    let variance = (f64::from(backtest_days) / APR_PERIOD_DIVISOR).sin() * APR_AMPLITUDE;
    let variance = Decimal::from_f64(variance).unwrap_or(Decimal::ZERO);

    Ok(Percentage::from_percent(BASELINE_APR + variance))
}

/// Projected fee income over one display horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonFee {
    /// Estimated fees earned over the horizon, fiat-denominated.
    pub fees: Decimal,
    /// Share of the full APR attributed to the horizon.
    pub rate_of_return: Percentage,
}

/// Fee projections at the four fixed display horizons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeProjection {
    pub daily: HorizonFee,
    pub weekly: HorizonFee,
    pub monthly: HorizonFee,
    pub yearly: HorizonFee,
}

/// Projects fee income for a deposit at the given annualized rate.
///
/// All horizons are linear extrapolations of the daily fee — weekly is
/// exactly `7 * daily`, monthly `30 * daily`, yearly `365 * daily` — with no
/// compounding. The per-horizon rates of return use the fixed denominators
/// 365, 52, 12 and 1 regardless of the backtest period that produced `apr`.
pub fn project_fees(deposit_amount: Decimal, apr: Percentage) -> FeeProjection {
    let daily_fees = deposit_amount * apr.as_fraction() / DAYS_PER_YEAR;
    let apr_percent = apr.as_percent();

    FeeProjection {
        daily: HorizonFee {
            fees: daily_fees,
            rate_of_return: Percentage::from_percent(apr_percent / DAYS_PER_YEAR),
        },
        weekly: HorizonFee {
            fees: daily_fees * DAYS_PER_WEEK,
            rate_of_return: Percentage::from_percent(apr_percent / WEEKS_PER_YEAR),
        },
        monthly: HorizonFee {
            fees: daily_fees * DAYS_PER_MONTH,
            rate_of_return: Percentage::from_percent(apr_percent / MONTHS_PER_YEAR),
        },
        yearly: HorizonFee {
            fees: daily_fees * DAYS_PER_YEAR,
            rate_of_return: apr,
        },
    }
}

/// The daily fee leg on its own.
pub fn daily_fee(deposit_amount: Decimal, apr: Percentage) -> Decimal {
    project_fees(deposit_amount, apr).daily.fees
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_apr_for_thirty_days() {
        // 41.14 + sin(3) * 5 ~= 41.85
        let apr = estimate_apr(30).unwrap();
        assert!((apr.as_percent() - dec!(41.8456)).abs() < dec!(0.001));
    }

    #[test]
    fn test_apr_stays_within_band() {
        for days in MIN_BACKTEST_DAYS..=MAX_BACKTEST_DAYS {
            let apr = estimate_apr(days).unwrap().as_percent();
            assert!(apr >= dec!(36.14), "day {days} below band: {apr}");
            assert!(apr <= dec!(46.14), "day {days} above band: {apr}");
        }
    }

    #[test]
    fn test_apr_is_continuous_across_adjacent_days() {
        // |d/dx sin(x/10) * 5| <= 0.5, so adjacent integer days can differ
        // by at most ~0.5 percentage points.
        let mut prev = estimate_apr(1).unwrap().as_percent();
        for days in 2..=MAX_BACKTEST_DAYS {
            let apr = estimate_apr(days).unwrap().as_percent();
            assert!((apr - prev).abs() <= dec!(0.51), "jump at day {days}");
            prev = apr;
        }
    }

    #[test]
    fn test_apr_rejects_out_of_range_days() {
        assert_eq!(
            estimate_apr(0).unwrap_err(),
            DomainError::BacktestPeriodOutOfRange { days: 0 }
        );
        assert_eq!(
            estimate_apr(366).unwrap_err(),
            DomainError::BacktestPeriodOutOfRange { days: 366 }
        );
    }

    #[test]
    fn test_projection_is_linear_in_the_daily_fee() {
        let apr = Percentage::from_percent(dec!(41.14));
        let projection = project_fees(dec!(1000), apr);

        assert_eq!(projection.weekly.fees, projection.daily.fees * dec!(7));
        assert_eq!(projection.monthly.fees, projection.daily.fees * dec!(30));
        assert_eq!(projection.yearly.fees, projection.daily.fees * dec!(365));
    }

    #[test]
    fn test_horizon_rates_use_fixed_denominators() {
        let apr = Percentage::from_percent(dec!(36.50));
        let projection = project_fees(dec!(500), apr);

        assert_eq!(projection.daily.rate_of_return.as_percent(), dec!(0.1));
        assert_eq!(
            projection.weekly.rate_of_return.as_percent(),
            dec!(36.50) / dec!(52)
        );
        assert_eq!(
            projection.monthly.rate_of_return.as_percent(),
            dec!(36.50) / dec!(12)
        );
        assert_eq!(projection.yearly.rate_of_return.as_percent(), dec!(36.50));
    }

    #[test]
    fn test_reference_scenario() {
        // deposit 1000 over a 30-day backtest: daily ~1.147, weekly ~8.03.
        let apr = estimate_apr(30).unwrap();
        let projection = project_fees(dec!(1000), apr);

        assert!((projection.daily.fees - dec!(1.147)).abs() < dec!(0.001));
        assert!((projection.weekly.fees - dec!(8.03)).abs() < dec!(0.01));
        assert_eq!(daily_fee(dec!(1000), apr), projection.daily.fees);
    }

    #[test]
    fn test_zero_deposit_projects_zero_fees() {
        let apr = estimate_apr(90).unwrap();
        let projection = project_fees(Decimal::ZERO, apr);
        assert_eq!(projection.yearly.fees, Decimal::ZERO);
        // Rates are a property of the APR, not the deposit.
        assert_eq!(projection.yearly.rate_of_return, apr);
    }
}
