use crate::metrics::fees::{MAX_BACKTEST_DAYS, MIN_BACKTEST_DAYS};

/// Validation failures raised by the calculation core.
///
/// These are local, synchronous failures with no recovery path inside the
/// core; callers either prevent them at the edit point or surface them as
/// validation messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Current price is zero or negative.
    #[error("current price must be positive")]
    InvalidPrice,
    /// Deposit amount is negative.
    #[error("deposit amount cannot be negative")]
    InvalidAmount,
    /// Backtest period falls outside the supported day range.
    #[error(
        "backtest period must be between {min} and {max} days, got {days}",
        min = MIN_BACKTEST_DAYS,
        max = MAX_BACKTEST_DAYS
    )]
    BacktestPeriodOutOfRange {
        /// The rejected day count.
        days: u32,
    },
}
