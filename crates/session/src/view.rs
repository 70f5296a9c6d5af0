use lp_sim_domain::math::allocation::DepositRatio;
use lp_sim_domain::math::deposit::DepositSplit;
use lp_sim_domain::metrics::fees::FeeProjection;
use lp_sim_domain::value_objects::percentage::Percentage;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs for one render, derived from the
/// session state in a single pass. Never cached; a fresh view reflects the
/// state at the moment it was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionView {
    /// Deposit split between the two assets.
    pub ratio: DepositRatio,
    /// Per-asset fiat values and token quantities.
    pub split: DepositSplit,
    /// Placeholder-backtest APR for the selected period.
    pub estimated_apr: Percentage,
    /// Fee projections at the fixed display horizons.
    pub fees: FeeProjection,
    /// Whether the current price sits inside the selected range.
    pub in_range: bool,
}
