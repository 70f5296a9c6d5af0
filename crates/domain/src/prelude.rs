//! Prelude module for convenient imports.
//!
//! ```rust
//! use lp_sim_domain::prelude::*;
//! ```

pub use crate::enums::{RangePreset, TimeWindow};
pub use crate::errors::DomainError;
pub use crate::math::allocation::DepositRatio;
pub use crate::math::deposit::{DepositSplit, split_deposit};
pub use crate::metrics::fees::{
    FeeProjection, HorizonFee, MAX_BACKTEST_DAYS, MIN_BACKTEST_DAYS, daily_fee, estimate_apr,
    project_fees,
};
pub use crate::token::{Token, TokenPair};
pub use crate::value_objects::percentage::Percentage;
pub use crate::value_objects::price::Price;
pub use crate::value_objects::price_range::PriceRange;
