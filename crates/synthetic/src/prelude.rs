//! Prelude module for convenient imports.
//!
//! ```rust
//! use lp_sim_synthetic::prelude::*;
//! ```

pub use crate::liquidity::{GaussianDensity, LiquidityPoint};
pub use crate::price_path::{DeterministicPricePath, PricePathGenerator, RandomWalk};
pub use crate::series::{MarketDataSet, PricePoint, VolumePoint};
pub use crate::volume::{ConstantVolume, SpikyVolume, VolumeModel};
