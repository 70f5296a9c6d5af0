//! Synthetic market data for the position simulator.
//!
//! Everything here is mocked input standing in for a market-data/indexing
//! service: random-walk price histories, spiky volume series, and a
//! bell-curve liquidity density. The calculation core treats these series as
//! opaque, already-validated inputs; they never feed back into it.
//!
//! All generators take a seedable RNG so a dashboard render (or a test) can
//! be reproduced exactly.

pub mod liquidity;
pub mod prelude;
pub mod price_path;
pub mod series;
pub mod volume;
