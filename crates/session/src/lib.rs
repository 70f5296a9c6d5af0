//! Session state for the position simulator.
//!
//! One logical actor (the user) drives one sequential stream of state
//! transitions; there is no concurrency, no caching, and no persistence.
//! Derived values are recomputed from scratch on every read.

pub mod config;
pub mod state;
pub mod view;

pub use config::SessionConfig;
pub use state::SessionState;
pub use view::PositionView;
