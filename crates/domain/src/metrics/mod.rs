pub mod fees;

pub use fees::{FeeProjection, HorizonFee, estimate_apr, project_fees};
