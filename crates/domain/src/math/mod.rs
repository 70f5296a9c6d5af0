pub mod allocation;
pub mod deposit;

pub use allocation::DepositRatio;
pub use deposit::{DepositSplit, split_deposit};
