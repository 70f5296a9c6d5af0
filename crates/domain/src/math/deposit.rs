use crate::errors::DomainError;
use crate::math::allocation::DepositRatio;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fiat deposit broken down into per-asset values and token quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositSplit {
    /// Fiat value allocated to the base asset.
    pub base_value: Decimal,
    /// Fiat value allocated to the quote asset.
    pub quote_value: Decimal,
    /// Base-asset token quantity (`base_value / current_price`).
    pub base_tokens: Decimal,
    /// Quote-asset token quantity; the quote asset is fiat-pegged, so this
    /// equals its fiat value.
    pub quote_tokens: Decimal,
}

/// Converts a fiat deposit into per-asset amounts at the given ratio.
///
/// `base_value + quote_value` reproduces the deposit exactly. A zero deposit
/// is valid and yields zero amounts.
///
/// # Errors
///
/// * [`DomainError::InvalidPrice`] if `current_price` is zero or negative.
/// * [`DomainError::InvalidAmount`] if `deposit_amount` is negative.
pub fn split_deposit(
    deposit_amount: Decimal,
    ratio: &DepositRatio,
    current_price: Price,
) -> Result<DepositSplit, DomainError> {
    if !current_price.is_positive() {
        return Err(DomainError::InvalidPrice);
    }
    if deposit_amount < Decimal::ZERO {
        return Err(DomainError::InvalidAmount);
    }

    let base_value = deposit_amount * ratio.base;
    let quote_value = deposit_amount * ratio.quote;

    Ok(DepositSplit {
        base_value,
        quote_value,
        base_tokens: base_value / current_price.value,
        quote_tokens: quote_value,
    })
}
