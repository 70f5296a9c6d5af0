use serde::{Deserialize, Serialize};
use std::fmt;

/// Display metadata for one side of the pair. No chain address, no balance;
/// the simulator never touches real tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            decimals,
        }
    }
}

/// The simulated pool's asset pair and fee tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Base asset (token A); its token quantity is fiat value divided by the
    /// current price.
    pub base: Token,
    /// Quote asset (token B); fiat-pegged, one token per fiat unit.
    pub quote: Token,
    /// Pool fee tier in basis points.
    pub fee_bps: u32,
}

impl TokenPair {
    pub fn new(base: Token, quote: Token, fee_bps: u32) -> Self {
        Self {
            base,
            quote,
            fee_bps,
        }
    }

    /// The default simulated pool: WETH/USDC at the 0.05% tier.
    pub fn weth_usdc() -> Self {
        Self::new(
            Token::new("WETH", "Wrapped Ether", 18),
            Token::new("USDC", "USD Coin", 6),
            5,
        )
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.base.symbol, self.quote.symbol)
    }
}
