//! Token metadata and a display type for raw on-chain amounts.

use std::fmt;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Decimals of a V1 exchange's liquidity token (fixed by the contract).
pub const LIQUIDITY_TOKEN_DECIMALS: u8 = 18;

/// Metadata for the ERC-20 asset paired with ETH in an exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

/// A raw on-chain integer amount together with its display decimals.
///
/// Formatting stays in integer arithmetic: the raw value is split with
/// div/rem against `10^decimals`, so the smallest unit is never lost the
/// way a float conversion would lose it. Trailing fractional zeros are
/// trimmed for display; the raw value is available via [`TokenAmount::raw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// An ETH amount in wei.
    pub fn ether(raw: U256) -> Self {
        Self::new(raw, 18)
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimals == 0 {
            return write!(f, "{}", self.raw);
        }

        let divisor = U256::from(10u64).pow(U256::from(self.decimals));
        let major = self.raw / divisor;
        let minor = self.raw % divisor;

        if minor.is_zero() {
            return write!(f, "{major}");
        }

        let minor = format!("{:0>width$}", minor.to_string(), width = self.decimals as usize);
        write!(f, "{}.{}", major, minor.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn formats_whole_amounts_without_a_fraction() {
        let amount = TokenAmount::ether(U256::from_str("5000000000000000000").unwrap());
        assert_eq!(amount.to_string(), "5");
    }

    #[test]
    fn formats_fractional_amounts_with_leading_zeros() {
        // 0.000001 ETH
        let amount = TokenAmount::ether(U256::from(1_000_000_000_000u64));
        assert_eq!(amount.to_string(), "0.000001");
    }

    #[test]
    fn trims_trailing_fraction_zeros() {
        let amount = TokenAmount::new(U256::from(1_234_500u64), 6);
        assert_eq!(amount.to_string(), "1.2345");
    }

    #[test]
    fn respects_token_decimals() {
        // USDC-style 6 decimals
        let amount = TokenAmount::new(U256::from(2_500_000u64), 6);
        assert_eq!(amount.to_string(), "2.5");

        let amount = TokenAmount::new(U256::from(25u64), 0);
        assert_eq!(amount.to_string(), "25");
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(TokenAmount::ether(U256::ZERO).to_string(), "0");
        assert!(TokenAmount::ether(U256::ZERO).is_zero());
    }
}
