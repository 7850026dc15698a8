//! V1 exchange domain types and route-parameter validation.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How far in the future a removal transaction's deadline is set.
pub const DEADLINE_FROM_NOW_SECS: u64 = 60 * 20;

/// The chain identity and account the server-side wallet signs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStatus {
    pub chain_id: u64,
    pub address: Address,
}

/// A route parameter that does not parse as an exchange address.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("not a valid exchange address")]
pub struct MalformedAddress;

/// Format-validates an exchange address taken from a route parameter.
///
/// This is only the format half of the guard; a well-formed address that
/// resolves to the zero token address is rejected by the caller once the
/// on-chain lookup returns.
pub fn parse_exchange_address(input: &str) -> Result<Address, MalformedAddress> {
    Address::from_str(input.trim()).map_err(|_| MalformedAddress)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXCHANGE: &str = "0x2157a7894439191e520825fe9399ab8655e0f708";

    #[test]
    fn accepts_hex_addresses_with_surrounding_whitespace() {
        let parsed = parse_exchange_address(&format!("  {EXCHANGE}\n")).unwrap();
        assert_eq!(parsed, Address::from_str(EXCHANGE).unwrap());
    }

    #[test]
    fn accepts_checksummed_addresses() {
        assert!(parse_exchange_address("0x2157A7894439191e520825fe9399aB8655E0f708").is_ok());
    }

    #[test]
    fn rejects_short_and_garbage_input() {
        assert_eq!(parse_exchange_address("0x2157a789"), Err(MalformedAddress));
        assert_eq!(parse_exchange_address("not-an-address"), Err(MalformedAddress));
        assert_eq!(parse_exchange_address(""), Err(MalformedAddress));
    }

    #[test]
    fn the_zero_address_is_well_formed() {
        // The zero sentinel passes the format check; it is rejected later by
        // the token-address lookup.
        let parsed = parse_exchange_address("0x0000000000000000000000000000000000000000");
        assert_eq!(parsed, Ok(Address::ZERO));
    }
}
