//! Proportional-share arithmetic for redeeming a V1 liquidity position.
//!
//! A liquidity token holder owns `balance / total_supply` of each of the
//! exchange's two reserves. All math is exact integer arithmetic: the
//! product is widened to 512 bits before the floor division so reserves
//! anywhere in the `U256` range cannot overflow.

use alloy_primitives::{U256, U512};

/// The on-chain reads the share computation depends on.
///
/// Inputs that have not resolved yet are `None`; the corresponding output
/// degrades to zero so the view can render while loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareInputs {
    /// The caller's balance of the exchange's liquidity token.
    pub liquidity_token_amount: U256,
    /// Total supply of the liquidity token.
    pub total_supply: Option<U256>,
    /// The exchange's ETH reserve, in wei.
    pub eth_reserve: Option<U256>,
    /// The exchange's token reserve, in the token's base units.
    pub token_reserve: Option<U256>,
}

/// What the caller's position redeems for at current reserves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedeemableValues {
    pub eth_worth: U256,
    pub token_worth: U256,
}

/// `floor(reserve * amount / supply)`, or zero when the supply is zero.
pub fn floor_share(reserve: U256, amount: U256, supply: U256) -> U256 {
    if supply.is_zero() {
        return U256::ZERO;
    }
    let scaled = U512::from(reserve) * U512::from(amount);
    let quotient = scaled / U512::from(supply);
    // The quotient fits 256 bits whenever amount <= supply, which holds for
    // any balance of a token. Saturate rather than panic on bad RPC data.
    U256::try_from(quotient).unwrap_or(U256::MAX)
}

/// Computes the redeemable ETH and token amounts for the caller's share.
pub fn redeemable_values(inputs: &ShareInputs) -> RedeemableValues {
    let Some(supply) = inputs.total_supply else {
        return RedeemableValues::default();
    };

    let worth = |reserve: Option<U256>| match reserve {
        Some(reserve) => floor_share(reserve, inputs.liquidity_token_amount, supply),
        None => U256::ZERO,
    };

    RedeemableValues {
        eth_worth: worth(inputs.eth_reserve),
        token_worth: worth(inputs.token_reserve),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::uint;

    fn inputs(amount: u64, supply: u64, eth: u64, token: u64) -> ShareInputs {
        ShareInputs {
            liquidity_token_amount: U256::from(amount),
            total_supply: Some(U256::from(supply)),
            eth_reserve: Some(U256::from(eth)),
            token_reserve: Some(U256::from(token)),
        }
    }

    #[test]
    fn half_share_of_even_reserves() {
        let values = redeemable_values(&inputs(50, 100, 1000, 2000));

        assert_eq!(values.eth_worth, U256::from(500));
        assert_eq!(values.token_worth, U256::from(1000));
    }

    #[test]
    fn quotient_rounds_down() {
        // 10 * 1 / 3 = 3.33.. -> 3
        assert_eq!(
            floor_share(U256::from(10), U256::from(1), U256::from(3)),
            U256::from(3)
        );
        // 7 * 2 / 3 = 4.66.. -> 4
        assert_eq!(
            floor_share(U256::from(7), U256::from(2), U256::from(3)),
            U256::from(4)
        );
    }

    #[test]
    fn unknown_total_supply_degrades_to_zero() {
        let mut inputs = inputs(50, 100, 1000, 2000);
        inputs.total_supply = None;

        assert_eq!(redeemable_values(&inputs), RedeemableValues::default());
    }

    #[test]
    fn unresolved_reserves_degrade_independently() {
        let mut inputs = inputs(50, 100, 1000, 2000);
        inputs.token_reserve = None;
        let values = redeemable_values(&inputs);

        assert_eq!(values.eth_worth, U256::from(500));
        assert_eq!(values.token_worth, U256::ZERO);
    }

    #[test]
    fn zero_total_supply_is_not_a_division() {
        assert_eq!(
            floor_share(U256::from(1000), U256::from(50), U256::ZERO),
            U256::ZERO
        );
    }

    #[test]
    fn full_range_reserves_do_not_overflow() {
        // A full position against the largest possible reserve redeems the
        // whole reserve exactly.
        let supply = uint!(1_000_000_000_000_000_000_000_000_U256);
        assert_eq!(floor_share(U256::MAX, supply, supply), U256::MAX);
    }
}
