//! A component for displaying on-chain amounts without losing precision.

use api::token::TokenAmount;
use dioxus::prelude::*;

/// Renders a token amount with its currency code; the tooltip always carries
/// the lossless raw value in base units.
#[component]
pub fn Amount(amount: TokenAmount, code: String) -> Element {
    rsx! {
        span {
            title: "{amount.raw()} base units",
            "{amount} {code}"
        }
    }
}
