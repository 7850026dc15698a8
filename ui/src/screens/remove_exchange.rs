//=============================================================================
// File: src/screens/remove_exchange.rs
//=============================================================================
use std::time::Duration;

use alloy_primitives::{Address, B256, U256};
use api::exchange;
use api::share::{redeemable_values, ShareInputs};
use api::token::{TokenAmount, TokenInfo, LIQUIDITY_TOKEN_DECIMALS};
use dioxus::prelude::*;

use crate::app_state_mut::{AppStateMut, TransactionRecord};
use crate::compat;
use crate::components::action_link::ActionLink;
use crate::components::amount::Amount;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, Card};
use crate::hooks::use_transaction_pending;
use crate::removal_state;
use crate::{AppState, Screen};

/// How often the caller's liquidity balance is re-read. The success state is
/// inferred from the balance dropping to zero, so it has to be observed.
const BALANCE_REFRESH: Duration = Duration::from_secs(8);

/// A labeled row inside the liquidity info card.
#[component]
fn InfoRow(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 0.25rem 0;",
            strong { "{label}:" }
            {children}
        }
    }
}

#[component]
fn PairRemoval(exchange: Address, token: TokenInfo, liquidity_raw: U256) -> Element {
    let total_supply =
        use_resource(move || async move { api::liquidity_total_supply(exchange).await });
    let eth_reserve = use_resource(move || async move { api::eth_balance(exchange).await });
    let token_address = token.address;
    let token_reserve =
        use_resource(move || async move { api::token_balance(token_address, exchange).await });

    let mut confirming = use_signal(|| false);
    let mut pending_hash = use_signal::<Option<B256>>(|| None);
    let is_removal_pending = use_transaction_pending(pending_hash);

    // Recomputed from current inputs on every render; unresolved reads
    // render as zero.
    let values = redeemable_values(&ShareInputs {
        liquidity_token_amount: liquidity_raw,
        total_supply: match &*total_supply.read() {
            Some(Ok(v)) => Some(*v),
            _ => None,
        },
        eth_reserve: match &*eth_reserve.read() {
            Some(Ok(v)) => Some(*v),
            _ => None,
        },
        token_reserve: match &*token_reserve.read() {
            Some(Ok(v)) => Some(*v),
            _ => None,
        },
    });

    let stage = removal_state::stage(
        confirming(),
        pending_hash.read().is_some(),
        is_removal_pending(),
        liquidity_raw.is_zero(),
    );

    let app_state_mut = use_context::<AppStateMut>();
    let symbol = token.symbol.clone();
    let remove = move |_| {
        if liquidity_raw.is_zero() {
            return;
        }
        // Optimistic: lock the button before the wallet call returns.
        confirming.set(true);
        let summary = format!("Remove {}/ETH V1 liquidity", symbol);
        spawn(async move {
            match api::remove_liquidity(exchange, liquidity_raw.to_string()).await {
                Ok(hash) => {
                    dioxus_logger::tracing::info!("liquidity removal pending: {}", hash);
                    let mut transactions = app_state_mut.transactions;
                    transactions.write().push(TransactionRecord { hash, summary });
                    pending_hash.set(Some(hash));
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("liquidity removal failed: {}", e);
                    confirming.set(false);
                }
            }
        });
    };

    let liquidity_amount = TokenAmount::new(liquidity_raw, LIQUIDITY_TOKEN_DECIMALS);
    let eth_worth = TokenAmount::ether(values.eth_worth);
    let token_worth = TokenAmount::new(values.token_worth, token.decimals);

    rsx! {
        p {
            "This tool will remove your V1 liquidity and send the underlying assets to your wallet."
        }
        Card {
            InfoRow {
                label: "Pool tokens".to_string(),
                Amount { amount: liquidity_amount, code: format!("V1-{}", token.symbol) }
            }
            InfoRow {
                label: "ETH worth".to_string(),
                Amount { amount: eth_worth, code: "ETH".to_string() }
            }
            InfoRow {
                label: format!("{} worth", token.symbol),
                Amount { amount: token_worth, code: token.symbol.clone() }
            }
            div {
                style: "display: flex; margin-top: 1rem;",
                Button {
                    disabled: stage.disables_button(liquidity_raw.is_zero()),
                    on_click: remove,
                    "{stage.button_label()}"
                }
            }
        }
        p {
            style: "text-align: center; color: var(--pico-muted-color);",
            "Your V1 {token.symbol}/ETH liquidity will be redeemed for underlying assets."
        }
    }
}

#[component]
pub fn RemoveExchangeScreen(address: String) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let wallet = use_context::<AppState>().wallet;

    // Format half of the route guard; the zero-address half runs below once
    // the token lookup resolves.
    let exchange = exchange::parse_exchange_address(&address).ok();

    let token_address = use_resource(move || async move {
        match exchange {
            // A malformed route never reaches the contract.
            Some(addr) => api::exchange_token_address(addr).await.map(Some),
            None => Ok(None),
        }
    });

    let token = use_resource(move || {
        let resolved = match &*token_address.read() {
            Some(Ok(Some(addr))) if *addr != Address::ZERO => Some(*addr),
            _ => None,
        };
        async move {
            match resolved {
                Some(addr) => api::token_info(addr).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let mut liquidity_resource = use_resource(move || async move {
        let (Some(exchange), Some(wallet)) = (exchange, wallet) else {
            return Ok(None);
        };
        api::token_balance(exchange, wallet.address).await.map(Some)
    });

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            compat::sleep(BALANCE_REFRESH).await;
            liquidity_resource.restart();
        }
    });

    // Redirect for invalid route params: malformed address, or an address
    // whose token lookup returns the zero sentinel.
    let route_address = address.clone();
    use_effect(move || {
        let resolved_zero = matches!(
            &*token_address.read(),
            Some(Ok(Some(addr))) if *addr == Address::ZERO
        );
        if exchange.is_none() || resolved_zero {
            dioxus_logger::tracing::error!(
                "invalid exchange address in route: {}",
                route_address
            );
            active_screen.set(Screen::Migrate);
        }
    });

    let Some(exchange) = exchange else {
        // the guard effect is redirecting; render nothing while it does
        return rsx! {};
    };

    let body = match (wallet, &*token.read(), &*liquidity_resource.read()) {
        (None, _, _) => rsx! {
            EmptyState { title: "You must connect an account.".to_string() }
        },
        (Some(_), Some(Ok(Some(token))), Some(Ok(Some(liquidity)))) => rsx! {
            PairRemoval {
                exchange,
                token: token.clone(),
                liquidity_raw: *liquidity,
            }
        },
        _ => rsx! {
            EmptyState { title: "Loading...".to_string() }
        },
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
            ActionLink {
                state: active_screen,
                to: Screen::Migrate,
                "← Back"
            }
            h3 {
                style: "margin-bottom: 0;",
                "Remove V1 Liquidity"
            }
            span {
                title: "Remove your V1 liquidity tokens.",
                style: "cursor: help; color: var(--pico-muted-color);",
                "?"
            }
        }
        {body}
    }
}
