//=============================================================================
// File: src/screens/migrate.rs
//=============================================================================
use api::exchange;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Card;
use crate::Screen;

/// The migration landing screen. Also the redirect target for invalid
/// exchange routes.
#[component]
pub fn MigrateScreen() -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();
    let app_state_mut = use_context::<AppStateMut>();

    let mut address_input = use_signal(String::new);
    let mut address_error = use_signal::<Option<String>>(|| None);

    let transactions = app_state_mut.transactions.read();

    rsx! {
        Card {
            h3 { "Migrate V1 Liquidity" }
            p {
                "Enter the address of a V1 exchange you provided liquidity to. "
                "Removing your position sends the underlying ETH and tokens back to your wallet."
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();

                    let input = address_input.read().trim().to_string();
                    if input.is_empty() {
                        return;
                    }
                    match exchange::parse_exchange_address(&input) {
                        Ok(address) => {
                            address_error.set(None);
                            active_screen.set(Screen::RemoveExchange {
                                address: address.to_string(),
                            });
                        }
                        Err(e) => {
                            dioxus_logger::tracing::warn!(
                                "rejected exchange address input: {}", input
                            );
                            address_error.set(Some(e.to_string()));
                        }
                    }
                },
                div {
                    role: "group",
                    input {
                        r#type: "text",
                        placeholder: "Exchange address (0x…)",
                        oninput: move |event| address_input.set(event.value()),
                    }
                    button {
                        r#type: "submit",
                        "Open"
                    }
                }
            }
            if let Some(err) = address_error() {
                small { style: "color: var(--pico-color-red-500);", "{err}" }
            }
        }
        Card {
            h4 { "Recent Transactions" }
            if transactions.is_empty() {
                EmptyState {
                    title: "No transactions yet".to_string(),
                    description: "Transactions you submit will show up here.".to_string(),
                }
            } else {
                table {
                    tbody {
                        {transactions.iter().rev().map(|record| {
                            rsx! {
                                tr {
                                    key: "{record.hash}",
                                    td { "{record.summary}" }
                                    td {
                                        HashDisplay {
                                            value: record.hash.to_string(),
                                            as_code: true,
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
