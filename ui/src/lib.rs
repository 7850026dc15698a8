// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod hooks;
mod removal_state;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::batches::BatchesScreen;
use screens::blocks::BlocksScreen;
use screens::migrate::MigrateScreen;
use screens::remove_exchange::RemoveExchangeScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Default)]
enum Screen {
    /// The explorer landing screen ("All results").
    #[default]
    Batches,
    /// The blocks committed in one batch.
    Blocks {
        batch_index: String,
        block_id: String,
    },
    /// The migration landing screen; also the fallback for invalid routes.
    Migrate,
    /// The removal flow for one V1 exchange.
    RemoveExchange { address: String },
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Batches => "Rollup Scan",
            Screen::Blocks { .. } => "Blocks",
            Screen::Migrate => "Migrate",
            Screen::RemoveExchange { .. } => "Remove V1 Liquidity",
        }
    }
}

/// The screens reachable from the tab bar. Parameterized screens highlight
/// their parent tab instead.
const ALL_SCREENS: [Screen; 2] = [Screen::Batches, Screen::Migrate];

fn tab_is_active(active: &Screen, tab: &Screen) -> bool {
    matches!(
        (active, tab),
        (Screen::Blocks { .. }, Screen::Batches)
            | (Screen::RemoveExchange { .. }, Screen::Migrate)
    ) || active == tab
}

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    let tabs = ALL_SCREENS.iter().map(|tab| {
        let is_active = tab_is_active(&active_screen.read(), tab);
        let name = tab.name();
        let target = tab.clone();
        rsx! {
            li {
                a {
                    href: "#",
                    class: if is_active { "active-tab" } else { "" },
                    "aria-current": if is_active { "page" } else { "false" },
                    onclick: move |event| {
                        event.prevent_default();
                        active_screen.set(target.clone());
                    },
                    "{name}"
                }
            }
        }
    });

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                {tabs}
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .app-main-container .content {
        flex: 1;
        padding: 0 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before the initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        // error stringified here: the bootstrap value must be serializable
        api::wallet_status().await.map_err(|e| e.to_string())
    })?;

    let body = match &*initial_data_future.read() {
        Some(Ok(wallet)) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*wallet),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let transactions_signal = use_signal(Vec::new);
    use_context_provider(|| AppStateMut {
        transactions: transactions_signal,
    });

    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Rollup Scan"
                                }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Batches => rsx! {
                            BatchesScreen {}
                        },
                        Screen::Blocks { batch_index, block_id } => {
                            let key = format!("{batch_index}-{block_id}");
                            rsx! {
                                BlocksScreen {
                                    key: "{key}",
                                    batch_index,
                                    block_id,
                                }
                            }
                        }
                        Screen::Migrate => rsx! {
                            MigrateScreen {}
                        },
                        Screen::RemoveExchange { address } => {
                            let key = address.clone();
                            rsx! {
                                RemoveExchangeScreen {
                                    key: "{key}",
                                    address,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
