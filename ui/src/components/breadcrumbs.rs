use dioxus::prelude::*;

use crate::components::action_link::ActionLink;
use crate::Screen;

/// The explorer's breadcrumb trail: All results → Batch N → Block M.
#[component]
pub fn Breadcrumbs(batch_index: String, block_id: String) -> Element {
    let active_screen = use_context::<Signal<Screen>>();

    rsx! {
        nav {
            "aria-label": "breadcrumb",
            style: "display: flex; align-items: center; gap: 0.5rem; font-weight: 600; margin-bottom: 1rem;",
            ActionLink {
                state: active_screen,
                to: Screen::Batches,
                "All results"
            }
            span { "›" }
            ActionLink {
                state: active_screen,
                to: Screen::Blocks {
                    batch_index: batch_index.clone(),
                    block_id: block_id.clone(),
                },
                "Batch {batch_index}"
            }
            span { "›" }
            span { "Block {block_id}" }
        }
    }
}
