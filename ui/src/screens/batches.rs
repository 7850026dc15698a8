//=============================================================================
// File: src/screens/batches.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::Screen;

#[component]
pub fn BatchesScreen() -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    // Signals holding the values of the lookup inputs
    let mut batch_input = use_signal(String::new);
    let mut block_input = use_signal(String::new);
    let mut lookup_error = use_signal::<Option<String>>(|| None);

    rsx! {
        Card {
            h3 { "Rollup Scan" }
            p { "Look up the blocks committed in a batch." }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();

                    let batch = batch_input.read().trim().to_string();
                    let block = block_input.read().trim().to_string();
                    if batch.is_empty() {
                        return;
                    }
                    // Batch and block identifiers are numeric in the explorer.
                    if batch.parse::<u64>().is_err() || block.parse::<u64>().is_err() {
                        dioxus_logger::tracing::warn!(
                            "invalid batch/block lookup input: {} / {}", batch, block
                        );
                        lookup_error.set(Some("Batch and block must be numbers.".to_string()));
                        return;
                    }
                    lookup_error.set(None);
                    active_screen.set(Screen::Blocks {
                        batch_index: batch,
                        block_id: block,
                    });
                },
                div {
                    role: "group",
                    input {
                        r#type: "text",
                        placeholder: "Batch index",
                        oninput: move |event| batch_input.set(event.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Block number",
                        oninput: move |event| block_input.set(event.value()),
                    }
                    button {
                        r#type: "submit",
                        "Lookup"
                    }
                }
            }
            if let Some(err) = lookup_error() {
                small { style: "color: var(--pico-color-red-500);", "{err}" }
            }
        }
    }
}
