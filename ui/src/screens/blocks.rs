//=============================================================================
// File: src/screens/blocks.rs
//=============================================================================
use api::block_info::BlockInfo;
use dioxus::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Card;

/// A single row in the block table.
#[component]
fn BlockRow(block: BlockInfo) -> Element {
    let date = chrono::DateTime::from_timestamp(block.timestamp as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            td { strong { "{block.number}" } }
            td { "{block.tx_num}" }
            td { HashDisplay { value: block.hash.clone(), as_code: true } }
            td { "{date}" }
        }
    }
}

#[component]
pub fn BlocksScreen(batch_index: String, block_id: String) -> Element {
    let fetch_index = batch_index.clone();
    let blocks_resource =
        use_resource(move || {
            let batch_index = fetch_index.clone();
            async move { api::batch_blocks(batch_index).await }
        });

    // Failures render the same as loading; the explorer models no error
    // state for this view. Diagnostics go to the console only.
    use_effect(move || {
        if let Some(Err(e)) = &*blocks_resource.read() {
            dioxus_logger::tracing::warn!("failed to load batch blocks: {}", e);
        }
    });

    rsx! {
        match &*blocks_resource.read() {
            Some(Ok(blocks)) => rsx! {
                Breadcrumbs {
                    batch_index: batch_index.clone(),
                    block_id: block_id.clone(),
                }
                Card {
                    table {
                        thead { tr {
                            th { "Block" }
                            th { "Transactions" }
                            th { "Hash" }
                            th { "Timestamp" }
                        }}
                        tbody {
                            {blocks.iter().map(|block| {
                                rsx! {
                                    BlockRow {
                                        key: "{block.number}",
                                        block: block.clone(),
                                    }
                                }
                            })}
                        }
                    }
                }
            },
            _ => rsx! {},
        }
    }
}
