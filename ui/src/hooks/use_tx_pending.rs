use std::time::Duration;

use alloy_primitives::B256;
use dioxus::prelude::*;

use crate::compat;

const POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Tracks whether the transaction behind `pending_hash` is still awaiting
/// inclusion.
///
/// Flips to `true` as soon as a hash is recorded, then follows the node's
/// view via a background poll. Reads `false` while no hash is set.
pub fn use_transaction_pending(pending_hash: Signal<Option<B256>>) -> Signal<bool> {
    let mut is_pending = use_signal(|| false);

    // Optimistic: a freshly recorded hash is pending until the poller says
    // otherwise.
    use_effect(move || {
        if pending_hash.read().is_some() {
            is_pending.set(true);
        }
    });

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let mut interval = compat::interval::Interval::new(POLL_INTERVAL);
        loop {
            interval.tick().await;
            let Some(hash) = *pending_hash.peek() else {
                continue;
            };
            match api::transaction_pending(hash).await {
                Ok(pending) => {
                    if *is_pending.peek() != pending {
                        is_pending.set(pending);
                    }
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("transaction status lookup failed: {}", e);
                }
            }
        }
    });

    is_pending
}
