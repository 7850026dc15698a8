//! Defines the mutable, reactive state for the application's UI.

use alloy_primitives::B256;
use dioxus::prelude::*;

/// A transaction submitted from this session, kept for display elsewhere in
/// the app (the Migrate screen's recent-transactions card).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRecord {
    pub hash: B256,
    pub summary: String,
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Transactions submitted during this session, newest last.
    pub transactions: Signal<Vec<TransactionRecord>>,
}
