mod use_tx_pending;

pub use use_tx_pending::use_transaction_pending;
