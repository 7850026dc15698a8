pub mod batches;
pub mod blocks;
pub mod migrate;
pub mod remove_exchange;
