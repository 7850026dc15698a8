//! The block record served by the rollup explorer backend.

use serde::{Deserialize, Serialize};

/// One block inside a batch, as reported by the explorer API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub number: u64,
    pub hash: String,
    /// Number of transactions included in the block.
    pub tx_num: u64,
    /// Unix timestamp of the block, in seconds.
    #[serde(rename = "block_timestamp")]
    pub timestamp: u64,
}
