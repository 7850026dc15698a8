//! Block-feed providers for the rollup explorer backend.

use serde::Deserialize;

use crate::block_info::BlockInfo;
use crate::ApiError;

/// A service that can list the blocks belonging to a batch.
pub trait BlockFeed {
    /// Fetches the blocks of the given batch. No staleness policy: every
    /// call hits the backend.
    async fn batch_blocks(&self, batch_index: &str) -> Result<Vec<BlockInfo>, ApiError>;
}

/// Fetches the blocks of a batch from the configured explorer backend.
pub async fn fetch_batch_blocks(batch_index: &str) -> Result<Vec<BlockInfo>, ApiError> {
    RollupScanApi.batch_blocks(batch_index).await
}

/// The JSON envelope the explorer wraps block lists in.
#[derive(Deserialize, Debug)]
struct BlocksResponse {
    blocks: Vec<BlockInfo>,
}

/// The rollup explorer's REST API.
pub struct RollupScanApi;

impl RollupScanApi {
    fn base_url() -> String {
        const DEFAULT_URL: &str = "http://localhost:8560/api";
        std::env::var("EXPLORER_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
    }
}

impl BlockFeed for RollupScanApi {
    async fn batch_blocks(&self, batch_index: &str) -> Result<Vec<BlockInfo>, ApiError> {
        let url = format!("{}/blocks?batch_index={}", Self::base_url(), batch_index);

        let client = reqwest::Client::new();
        let resp = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<BlocksResponse>()
            .await?;

        Ok(resp.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_explorer_envelope() {
        let body = r#"{
            "blocks": [
                {
                    "number": 1423,
                    "hash": "0x9b5f4e2c8a0d1b7f3e6a5c4d2b1a0f9e8d7c6b5a4e3d2c1b0a9f8e7d6c5b4a3f",
                    "tx_num": 12,
                    "block_timestamp": 1678886400
                },
                {
                    "number": 1424,
                    "hash": "0x1aa0cc33bb55dd77ee99ff00112233445566778899aabbccddeeff0011223344",
                    "tx_num": 0,
                    "block_timestamp": 1678886412
                }
            ]
        }"#;

        let resp: BlocksResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.blocks.len(), 2);
        assert_eq!(resp.blocks[0].number, 1423);
        assert_eq!(resp.blocks[1].tx_num, 0);
        assert_eq!(resp.blocks[1].timestamp, 1678886412);
    }
}
