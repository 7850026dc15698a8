//! This crate contains all shared fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
mod abi;
#[cfg(not(target_arch = "wasm32"))]
mod block_feed;
pub mod block_info;
pub mod exchange;
pub mod share;
pub mod token;

use alloy_primitives::{Address, B256, U256};
use dioxus::prelude::*;

use block_info::BlockInfo;
use exchange::WalletStatus;
use token::TokenInfo;

pub type ApiError = anyhow::Error;

/// Reports the chain and account the server-side wallet operates as, or
/// `None` when no wallet key is configured.
#[post("/api/wallet_status")]
pub async fn wallet_status() -> Result<Option<WalletStatus>, ApiError> {
    eth_rpc::wallet_status().await
}

/// Lists the blocks belonging to a batch, as served by the explorer backend.
#[post("/api/batch_blocks")]
pub async fn batch_blocks(batch_index: String) -> Result<Vec<BlockInfo>, ApiError> {
    let blocks = block_feed::fetch_batch_blocks(&batch_index).await?;
    dioxus_logger::tracing::info!("batch {}: {} blocks", batch_index, blocks.len());
    Ok(blocks)
}

/// Resolves the token paired with ETH in a V1 exchange.
///
/// Returns the zero address when the contract is not an exchange. Positive
/// results are cached server-side for the process lifetime; an exchange's
/// token never changes.
#[post("/api/exchange_token_address")]
pub async fn exchange_token_address(exchange: Address) -> Result<Address, ApiError> {
    eth_rpc::token_address(exchange).await
}

/// Fetches symbol and decimals for an ERC-20 token.
#[post("/api/token_info")]
pub async fn token_info(token: Address) -> Result<TokenInfo, ApiError> {
    eth_rpc::token_info(token).await
}

/// The ETH balance of an account or contract, in wei.
#[post("/api/eth_balance")]
pub async fn eth_balance(holder: Address) -> Result<U256, ApiError> {
    eth_rpc::eth_balance(holder).await
}

/// The ERC-20 balance of `holder` for `token`, in base units.
///
/// Also serves liquidity-token balances: a V1 exchange is its own
/// liquidity token, so pass the exchange address as `token`.
#[post("/api/token_balance")]
pub async fn token_balance(token: Address, holder: Address) -> Result<U256, ApiError> {
    eth_rpc::token_balance(token, holder).await
}

/// Total supply of an exchange's liquidity token.
#[post("/api/liquidity_total_supply")]
pub async fn liquidity_total_supply(exchange: Address) -> Result<U256, ApiError> {
    eth_rpc::liquidity_total_supply(exchange).await
}

/// Submits a `removeLiquidity` transaction for the full raw amount and
/// returns the transaction hash as soon as the node accepts it.
#[post("/api/remove_liquidity")]
pub async fn remove_liquidity(exchange: Address, amount_raw: String) -> Result<B256, ApiError> {
    let hash = eth_rpc::remove_liquidity(exchange, &amount_raw).await?;
    dioxus_logger::tracing::info!("remove_liquidity submitted: {}", hash);
    Ok(hash)
}

/// Whether a submitted transaction is still awaiting inclusion.
#[post("/api/transaction_pending")]
pub async fn transaction_pending(hash: B256) -> Result<bool, ApiError> {
    eth_rpc::transaction_pending(hash).await
}

#[cfg(not(target_arch = "wasm32"))]
mod eth_rpc {
    use std::collections::HashMap;
    use std::time::{SystemTime, UNIX_EPOCH};

    use alloy::network::EthereumWallet;
    use alloy::providers::{Provider, ProviderBuilder};
    use alloy::signers::local::PrivateKeySigner;
    use alloy_primitives::{Address, B256, U256};
    use tokio::sync::{OnceCell, RwLock};

    use super::abi::{IErc20, IV1Exchange};
    use super::exchange::{WalletStatus, DEADLINE_FROM_NOW_SECS};
    use super::token::TokenInfo;
    use super::ApiError;

    fn rpc_url() -> String {
        const DEFAULT_URL: &str = "http://localhost:8545";
        std::env::var("CHAIN_RPC_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
    }

    fn signer() -> Result<Option<PrivateKeySigner>, ApiError> {
        match std::env::var("WALLET_PRIVATE_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Some(key.trim().parse()?)),
            _ => Ok(None),
        }
    }

    fn provider() -> Result<impl Provider + Clone, ApiError> {
        // no caching for now. building an http provider is allocation-only,
        // and this way there is no stale connection to invalidate.
        let url: reqwest::Url = rpc_url().parse()?;
        Ok(ProviderBuilder::new().connect_http(url))
    }

    fn wallet_provider(signer: PrivateKeySigner) -> Result<impl Provider + Clone, ApiError> {
        let url: reqwest::Url = rpc_url().parse()?;
        Ok(ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url))
    }

    pub async fn wallet_status() -> Result<Option<WalletStatus>, ApiError> {
        let Some(signer) = signer()? else {
            return Ok(None);
        };
        let chain_id = provider()?.get_chain_id().await?;
        Ok(Some(WalletStatus {
            chain_id,
            address: signer.address(),
        }))
    }

    pub async fn token_address(exchange: Address) -> Result<Address, ApiError> {
        static CACHE: OnceCell<RwLock<HashMap<Address, Address>>> = OnceCell::const_new();

        let cache = CACHE
            .get_or_init(|| async { RwLock::new(HashMap::new()) })
            .await;

        if let Some(token) = cache.read().await.get(&exchange) {
            return Ok(*token);
        }

        let token = IV1Exchange::new(exchange, provider()?)
            .tokenAddress()
            .call()
            .await?;

        // The zero sentinel means "not an exchange"; don't pin it.
        if token != Address::ZERO {
            cache.write().await.insert(exchange, token);
        }
        Ok(token)
    }

    pub async fn token_info(token: Address) -> Result<TokenInfo, ApiError> {
        let erc20 = IErc20::new(token, provider()?);
        let symbol = erc20.symbol().call().await?;
        let decimals = erc20.decimals().call().await?;
        Ok(TokenInfo {
            address: token,
            symbol,
            decimals,
        })
    }

    pub async fn eth_balance(holder: Address) -> Result<U256, ApiError> {
        Ok(provider()?.get_balance(holder).await?)
    }

    pub async fn token_balance(token: Address, holder: Address) -> Result<U256, ApiError> {
        Ok(IErc20::new(token, provider()?)
            .balanceOf(holder)
            .call()
            .await?)
    }

    pub async fn liquidity_total_supply(exchange: Address) -> Result<U256, ApiError> {
        Ok(IV1Exchange::new(exchange, provider()?)
            .totalSupply()
            .call()
            .await?)
    }

    pub async fn remove_liquidity(exchange: Address, amount_raw: &str) -> Result<B256, ApiError> {
        let Some(signer) = signer()? else {
            anyhow::bail!("WALLET_PRIVATE_KEY is not configured");
        };
        let amount = U256::from_str_radix(amount_raw, 10)?;

        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let deadline = U256::from(now + DEADLINE_FROM_NOW_SECS);

        // min_eth / min_tokens of 1 wei are safe here: the caller is
        // removing its entire position, not trading against the pool.
        let min_out = U256::from(1);

        let exchange_contract = IV1Exchange::new(exchange, wallet_provider(signer)?);
        let pending = exchange_contract
            .removeLiquidity(amount, min_out, min_out, deadline)
            .send()
            .await?;

        Ok(*pending.tx_hash())
    }

    pub async fn transaction_pending(hash: B256) -> Result<bool, ApiError> {
        let receipt = provider()?.get_transaction_receipt(hash).await?;
        Ok(receipt.is_none())
    }
}
