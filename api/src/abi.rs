//! Contract bindings for the V1 exchange and the ERC-20 standard.

use alloy::sol;

sol! {
    /// A legacy V1 exchange: an ETH/token pool whose liquidity token is the
    /// exchange contract itself.
    #[sol(rpc)]
    interface IV1Exchange {
        function tokenAddress() external view returns (address);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
        function removeLiquidity(
            uint256 amount,
            uint256 min_eth,
            uint256 min_tokens,
            uint256 deadline
        ) external returns (uint256, uint256);
    }

    #[sol(rpc)]
    interface IErc20 {
        function balanceOf(address account) external view returns (uint256);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}
