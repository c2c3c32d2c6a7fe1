//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::ClientError;
use alloy_primitives::{
    aliases::{I24, U24},
    Address, U256,
};
use alloy_sol_types::sol;

sol! {
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }

    /// Position parameters forwarded to the Uniswap V3 position manager.
    #[derive(Debug, PartialEq, Eq)]
    struct MintParams {
        address token0;
        address token1;
        uint24 fee;
        int24 tickLower;
        int24 tickUpper;
        uint256 amount0Desired;
        uint256 amount1Desired;
        uint256 amount0Min;
        uint256 amount1Min;
        address recipient;
        uint256 deadline;
    }

    interface IAddLiquidityV3 {
        function addLiquidityForUniV3(uint256 tokenId, MintParams params) external payable;
        function addLiquidityEthForUniV3(uint256 tokenId, MintParams params) external payable;
    }

    interface IRemoveLiquidity {
        function divestEthPairToToken(address pair, address exitToken, uint256 lpTokens) external payable;
    }
}

/// Builds the mint parameters of a new position. Minimum amounts are left at zero.
#[allow(clippy::too_many_arguments)]
pub fn mint_params(
    token0: Address,
    token1: Address,
    fee_tier: u32,
    tick_lower_index: i32,
    tick_upper_index: i32,
    amount0_desired: U256,
    amount1_desired: U256,
    recipient: Address,
    deadline: u64,
) -> Result<MintParams, ClientError> {
    Ok(MintParams {
        token0,
        token1,
        fee: U24::try_from(fee_tier).map_err(|_| ClientError::FeeTierOutOfRange(fee_tier))?,
        tickLower: I24::try_from(tick_lower_index).map_err(|_| ClientError::TickOutOfRange(tick_lower_index))?,
        tickUpper: I24::try_from(tick_upper_index).map_err(|_| ClientError::TickOutOfRange(tick_upper_index))?,
        amount0Desired: amount0_desired,
        amount1Desired: amount1_desired,
        amount0Min: U256::ZERO,
        amount1Min: U256::ZERO,
        recipient,
        deadline: U256::from(deadline),
    })
}
