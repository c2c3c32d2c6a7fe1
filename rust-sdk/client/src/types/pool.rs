//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::{Address, U256};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolToken {
    pub id: Address,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DisplayFromStr")]
    pub decimals: u8,
}

/// A concentrated-liquidity pool as served by the pool data fetcher.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolOverview {
    pub id: Address,
    pub token0: PoolToken,
    pub token1: PoolToken,
    #[serde_as(as = "DisplayFromStr")]
    pub fee_tier: u32,
    #[serde_as(as = "DisplayFromStr")]
    pub sqrt_price: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub liquidity: u128,
    #[serde_as(as = "DisplayFromStr")]
    pub tick: i32,
    /// Amount of token0 one token1 buys.
    #[serde_as(as = "DisplayFromStr")]
    pub token0_price: BigDecimal,
}

impl PoolOverview {
    pub fn token_by_symbol(&self, symbol: &str) -> Option<&PoolToken> {
        [&self.token0, &self.token1].into_iter().find(|token| token.symbol == symbol)
    }
}
