//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::PoolToken;
use alloy_primitives::Address;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// A constant-product pair with reserves and supply in decimal token units.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniswapPair {
    pub id: Address,
    pub token0: PoolToken,
    pub token1: PoolToken,
    #[serde_as(as = "DisplayFromStr")]
    pub reserve0: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    pub reserve1: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    pub total_supply: BigDecimal,
    #[serde(rename = "trackedReserveETH")]
    #[serde_as(as = "DisplayFromStr")]
    pub tracked_reserve_eth: BigDecimal,
    #[serde(rename = "reserveUSD")]
    #[serde_as(as = "DisplayFromStr")]
    pub reserve_usd: BigDecimal,
}
