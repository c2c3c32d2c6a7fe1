//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::Address;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::collections::HashMap;

/// Decimal places of a displayed LP token balance.
pub const LP_BALANCE_PRECISION: i64 = 8;

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpPositionSnapshot {
    #[serde_as(as = "DisplayFromStr")]
    pub liquidity_token_balance: BigDecimal,
}

/// LP position history of a wallet, keyed by pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpPositionData {
    pub positions: HashMap<Address, Vec<LpPositionSnapshot>>,
}

impl LpPositionData {
    /// The LP balance of the latest snapshot for a pair, zero when there is none.
    pub fn current_lp_tokens(&self, pair: &Address) -> BigDecimal {
        let balance = self
            .positions
            .get(pair)
            .and_then(|snapshots| snapshots.last())
            .map(|snapshot| snapshot.liquidity_token_balance.clone())
            .unwrap_or_else(BigDecimal::zero);
        balance.with_scale_round(LP_BALANCE_PRECISION, RoundingMode::HalfUp)
    }
}
