//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use sommelier_core::PairFacade;

use crate::UniswapPair;

impl From<&UniswapPair> for PairFacade {
    fn from(val: &UniswapPair) -> Self {
        PairFacade {
            reserve_a: val.reserve0.clone(),
            reserve_b: val.reserve1.clone(),
            total_supply: val.total_supply.clone(),
            tracked_reserve_native: val.tracked_reserve_eth.clone(),
        }
    }
}
