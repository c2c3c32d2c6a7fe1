//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;
use sommelier_core::{get_tick_spacing, CoreError, PoolFacade};

use crate::PoolOverview;

impl TryFrom<&PoolOverview> for PoolFacade {
    type Error = CoreError;

    fn try_from(val: &PoolOverview) -> Result<Self, Self::Error> {
        Ok(PoolFacade {
            tick_spacing: get_tick_spacing(val.fee_tier)?,
            fee_tier: val.fee_tier,
            liquidity: val.liquidity,
            sqrt_price: U256::from_be_bytes(val.sqrt_price.to_be_bytes::<32>()),
            tick_current_index: val.tick,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PoolToken;
    use alloy_primitives::Address;
    use bigdecimal::BigDecimal;
    use sommelier_core::{Q96, INVALID_FEE_TIER};

    fn overview(fee_tier: u32) -> PoolOverview {
        let token = PoolToken {
            id: Address::ZERO,
            symbol: "T".to_string(),
            name: String::new(),
            decimals: 18,
        };
        PoolOverview {
            id: Address::ZERO,
            token0: token.clone(),
            token1: token,
            fee_tier,
            sqrt_price: alloy_primitives::U256::from(1u128 << 96),
            liquidity: 42,
            tick: 0,
            token0_price: BigDecimal::from(1),
        }
    }

    #[test]
    fn test_pool_facade_from_overview() {
        let facade = PoolFacade::try_from(&overview(3000)).unwrap();
        assert_eq!(facade.tick_spacing, 60);
        assert_eq!(facade.sqrt_price, Q96);
        assert_eq!(facade.liquidity, 42);
    }

    #[test]
    fn test_pool_facade_unknown_fee_tier() {
        assert_eq!(PoolFacade::try_from(&overview(1234)), Err(INVALID_FEE_TIER));
    }
}
