//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

/// The part of a concentrated-liquidity pool state the quotes need.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PoolFacade {
    pub tick_spacing: u16,
    pub fee_tier: u32,
    pub liquidity: u128,
    pub sqrt_price: U256,
    pub tick_current_index: i32,
}
