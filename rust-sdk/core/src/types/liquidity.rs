//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct IncreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_max_a: u128,
    pub token_max_b: u128,
}
