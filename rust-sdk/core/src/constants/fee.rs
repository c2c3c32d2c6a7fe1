//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Fee tiers are expressed in hundredths of a basis point.
pub const FEE_TIER_MUL_VALUE: u32 = 1_000_000;

/// Fee tier to tick spacing of the concentrated liquidity pools.
pub const FEE_TIER_TICK_SPACINGS: [(u32, u16); 4] = [(100, 1), (500, 10), (3000, 60), (10000, 200)];

/// Swap fee of a constant-product pair in per mille (0.3%).
pub const CONSTANT_PRODUCT_FEE_PER_MILLE: u32 = 3;

/// Decimal places used when comparing the constant-product invariant and rounding quotes.
pub const QUOTE_PRECISION: i64 = 4;

/// Denominator of basis-point values such as the slippage tolerance.
pub const BPS_DENOMINATOR: u16 = 10_000;
