//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use bigdecimal::BigDecimal;

/// Reserves and supply of a constant-product pair, in decimal token units.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PairFacade {
    pub reserve_a: BigDecimal,
    pub reserve_b: BigDecimal,
    pub total_supply: BigDecimal,
    /// Value of the pair reserves expressed in the native currency.
    pub tracked_reserve_native: BigDecimal,
}

/// Which asset a liquidity removal pays out in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitSide {
    TokenA,
    TokenB,
    /// The native currency of a pair that holds no wrapped native token.
    TrackedReserve,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantProductSwap {
    pub new_reserve_in: BigDecimal,
    pub new_reserve_out: BigDecimal,
    pub amount_out: BigDecimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalQuote {
    /// Share of the pair the burned LP tokens represent.
    pub share: BigDecimal,
    pub entitlement_a: BigDecimal,
    pub entitlement_b: BigDecimal,
    /// Amount received by swapping the other side into the exit asset.
    pub swap_amount_out: BigDecimal,
    /// The sale of the other side into the pair. `None` when the exit asset is not a pair token.
    pub swap: Option<ConstantProductSwap>,
    /// Total payout in the exit asset.
    pub amount: BigDecimal,
}
