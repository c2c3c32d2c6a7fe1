//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    max_liquidity_for_amounts, order_tick_indexes, tick_index_to_sqrt_price, try_get_amount_delta_a, try_get_amount_delta_b,
    try_get_max_amount_with_slippage_tolerance, CoreError, IncreaseLiquidityQuote, PoolFacade, INVALID_PRICE, INVALID_TICK_RANGE,
};
use bigdecimal::{BigDecimal, Zero};

/// Side of a pool a token sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenSide {
    A,
    B,
}

/// Computes the liquidity a position between two ticks receives for the given token amounts,
/// and the amounts the pool takes to mint it.
///
/// # Parameters
/// - `pool`: The pool state.
/// - `tick_index_1`: One bound of the position.
/// - `tick_index_2`: The other bound of the position.
/// - `amount_a`: The available amount of token A in base units.
/// - `amount_b`: The available amount of token B in base units.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points, applied to the maximum amounts.
///
/// # Returns
/// An `IncreaseLiquidityQuote` with the liquidity delta and the mint amounts (rounded up).
pub fn increase_liquidity_quote_by_amounts(
    pool: PoolFacade,
    tick_index_1: i32,
    tick_index_2: i32,
    amount_a: u128,
    amount_b: u128,
    slippage_tolerance_bps: u16,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    if tick_range.tick_lower_index == tick_range.tick_upper_index {
        return Err(INVALID_TICK_RANGE);
    }

    let sqrt_price_lower = tick_index_to_sqrt_price(tick_range.tick_lower_index)?;
    let sqrt_price_upper = tick_index_to_sqrt_price(tick_range.tick_upper_index)?;

    let liquidity_delta = max_liquidity_for_amounts(pool.sqrt_price, sqrt_price_lower, sqrt_price_upper, amount_a, amount_b)?;

    let (token_est_a, token_est_b) = if pool.tick_current_index < tick_range.tick_lower_index {
        (try_get_amount_delta_a(sqrt_price_lower, sqrt_price_upper, liquidity_delta, true)?, 0)
    } else if pool.tick_current_index < tick_range.tick_upper_index {
        (
            try_get_amount_delta_a(pool.sqrt_price, sqrt_price_upper, liquidity_delta, true)?,
            try_get_amount_delta_b(sqrt_price_lower, pool.sqrt_price, liquidity_delta, true)?,
        )
    } else {
        (0, try_get_amount_delta_b(sqrt_price_lower, sqrt_price_upper, liquidity_delta, true)?)
    };

    Ok(IncreaseLiquidityQuote {
        liquidity_delta,
        tick_lower_index: tick_range.tick_lower_index,
        tick_upper_index: tick_range.tick_upper_index,
        token_est_a,
        token_est_b,
        token_max_a: try_get_max_amount_with_slippage_tolerance(token_est_a, slippage_tolerance_bps)?,
        token_max_b: try_get_max_amount_with_slippage_tolerance(token_est_b, slippage_tolerance_bps)?,
    })
}

/// Splits a single-token deposit into the amounts of both pool tokens.
/// Half of the deposit stays on its own side and the other side is derived from `token_a_price`,
/// the amount of token A one token B buys.
///
/// # Returns
/// `(amount_a, amount_b)` in decimal token units.
pub fn split_single_token_amount(amount: &BigDecimal, side: TokenSide, token_a_price: &BigDecimal) -> Result<(BigDecimal, BigDecimal), CoreError> {
    if token_a_price.is_zero() || *token_a_price < BigDecimal::zero() {
        return Err(INVALID_PRICE);
    }
    let half = amount / BigDecimal::from(2);
    Ok(match side {
        TokenSide::A => {
            let amount_b = &half / token_a_price;
            (half, amount_b)
        }
        TokenSide::B => {
            let amount_a = &half * token_a_price;
            (amount_a, half)
        }
    })
}
