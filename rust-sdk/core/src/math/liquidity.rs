//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{div_round_up, try_into_u128, try_mul_div, CoreError, ARITHMETIC_OVERFLOW, INVALID_TICK_RANGE, Q96, Q96_RESOLUTION};
use ethnum::U256;

fn sort_sqrt_prices(sqrt_price_1: U256, sqrt_price_2: U256) -> (U256, U256) {
    if sqrt_price_1 > sqrt_price_2 {
        (sqrt_price_2, sqrt_price_1)
    } else {
        (sqrt_price_1, sqrt_price_2)
    }
}

/// Calculate the liquidity obtainable for an amount of token A between two sqrt prices.
///
/// # Parameters
/// - `sqrt_price_1` - One bound of the range (Q64.96)
/// - `sqrt_price_2` - The other bound of the range (Q64.96)
/// - `amount_a` - The amount of token A
///
/// # Returns
/// - The liquidity `amount_a * lower * upper / (Q96 * (upper - lower))`, rounded down once
pub fn max_liquidity_for_amount_a(sqrt_price_1: U256, sqrt_price_2: U256, amount_a: u128) -> Result<u128, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = sort_sqrt_prices(sqrt_price_1, sqrt_price_2);
    if sqrt_price_lower == sqrt_price_upper {
        return Err(INVALID_TICK_RANGE);
    }
    let numerator = U256::from(amount_a).checked_mul(sqrt_price_lower).ok_or(ARITHMETIC_OVERFLOW)?;
    // floor(floor(x / a) / b) == floor(x / (a * b)) for positive integers
    let liquidity = try_mul_div(numerator, sqrt_price_upper, Q96, false)? / (sqrt_price_upper - sqrt_price_lower);
    try_into_u128(liquidity)
}

/// Calculate the liquidity obtainable for an amount of token B between two sqrt prices.
///
/// # Parameters
/// - `sqrt_price_1` - One bound of the range (Q64.96)
/// - `sqrt_price_2` - The other bound of the range (Q64.96)
/// - `amount_b` - The amount of token B
///
/// # Returns
/// - The liquidity, rounded down
pub fn max_liquidity_for_amount_b(sqrt_price_1: U256, sqrt_price_2: U256, amount_b: u128) -> Result<u128, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = sort_sqrt_prices(sqrt_price_1, sqrt_price_2);
    if sqrt_price_lower == sqrt_price_upper {
        return Err(INVALID_TICK_RANGE);
    }
    let liquidity = try_mul_div(amount_b.into(), Q96, sqrt_price_upper - sqrt_price_lower, false)?;
    try_into_u128(liquidity)
}

/// Calculate the maximum liquidity a position can receive for the given amounts of both tokens.
/// Below the range only token A counts, above it only token B, and inside it the scarcer side wins.
///
/// # Parameters
/// - `sqrt_price` - The current sqrt price of the pool (Q64.96)
/// - `sqrt_price_lower` - The sqrt price of the lower tick of the position
/// - `sqrt_price_upper` - The sqrt price of the upper tick of the position
/// - `amount_a` - The available amount of token A
/// - `amount_b` - The available amount of token B
///
/// # Returns
/// - The liquidity, rounded down
pub fn max_liquidity_for_amounts(
    sqrt_price: U256,
    sqrt_price_lower: U256,
    sqrt_price_upper: U256,
    amount_a: u128,
    amount_b: u128,
) -> Result<u128, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = sort_sqrt_prices(sqrt_price_lower, sqrt_price_upper);

    if sqrt_price <= sqrt_price_lower {
        max_liquidity_for_amount_a(sqrt_price_lower, sqrt_price_upper, amount_a)
    } else if sqrt_price < sqrt_price_upper {
        let liquidity_a = max_liquidity_for_amount_a(sqrt_price, sqrt_price_upper, amount_a)?;
        let liquidity_b = max_liquidity_for_amount_b(sqrt_price_lower, sqrt_price, amount_b)?;
        Ok(liquidity_a.min(liquidity_b))
    } else {
        max_liquidity_for_amount_b(sqrt_price_lower, sqrt_price_upper, amount_b)
    }
}

/// Calculate the amount of token A backing a liquidity between two sqrt prices.
///
/// # Parameters
/// - `sqrt_price_1` - One bound (Q64.96)
/// - `sqrt_price_2` - The other bound (Q64.96)
/// - `liquidity` - The liquidity
/// - `round_up` - Round the result up instead of down
///
/// # Returns
/// - The amount of token A
pub fn try_get_amount_delta_a(sqrt_price_1: U256, sqrt_price_2: U256, liquidity: u128, round_up: bool) -> Result<u128, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = sort_sqrt_prices(sqrt_price_1, sqrt_price_2);
    if sqrt_price_lower == U256::ZERO {
        return Err(INVALID_TICK_RANGE);
    }
    let numerator_1 = U256::from(liquidity) << Q96_RESOLUTION;
    let numerator_2 = sqrt_price_upper - sqrt_price_lower;

    let amount = if round_up {
        div_round_up(try_mul_div(numerator_1, numerator_2, sqrt_price_upper, true)?, sqrt_price_lower)?
    } else {
        try_mul_div(numerator_1, numerator_2, sqrt_price_upper, false)? / sqrt_price_lower
    };
    try_into_u128(amount)
}

/// Calculate the amount of token B backing a liquidity between two sqrt prices.
///
/// # Parameters
/// - `sqrt_price_1` - One bound (Q64.96)
/// - `sqrt_price_2` - The other bound (Q64.96)
/// - `liquidity` - The liquidity
/// - `round_up` - Round the result up instead of down
///
/// # Returns
/// - The amount of token B
pub fn try_get_amount_delta_b(sqrt_price_1: U256, sqrt_price_2: U256, liquidity: u128, round_up: bool) -> Result<u128, CoreError> {
    let (sqrt_price_lower, sqrt_price_upper) = sort_sqrt_prices(sqrt_price_1, sqrt_price_2);
    let amount = try_mul_div(liquidity.into(), sqrt_price_upper - sqrt_price_lower, Q96, round_up)?;
    try_into_u128(amount)
}
