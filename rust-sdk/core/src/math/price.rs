//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{sqrt_price_to_tick_index, tick_index_to_sqrt_price, CoreError, INVALID_PRICE, MAX_SQRT_PRICE, MIN_SQRT_PRICE};
use ethnum::{AsU256, U256};
use libm::{pow, sqrt};

const Q96_F64: f64 = 79228162514264337593543950336.0;

/// Convert a price into a sqrt priceX96
/// IMPORTANT: floating point operations can reduce the precision of the result.
/// Make sure to do these operations last and not to use the result for further calculations.
///
/// # Parameters
/// * `price` - The price of token A denominated in token B
/// * `decimals_a` - The number of decimals of the base token
/// * `decimals_b` - The number of decimals of the quote token
///
/// # Returns
/// * `U256` - The sqrt priceX96
pub fn price_to_sqrt_price(price: f64, decimals_a: u8, decimals_b: u8) -> U256 {
    let power = pow(10f64, decimals_b as f64 - decimals_a as f64);
    (sqrt(price * power) * Q96_F64).as_u256()
}

/// Convert a sqrt priceX96 into a tick price
/// IMPORTANT: floating point operations can reduce the precision of the result.
/// Make sure to do these operations last and not to use the result for further calculations.
///
/// # Parameters
/// * `sqrt_price` - The sqrt priceX96
/// * `decimals_a` - The number of decimals of the base token
/// * `decimals_b` - The number of decimals of the quote token
///
/// # Returns
/// * `f64` - The decimal price of token A denominated in token B
pub fn sqrt_price_to_price(sqrt_price: U256, decimals_a: u8, decimals_b: u8) -> f64 {
    let power = pow(10f64, decimals_a as f64 - decimals_b as f64);
    let ratio = sqrt_price.as_f64() / Q96_F64;
    ratio * ratio * power
}

/// Convert a price into the closest tick index at or below it.
/// IMPORTANT: floating point operations can reduce the precision of the result.
///
/// # Parameters
/// * `price` - The price of token A denominated in token B
/// * `decimals_a` - The number of decimals of the base token
/// * `decimals_b` - The number of decimals of the quote token
///
/// # Returns
/// * `i32` - The tick index, or an error if the price is not a positive finite number
pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> Result<i32, CoreError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(INVALID_PRICE);
    }
    let sqrt_price = price_to_sqrt_price(price, decimals_a, decimals_b).clamp(MIN_SQRT_PRICE, MAX_SQRT_PRICE - U256::ONE);
    sqrt_price_to_tick_index(sqrt_price)
}

/// Convert a tick index into a price
/// IMPORTANT: floating point operations can reduce the precision of the result.
/// Make sure to do these operations last and not to use the result for further calculations.
///
/// # Parameters
/// * `tick_index` - The tick index
/// * `decimals_a` - The number of decimals of the base token
/// * `decimals_b` - The number of decimals of the quote token
///
/// # Returns
/// * `f64` - The decimal price of token A denominated in token B
pub fn tick_index_to_price(tick_index: i32, decimals_a: u8, decimals_b: u8) -> Result<f64, CoreError> {
    let sqrt_price = tick_index_to_sqrt_price(tick_index)?;
    Ok(sqrt_price_to_price(sqrt_price, decimals_a, decimals_b))
}
