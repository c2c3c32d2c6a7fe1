//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, ARITHMETIC_OVERFLOW, DIVISION_BY_ZERO};
use ethnum::U256;

/// Full width product of two U256 values, returned as (high, low) words.
fn full_mul(a: U256, b: U256) -> (U256, U256) {
    let (a_hi, a_lo) = a.into_words();
    let (b_hi, b_lo) = b.into_words();

    let p0 = U256::from(a_lo) * U256::from(b_lo);
    let p1 = U256::from(a_lo) * U256::from(b_hi);
    let p2 = U256::from(a_hi) * U256::from(b_lo);
    let p3 = U256::from(a_hi) * U256::from(b_hi);

    let (mid, mid_carry) = p1.overflowing_add(p2);
    let (lo, lo_carry) = p0.overflowing_add(mid << 128);

    let mut hi = p3 + (mid >> 128);
    if mid_carry {
        hi += U256::ONE << 128;
    }
    if lo_carry {
        hi += U256::ONE;
    }

    (hi, lo)
}

/// Computes `a * b / denominator` with a 512-bit intermediate product.
///
/// # Parameters
/// - `a`, `b` - The factors
/// - `denominator` - The divisor
/// - `round_up` - Round the result up if there is a remainder
///
/// # Returns
/// - The quotient, or an error if it does not fit in 256 bits
pub fn try_mul_div(a: U256, b: U256, denominator: U256, round_up: bool) -> Result<U256, CoreError> {
    if denominator == U256::ZERO {
        return Err(DIVISION_BY_ZERO);
    }

    let (hi, lo) = full_mul(a, b);

    let (quotient, remainder) = if hi == U256::ZERO {
        (lo / denominator, lo % denominator)
    } else {
        if hi >= denominator {
            return Err(ARITHMETIC_OVERFLOW);
        }

        // Shift-subtract long division; the running remainder is always below the denominator.
        let mut remainder = hi;
        let mut quotient = U256::ZERO;
        for i in (0..256u32).rev() {
            let overflow = remainder >> 255u32 == U256::ONE;
            remainder = (remainder << 1u32) | ((lo >> i) & U256::ONE);
            if overflow || remainder >= denominator {
                remainder = remainder.wrapping_sub(denominator);
                quotient |= U256::ONE << i;
            }
        }
        (quotient, remainder)
    };

    if round_up && remainder != U256::ZERO {
        quotient.checked_add(U256::ONE).ok_or(ARITHMETIC_OVERFLOW)
    } else {
        Ok(quotient)
    }
}

/// Divides and rounds the result up.
pub fn div_round_up(a: U256, b: U256) -> Result<U256, CoreError> {
    if b == U256::ZERO {
        return Err(DIVISION_BY_ZERO);
    }
    let quotient = a / b;
    if a % b == U256::ZERO {
        Ok(quotient)
    } else {
        Ok(quotient + U256::ONE)
    }
}

/// Narrows a U256 to u128.
pub fn try_into_u128(value: U256) -> Result<u128, CoreError> {
    let (hi, lo) = value.into_words();
    if hi != 0 {
        return Err(ARITHMETIC_OVERFLOW);
    }
    Ok(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_small() {
        let result = try_mul_div(U256::from(10u8), U256::from(10u8), U256::from(3u8), false).unwrap();
        assert_eq!(result, U256::from(33u8));
        let result = try_mul_div(U256::from(10u8), U256::from(10u8), U256::from(3u8), true).unwrap();
        assert_eq!(result, U256::from(34u8));
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        // (2^255 * 4) / 8 = 2^254, the product needs 258 bits.
        let a = U256::ONE << 255u32;
        let result = try_mul_div(a, U256::from(4u8), U256::from(8u8), false).unwrap();
        assert_eq!(result, U256::ONE << 254u32);
    }

    #[test]
    fn test_mul_div_max_values() {
        let result = try_mul_div(U256::MAX, U256::MAX, U256::MAX, false).unwrap();
        assert_eq!(result, U256::MAX);
    }

    #[test]
    fn test_mul_div_rounding_on_wide_product() {
        // (2^200 * 2^100 + 0) / (2^100 + 1) leaves a remainder.
        let a = U256::ONE << 200u32;
        let b = U256::ONE << 100u32;
        let d = (U256::ONE << 100u32) + U256::ONE;
        let down = try_mul_div(a, b, d, false).unwrap();
        let up = try_mul_div(a, b, d, true).unwrap();
        assert_eq!(up, down + U256::ONE);
    }

    #[test]
    fn test_mul_div_overflow() {
        let result = try_mul_div(U256::MAX, U256::from(2u8), U256::ONE, false);
        assert_eq!(result, Err(ARITHMETIC_OVERFLOW));
    }

    #[test]
    fn test_mul_div_by_zero() {
        let result = try_mul_div(U256::ONE, U256::ONE, U256::ZERO, false);
        assert_eq!(result, Err(DIVISION_BY_ZERO));
    }

    #[test]
    fn test_div_round_up() {
        assert_eq!(div_round_up(U256::from(9u8), U256::from(3u8)).unwrap(), U256::from(3u8));
        assert_eq!(div_round_up(U256::from(10u8), U256::from(3u8)).unwrap(), U256::from(4u8));
    }

    #[test]
    fn test_try_into_u128() {
        assert_eq!(try_into_u128(U256::from(u128::MAX)).unwrap(), u128::MAX);
        assert_eq!(try_into_u128(U256::ONE << 128u32), Err(ARITHMETIC_OVERFLOW));
    }
}
