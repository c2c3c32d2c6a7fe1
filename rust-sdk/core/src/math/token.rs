//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{try_into_u128, try_mul_div, CoreError, BPS_DENOMINATOR, INVALID_SLIPPAGE_TOLERANCE};
use ethnum::U256;

/// Get the maximum amount with a slippage tolerance, rounded up.
///
/// # Parameters
/// * `amount` - The amount
/// * `slippage_tolerance_bps` - The slippage tolerance in basis points
///
/// # Returns
/// * `u128` - The maximum amount
pub fn try_get_max_amount_with_slippage_tolerance(amount: u128, slippage_tolerance_bps: u16) -> Result<u128, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = U256::from(BPS_DENOMINATOR + slippage_tolerance_bps);
    let result = try_mul_div(amount.into(), numerator, U256::from(BPS_DENOMINATOR), true)?;
    try_into_u128(result)
}

/// Get the minimum amount with a slippage tolerance, rounded down.
///
/// # Parameters
/// * `amount` - The amount
/// * `slippage_tolerance_bps` - The slippage tolerance in basis points
///
/// # Returns
/// * `u128` - The minimum amount
pub fn try_get_min_amount_with_slippage_tolerance(amount: u128, slippage_tolerance_bps: u16) -> Result<u128, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = U256::from(BPS_DENOMINATOR - slippage_tolerance_bps);
    let result = try_mul_div(amount.into(), numerator, U256::from(BPS_DENOMINATOR), false)?;
    try_into_u128(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 100, 0)]
    #[case(10_000, 100, 10_100)]
    #[case(10_001, 100, 10_102)]
    #[case(10_000, 0, 10_000)]
    #[case(10_000, 10_000, 20_000)]
    fn test_max_amount_with_slippage(#[case] amount: u128, #[case] bps: u16, #[case] expected: u128) {
        assert_eq!(try_get_max_amount_with_slippage_tolerance(amount, bps), Ok(expected));
    }

    #[rstest]
    #[case(0, 100, 0)]
    #[case(10_000, 100, 9_900)]
    #[case(10_001, 100, 9_900)]
    #[case(10_000, 10_000, 0)]
    fn test_min_amount_with_slippage(#[case] amount: u128, #[case] bps: u16, #[case] expected: u128) {
        assert_eq!(try_get_min_amount_with_slippage_tolerance(amount, bps), Ok(expected));
    }

    #[test]
    fn test_invalid_slippage() {
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1, 10_001), Err(INVALID_SLIPPAGE_TOLERANCE));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1, 10_001), Err(INVALID_SLIPPAGE_TOLERANCE));
    }
}
