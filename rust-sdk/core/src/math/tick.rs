//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    CoreError, TickRange, FEE_TIER_TICK_SPACINGS, INVALID_FEE_TIER, INVALID_TICK_SPACING, MAX_SQRT_PRICE, MAX_TICK_INDEX, MIN_SQRT_PRICE,
    MIN_TICK_INDEX, SQRT_PRICE_OUT_OF_BOUNDS, TICK_INDEX_OUT_OF_BOUNDS,
};
use ethnum::U256;

// 1 / sqrt(1.0001)^(2^i) in Q128.128 for i in 1..20.
const TICK_RATIOS_X128: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

/// Get the sqrt price (Q64.96) for a tick index.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick integer
///
/// # Returns
/// - The sqrt price as a U256, or an error if the tick is out of bounds
pub fn tick_index_to_sqrt_price(tick_index: i32) -> Result<U256, CoreError> {
    if !(MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index) {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }

    let abs_tick = tick_index.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(0xfffcb933bd6fad37aa2d162d1a594001u128)
    } else {
        U256::ONE << 128
    };

    for (mask, multiplier) in TICK_RATIOS_X128 {
        if abs_tick & mask != 0 {
            ratio = (ratio * U256::from(multiplier)) >> 128;
        }
    }

    if tick_index > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 to Q64.96, rounded up.
    let round_up = if ratio & U256::from(u32::MAX) == U256::ZERO { U256::ZERO } else { U256::ONE };
    Ok((ratio >> 32) + round_up)
}

/// Get the greatest tick index whose sqrt price is at or below the given sqrt price.
///
/// # Parameters
/// - `sqrt_price` - The Q64.96 sqrt price
///
/// # Returns
/// - The tick index, or an error if the sqrt price is outside of [MIN_SQRT_PRICE, MAX_SQRT_PRICE)
pub fn sqrt_price_to_tick_index(sqrt_price: U256) -> Result<i32, CoreError> {
    if sqrt_price < MIN_SQRT_PRICE || sqrt_price >= MAX_SQRT_PRICE {
        return Err(SQRT_PRICE_OUT_OF_BOUNDS);
    }

    let mut low = MIN_TICK_INDEX;
    let mut high = MAX_TICK_INDEX;
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if tick_index_to_sqrt_price(mid)? <= sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Get the tick spacing for a fee tier.
///
/// # Parameters
/// - `fee_tier` - The pool fee in hundredths of a basis point (e.g. 3000 = 0.3%)
///
/// # Returns
/// - The tick spacing of pools with this fee tier
pub fn get_tick_spacing(fee_tier: u32) -> Result<u16, CoreError> {
    FEE_TIER_TICK_SPACINGS
        .iter()
        .find(|(tier, _)| *tier == fee_tier)
        .map(|(_, spacing)| *spacing)
        .ok_or(INVALID_FEE_TIER)
}

/// Get the lowest and highest tick indexes usable with a tick spacing.
pub fn get_usable_tick_range(tick_spacing: u16) -> Result<TickRange, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let spacing = tick_spacing as i32;
    let max = MAX_TICK_INDEX / spacing * spacing;
    Ok(TickRange {
        tick_lower_index: -max,
        tick_upper_index: max,
    })
}

/// Align a tick index down to the nearest multiple of the tick spacing.
/// The result is clamped to the usable tick range.
///
/// # Parameters
/// - `tick_index` - The raw tick index
/// - `tick_spacing` - The pool tick spacing
///
/// # Returns
/// - The aligned tick index
pub fn align_tick_index(tick_index: i32, tick_spacing: u16) -> Result<i32, CoreError> {
    let usable = get_usable_tick_range(tick_spacing)?;
    let aligned = tick_index - tick_index.rem_euclid(tick_spacing as i32);
    Ok(aligned.clamp(usable.tick_lower_index, usable.tick_upper_index))
}

/// Order two tick indexes so that the lower one comes first.
pub fn order_tick_indexes(tick_index_1: i32, tick_index_2: i32) -> TickRange {
    if tick_index_1 < tick_index_2 {
        TickRange {
            tick_lower_index: tick_index_1,
            tick_upper_index: tick_index_2,
        }
    } else {
        TickRange {
            tick_lower_index: tick_index_2,
            tick_upper_index: tick_index_1,
        }
    }
}
