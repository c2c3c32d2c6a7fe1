//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//
use crate::PositionStatus;

use ethnum::U256;

use super::{order_tick_indexes, tick_index_to_sqrt_price};

/// Check if a position is in range.
/// When a position is in range it is earning fees
///
/// # Parameters
/// - `current_sqrt_price` - The sqrt price of the pool (Q64.96)
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A boolean value indicating if the position is in range
pub fn is_position_in_range(current_sqrt_price: U256, tick_index_1: i32, tick_index_2: i32) -> bool {
    position_status(current_sqrt_price, tick_index_1, tick_index_2) == PositionStatus::PriceInRange
}

/// Calculate the status of a position
/// The status can be one of four values:
/// - InRange: The position is in range
/// - BelowRange: The position is below the range
/// - AboveRange: The position is above the range
/// - Invalid: The ticks are equal or outside the tick bounds
///
/// # Parameters
/// - `current_sqrt_price` - The sqrt price of the pool (Q64.96)
/// - `tick_index_1` - A i32 integer representing the first tick index of the position
/// - `tick_index_2` - A i32 integer representing the second tick index of the position
///
/// # Returns
/// - A PositionStatus enum value indicating the status of the position
pub fn position_status(current_sqrt_price: U256, tick_index_1: i32, tick_index_2: i32) -> PositionStatus {
    if tick_index_1 == tick_index_2 {
        return PositionStatus::Invalid;
    }
    let tick_range = order_tick_indexes(tick_index_1, tick_index_2);
    let (Ok(sqrt_price_lower), Ok(sqrt_price_upper)) =
        (tick_index_to_sqrt_price(tick_range.tick_lower_index), tick_index_to_sqrt_price(tick_range.tick_upper_index))
    else {
        return PositionStatus::Invalid;
    };

    if current_sqrt_price <= sqrt_price_lower {
        PositionStatus::PriceBelowRange
    } else if current_sqrt_price >= sqrt_price_upper {
        PositionStatus::PriceAboveRange
    } else {
        PositionStatus::PriceInRange
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MAX_TICK_INDEX, Q96};

    #[test]
    fn test_is_position_in_range() {
        assert!(is_position_in_range(Q96, -5, 5));
        assert!(!is_position_in_range(Q96, 0, 5));
        assert!(!is_position_in_range(Q96, -5, 0));
        assert!(!is_position_in_range(Q96, -5, -1));
        assert!(!is_position_in_range(Q96, 1, 5));
    }

    #[test]
    fn test_position_status() {
        let lower = tick_index_to_sqrt_price(-100).unwrap();
        let upper = tick_index_to_sqrt_price(100).unwrap();
        assert_eq!(position_status(lower - 1, -100, 100), PositionStatus::PriceBelowRange);
        assert_eq!(position_status(lower, -100, 100), PositionStatus::PriceBelowRange);
        assert_eq!(position_status(lower + 1, -100, 100), PositionStatus::PriceInRange);
        assert_eq!(position_status(Q96, 100, -100), PositionStatus::PriceInRange);
        assert_eq!(position_status(upper - 1, -100, 100), PositionStatus::PriceInRange);
        assert_eq!(position_status(upper, -100, 100), PositionStatus::PriceAboveRange);
        assert_eq!(position_status(upper + 1, -100, 100), PositionStatus::PriceAboveRange);
        assert_eq!(position_status(Q96, 100, 100), PositionStatus::Invalid);
        assert_eq!(position_status(Q96, 0, MAX_TICK_INDEX + 1), PositionStatus::Invalid);
    }
}
