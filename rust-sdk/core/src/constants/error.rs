//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

pub const INVALID_TICK_RANGE: CoreError = "Invalid tick range";

pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

pub const INVALID_FEE_TIER: CoreError = "Invalid fee tier";

pub const INVALID_PRICE: CoreError = "Invalid price";

pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

pub const DIVISION_BY_ZERO: CoreError = "Division by zero";

pub const AMOUNT_EXCEEDS_MAX_U128: CoreError = "Amount exceeds max u128";

pub const SQRT_PRICE_OUT_OF_BOUNDS: CoreError = "Sqrt price out of bounds";

pub const ZERO_TOTAL_SUPPLY: CoreError = "Pair total supply is zero";

pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";
