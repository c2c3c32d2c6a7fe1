//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

/// The minimum tick index.
pub const MIN_TICK_INDEX: i32 = -887272;

/// The maximum tick index.
pub const MAX_TICK_INDEX: i32 = 887272;

/// The sqrt price (Q64.96) at `MIN_TICK_INDEX`.
pub const MIN_SQRT_PRICE: U256 = U256::from_words(0, 4295128739);

/// The sqrt price (Q64.96) at `MAX_TICK_INDEX`.
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_PRICE: U256 = U256::from_words(0xfffd8963, 0xefd1fc6a_50648849_5d951d52_63988d26);

/// Fixed point resolution of sqrt prices.
pub const Q96_RESOLUTION: u32 = 96;

/// 2^96 as a U256.
pub const Q96: U256 = U256::from_words(0, 1 << 96);
