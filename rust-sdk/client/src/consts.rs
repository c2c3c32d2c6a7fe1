//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::{address, Address};

/// Placeholder address standing for the chain's native currency.
pub const NATIVE_TOKEN_ADDRESS: Address = address!("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

pub const NATIVE_TOKEN_SYMBOL: &str = "ETH";

pub const WRAPPED_NATIVE_TOKEN_SYMBOL: &str = "WETH";

pub const NATIVE_TOKEN_DECIMALS: u8 = 18;

/// Contract that divests a constant-product LP position into a single token.
pub const REMOVE_LIQUIDITY_ADDRESS: Address = address!("0x418915329226AE7fCcB20A2354BbbF0F6c22Bd92");

/// Decimals of the constant-product pair LP tokens.
pub const LP_TOKEN_DECIMALS: u8 = 18;

/// Market indicator whose bands drive the position bounds.
pub const BOLLINGER_EMA_NORMAL_BAND: &str = "bollingerEMANormalBand";
