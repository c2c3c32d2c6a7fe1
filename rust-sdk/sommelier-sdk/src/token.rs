//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::LiquidityError;
use alloy_primitives::{
    utils::{format_units, parse_units},
    U256,
};
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::str::FromStr;

/// Flat protocol fee attached to an add-liquidity transaction, in ETH.
pub const ADD_LIQUIDITY_FEE: &str = "0.005";

/// Flat protocol fee attached to a remove-liquidity transaction, in ETH.
pub const REMOVE_LIQUIDITY_FEE: &str = "0.01";

/// Approvals cover this multiple of the amount being spent.
pub const APPROVAL_AMOUNT_MULTIPLIER: u32 = 100;

/// Gas limit of the LP token approval for the removal contract.
pub const REMOVE_APPROVAL_GAS_LIMIT: u64 = 200_000;

/// Gas limit of the divest transaction.
pub const REMOVE_LIQUIDITY_GAS_LIMIT: u64 = 500_000;

/// Parses a user-entered decimal amount. Returns `None` for anything that is not a number.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    BigDecimal::from_str(raw).ok()
}

/// Converts a decimal amount into base units, dropping digits beyond the token decimals.
pub fn to_base_units(amount: &BigDecimal, decimals: u8) -> Result<U256, LiquidityError> {
    if *amount < BigDecimal::zero() {
        return Err(LiquidityError::InvalidAmount(amount.to_string()));
    }
    let truncated = amount.with_scale_round(decimals as i64, RoundingMode::Down);
    parse_units(&truncated.to_plain_string(), decimals)
        .map(|units| units.get_absolute())
        .map_err(|err| LiquidityError::InvalidAmount(err.to_string()))
}

/// Converts base units into a decimal amount.
pub fn from_base_units(amount: U256, decimals: u8) -> Result<BigDecimal, LiquidityError> {
    let formatted = format_units(amount, decimals).map_err(|err| LiquidityError::InvalidAmount(err.to_string()))?;
    BigDecimal::from_str(&formatted).map_err(|err| LiquidityError::InvalidAmount(err.to_string()))
}

/// Converts a fixed decimal constant such as a protocol fee into wei.
pub(crate) fn native_units(amount: &str) -> Result<U256, LiquidityError> {
    parse_units(amount, "ether")
        .map(|units| units.get_absolute())
        .map_err(|err| LiquidityError::InvalidAmount(err.to_string()))
}
