//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::{utils::format_units, Address, U256};
use bigdecimal::{BigDecimal, Zero};
use std::{collections::HashMap, str::FromStr};

/// Wallet balance of a token and its allowance towards the contract being used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletBalance {
    pub id: Address,
    pub symbol: String,
    pub decimals: u8,
    pub balance: U256,
    pub allowance: Option<U256>,
}

impl WalletBalance {
    /// The allowance in decimal token units, zero when unknown.
    pub fn allowance_units(&self) -> BigDecimal {
        self.allowance
            .and_then(|allowance| format_units(allowance, self.decimals).ok())
            .and_then(|formatted| BigDecimal::from_str(&formatted).ok())
            .unwrap_or_else(BigDecimal::zero)
    }
}

/// Balances of the connected wallet: the current LP token plus tokens keyed by symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletBalances {
    pub current_pair: Option<WalletBalance>,
    pub tokens: HashMap<String, WalletBalance>,
}
