//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::Address;
use log::debug;
use sommelier_client::{PoolOverview, PoolToken, NATIVE_TOKEN_ADDRESS, NATIVE_TOKEN_DECIMALS, NATIVE_TOKEN_SYMBOL, WRAPPED_NATIVE_TOKEN_SYMBOL};
use std::collections::BTreeMap;

/// Maximum number of tokens funding one position.
pub const MAX_SELECTED_TOKENS: usize = 2;

/// A token the user can fund a position with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEntry {
    pub id: Address,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// The amount as typed by the user, not validated.
    pub amount: String,
    pub selected: bool,
}

impl TokenEntry {
    fn from_pool_token(token: &PoolToken) -> Self {
        Self {
            id: token.id,
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            decimals: token.decimals,
            amount: String::new(),
            selected: false,
        }
    }

    fn native() -> Self {
        Self {
            id: NATIVE_TOKEN_ADDRESS,
            symbol: NATIVE_TOKEN_SYMBOL.to_string(),
            name: "Ethereum".to_string(),
            decimals: NATIVE_TOKEN_DECIMALS,
            amount: String::new(),
            selected: true,
        }
    }

    pub fn is_native(&self) -> bool {
        self.symbol == NATIVE_TOKEN_SYMBOL
    }
}

/// The tokens offered for a pool and the ones currently selected, in selection order.
///
/// At most two tokens are selected at once, and the native currency is never selected together
/// with the pool's wrapped native token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    entries: BTreeMap<String, TokenEntry>,
    order: Vec<String>,
    wrapped_native_in_pool: bool,
}

impl SelectionState {
    /// Offers both pool tokens and the native currency, with the native currency selected.
    pub fn new(pool: &PoolOverview) -> Self {
        let mut entries = BTreeMap::new();
        for token in [&pool.token0, &pool.token1] {
            entries.insert(token.symbol.clone(), TokenEntry::from_pool_token(token));
        }
        let native = TokenEntry::native();
        let order = vec![native.symbol.clone()];
        entries.insert(native.symbol.clone(), native);

        Self {
            entries,
            order,
            wrapped_native_in_pool: pool.token0.symbol == WRAPPED_NATIVE_TOKEN_SYMBOL || pool.token1.symbol == WRAPPED_NATIVE_TOKEN_SYMBOL,
        }
    }

    /// Selects or deselects a token.
    ///
    /// # Returns
    /// Whether the selection changed. Unknown symbols, a third token and native/wrapped-native
    /// pairs are refused.
    pub fn toggle_token(&mut self, symbol: &str) -> bool {
        let Some(entry) = self.entries.get(symbol) else {
            return false;
        };

        if entry.selected {
            self.order.retain(|selected| selected != symbol);
        } else {
            if self.order.len() >= MAX_SELECTED_TOKENS || self.conflicts_with_selection(symbol) {
                debug!(target: "log", "Refusing to select {} next to {:?}", symbol, self.order);
                return false;
            }
            self.order.push(symbol.to_string());
        }

        if let Some(entry) = self.entries.get_mut(symbol) {
            entry.selected = !entry.selected;
        }
        true
    }

    fn conflicts_with_selection(&self, symbol: &str) -> bool {
        if !self.wrapped_native_in_pool {
            return false;
        }
        let counterpart = match symbol {
            NATIVE_TOKEN_SYMBOL => WRAPPED_NATIVE_TOKEN_SYMBOL,
            WRAPPED_NATIVE_TOKEN_SYMBOL => NATIVE_TOKEN_SYMBOL,
            _ => return false,
        };
        self.order.iter().any(|selected| selected == counterpart)
    }

    /// Stores the raw amount typed for a token. Unknown symbols are ignored.
    pub fn update_amount(&mut self, symbol: &str, amount: &str) {
        if let Some(entry) = self.entries.get_mut(symbol) {
            entry.amount = amount.to_string();
        }
    }

    pub fn entry(&self, symbol: &str) -> Option<&TokenEntry> {
        self.entries.get(symbol)
    }

    /// The selected tokens in selection order.
    pub fn selected_entries(&self) -> Vec<&TokenEntry> {
        self.order.iter().filter_map(|symbol| self.entries.get(symbol)).collect()
    }

    pub fn selected_symbols(&self) -> &[String] {
        &self.order
    }

    pub fn is_selected(&self, symbol: &str) -> bool {
        self.entries.get(symbol).is_some_and(|entry| entry.selected)
    }

    /// Whether the native currency is the only token funding the position.
    pub fn is_native_only(&self) -> bool {
        matches!(self.order.as_slice(), [only] if only == NATIVE_TOKEN_SYMBOL)
    }

    pub fn wrapped_native_in_pool(&self) -> bool {
        self.wrapped_native_in_pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::weth_usdc_pool;

    #[test]
    fn test_native_selected_by_default() {
        let selection = SelectionState::new(&weth_usdc_pool());
        assert_eq!(selection.selected_symbols(), ["ETH"]);
        assert!(selection.is_native_only());
        assert!(selection.wrapped_native_in_pool());
        assert_eq!(selection.entry("ETH").map(|e| e.id), Some(NATIVE_TOKEN_ADDRESS));
    }

    #[test]
    fn test_toggle_selected_token_removes_it() {
        let mut selection = SelectionState::new(&weth_usdc_pool());
        assert!(selection.toggle_token("ETH"));
        assert!(selection.selected_symbols().is_empty());
        assert!(!selection.is_selected("ETH"));
        assert!(!selection.is_native_only());
    }

    #[test]
    fn test_toggle_refuses_third_token() {
        let mut selection = SelectionState::new(&weth_usdc_pool());
        assert!(selection.toggle_token("ETH"));
        assert!(selection.toggle_token("USDC"));
        assert!(selection.toggle_token("WETH"));
        assert_eq!(selection.selected_symbols(), ["USDC", "WETH"]);

        assert!(!selection.toggle_token("ETH"));
        assert_eq!(selection.selected_symbols(), ["USDC", "WETH"]);
        assert!(!selection.is_selected("ETH"));
    }

    #[test]
    fn test_toggle_refuses_native_with_wrapped_native() {
        let mut selection = SelectionState::new(&weth_usdc_pool());
        assert!(!selection.toggle_token("WETH"));
        assert_eq!(selection.selected_symbols(), ["ETH"]);

        assert!(selection.toggle_token("USDC"));
        assert_eq!(selection.selected_symbols(), ["ETH", "USDC"]);
        assert!(!selection.is_native_only());
    }

    #[test]
    fn test_toggle_unknown_token() {
        let mut selection = SelectionState::new(&weth_usdc_pool());
        assert!(!selection.toggle_token("DAI"));
        assert_eq!(selection.selected_symbols(), ["ETH"]);
    }

    #[test]
    fn test_update_amount() {
        let mut selection = SelectionState::new(&weth_usdc_pool());
        selection.update_amount("USDC", "12.5");
        selection.update_amount("DAI", "1");
        assert_eq!(selection.entry("USDC").map(|e| e.amount.as_str()), Some("12.5"));
        assert!(selection.entry("DAI").is_none());
    }
}
