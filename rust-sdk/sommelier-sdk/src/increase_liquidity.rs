//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    get_network_contracts, native_units, parse_amount, read_config, to_base_units, transaction_config, LiquidityError, SelectionState, TokenEntry,
    ADD_LIQUIDITY_FEE, APPROVAL_AMOUNT_MULTIPLIER, DEADLINE_OFFSET_SECONDS, SLIPPAGE_TOLERANCE_BPS,
};
use alloy_primitives::{TxHash, U256};
use alloy_sol_types::SolCall;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use log::{debug, warn};
use sommelier_client::{
    gas_price_to_wei, mint_params, IAddLiquidityV3, MarketIndicators, PoolOverview, Sentiment, IERC20, BOLLINGER_EMA_NORMAL_BAND, NATIVE_TOKEN_DECIMALS,
    NATIVE_TOKEN_SYMBOL, WRAPPED_NATIVE_TOKEN_SYMBOL,
};
use sommelier_core::{
    align_tick_index, get_usable_tick_range, increase_liquidity_quote_by_amounts, order_tick_indexes, price_to_tick_index, split_single_token_amount,
    tick_index_to_price, IncreaseLiquidityQuote, PoolFacade, TokenSide,
};
use sommelier_tx_sender::{
    send_smart_transaction, wait_for_receipt, Notification, PendingTransactionSet, SmartTxConfig, TransactionError, TransactionNotifier, TransactionReceipt,
    TransactionRequest, WalletProvider,
};
use std::time::{SystemTime, UNIX_EPOCH};

pub const GAS_ESTIMATION_FAILED_MESSAGE: &str = "Could not estimate gas for this transaction. Check your parameters or try a different pool.";

/// The position range derived from the market indicator band of the selected sentiment.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBounds {
    /// The indicator band, token1 priced in token0.
    pub prices: [f64; 2],
    /// The aligned and sorted tick range.
    pub ticks: [i32; 2],
    /// The price of token0 in token1 at each tick of the range.
    pub ticks_from_price: [f64; 2],
    pub position: IncreaseLiquidityQuote,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddLiquidityResult {
    pub approvals: Vec<TxHash>,
    pub hash: TxHash,
    pub receipt: TransactionReceipt,
}

/// The state of an add-liquidity form for a Uniswap V3 pool.
///
/// Every change of the selection, the amounts, the sentiment or the indicators recomputes the
/// position bounds. `submit` then approves the pool tokens and mints the position.
#[derive(Clone, Debug)]
pub struct AddLiquidityWorkflow {
    pool: PoolOverview,
    selection: SelectionState,
    sentiment: Sentiment,
    indicators: Option<MarketIndicators>,
    pending_bounds: bool,
    bounds: Option<PriceBounds>,
    expected_amounts: [BigDecimal; 2],
    price_impact: Option<BigDecimal>,
    pending: PendingTransactionSet,
    pending_approval: bool,
}

impl AddLiquidityWorkflow {
    pub fn new(pool: PoolOverview) -> Self {
        let selection = SelectionState::new(&pool);
        Self {
            pool,
            selection,
            sentiment: Sentiment::default(),
            indicators: None,
            pending_bounds: true,
            bounds: None,
            expected_amounts: [BigDecimal::zero(), BigDecimal::zero()],
            price_impact: None,
            pending: PendingTransactionSet::default(),
            pending_approval: false,
        }
    }

    pub fn pool(&self) -> &PoolOverview {
        &self.pool
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn bounds(&self) -> Option<&PriceBounds> {
        self.bounds.as_ref()
    }

    pub fn is_bounds_pending(&self) -> bool {
        self.pending_bounds
    }

    /// Amounts of token0 and token1 the position is funded with, in decimal token units.
    pub fn expected_amounts(&self) -> &[BigDecimal; 2] {
        &self.expected_amounts
    }

    /// Percentage by which the token1 amount falls short of the token0 amount valued at the pool price.
    /// Only a single-token entry has a price impact.
    pub fn price_impact(&self) -> Option<&BigDecimal> {
        self.price_impact.as_ref()
    }

    pub fn pending(&self) -> &PendingTransactionSet {
        &self.pending
    }

    pub fn is_approval_pending(&self) -> bool {
        self.pending_approval
    }

    pub fn toggle_token(&mut self, symbol: &str) -> bool {
        let changed = self.selection.toggle_token(symbol);
        if changed {
            self.recompute_bounds();
        }
        changed
    }

    pub fn update_amount(&mut self, symbol: &str, amount: &str) {
        self.selection.update_amount(symbol, amount);
        self.recompute_bounds();
    }

    pub fn set_sentiment(&mut self, sentiment: Sentiment) {
        self.sentiment = sentiment;
        self.recompute_bounds();
    }

    pub fn set_indicators(&mut self, indicators: MarketIndicators) {
        self.indicators = Some(indicators);
        self.recompute_bounds();
    }

    /// Derives the position bounds and mint amounts from the current form.
    ///
    /// # Returns
    /// The current bounds. Without a derivation the bounds are cleared and marked pending, so a
    /// zero or unparsable amount never mints against the previous range.
    pub fn recompute_bounds(&mut self) -> Option<&PriceBounds> {
        match self.derive_bounds() {
            Ok(Some((bounds, expected_amounts))) => {
                self.price_impact = match self.selection.selected_entries().len() {
                    1 => single_token_price_impact(&expected_amounts, &self.pool.token0_price),
                    _ => None,
                };
                self.bounds = Some(bounds);
                self.expected_amounts = expected_amounts;
                self.pending_bounds = false;
            }
            Ok(None) => self.clear_bounds(),
            Err(err) => {
                warn!(target: "log", "Could not derive the position bounds for pool {}: {}", self.pool.id, err);
                self.clear_bounds();
            }
        }
        self.bounds.as_ref()
    }

    fn clear_bounds(&mut self) {
        self.bounds = None;
        self.expected_amounts = [BigDecimal::zero(), BigDecimal::zero()];
        self.price_impact = None;
        self.pending_bounds = true;
    }

    fn side_of(&self, entry: &TokenEntry) -> Option<TokenSide> {
        let symbol = if entry.is_native() { WRAPPED_NATIVE_TOKEN_SYMBOL } else { entry.symbol.as_str() };
        if self.pool.token0.symbol == symbol {
            Some(TokenSide::A)
        } else if self.pool.token1.symbol == symbol {
            Some(TokenSide::B)
        } else {
            None
        }
    }

    fn entry_amounts(&self) -> Result<Option<[BigDecimal; 2]>, LiquidityError> {
        match self.selection.selected_entries().as_slice() {
            [entry] => {
                let Some(amount) = parse_amount(&entry.amount).filter(|amount| !amount.is_zero()) else {
                    return Ok(None);
                };
                let Some(side) = self.side_of(entry) else {
                    warn!(target: "log", "{} has no side in pool {}", entry.symbol, self.pool.id);
                    return Ok(None);
                };
                let (amount_a, amount_b) = split_single_token_amount(&amount, side, &self.pool.token0_price)?;
                Ok(Some([amount_a, amount_b]))
            }
            [first, second] => {
                let mut amounts = [BigDecimal::zero(), BigDecimal::zero()];
                for entry in [first, second] {
                    let Some(amount) = parse_amount(&entry.amount) else {
                        return Ok(None);
                    };
                    match self.side_of(entry) {
                        Some(TokenSide::A) => amounts[0] = amount,
                        Some(TokenSide::B) => amounts[1] = amount,
                        None => return Err(LiquidityError::UnknownToken(entry.symbol.clone())),
                    }
                }
                Ok(Some(amounts))
            }
            _ => Ok(None),
        }
    }

    fn derive_bounds(&self) -> Result<Option<(PriceBounds, [BigDecimal; 2])>, LiquidityError> {
        let Some(expected_amounts) = self.entry_amounts()? else {
            return Ok(None);
        };
        let Some(indicator) = self.indicators.as_ref().and_then(|indicators| indicators.get(BOLLINGER_EMA_NORMAL_BAND)) else {
            return Ok(None);
        };

        let decimals_a = self.pool.token0.decimals;
        let decimals_b = self.pool.token1.decimals;
        let facade = PoolFacade::try_from(&self.pool)?;
        let band = indicator.bounds.band(self.sentiment);

        let tick_1 = align_tick_index(price_to_tick_index(1.0 / band[0], decimals_a, decimals_b)?, facade.tick_spacing)?;
        let tick_2 = align_tick_index(price_to_tick_index(1.0 / band[1], decimals_a, decimals_b)?, facade.tick_spacing)?;
        let mut range = order_tick_indexes(tick_1, tick_2);
        if range.tick_lower_index == range.tick_upper_index {
            let usable = get_usable_tick_range(facade.tick_spacing)?;
            if range.tick_upper_index < usable.tick_upper_index {
                range.tick_upper_index += facade.tick_spacing as i32;
            } else {
                range.tick_lower_index -= facade.tick_spacing as i32;
            }
        }

        let amount_a = base_amount(&expected_amounts[0], decimals_a)?;
        let amount_b = base_amount(&expected_amounts[1], decimals_b)?;
        let position = increase_liquidity_quote_by_amounts(
            facade,
            range.tick_lower_index,
            range.tick_upper_index,
            amount_a,
            amount_b,
            read_config(&SLIPPAGE_TOLERANCE_BPS),
        )?;

        let bounds = PriceBounds {
            prices: band,
            ticks: [range.tick_lower_index, range.tick_upper_index],
            ticks_from_price: [
                tick_index_to_price(range.tick_lower_index, decimals_a, decimals_b)?,
                tick_index_to_price(range.tick_upper_index, decimals_a, decimals_b)?,
            ],
            position,
        };
        debug!(target: "log", "Expected amounts {} {} / {} {}", expected_amounts[0], self.pool.token0.symbol, expected_amounts[1], self.pool.token1.symbol);
        debug!(target: "log", "Bounds {:?} for sentiment {:?}", bounds, self.sentiment);

        Ok(Some((bounds, expected_amounts)))
    }

    /// Approves the pool tokens and mints the position.
    ///
    /// # Arguments
    /// * `provider` - The connected wallet
    /// * `notifier` - Receives the progress of the transactions
    /// * `gas_price` - The selected gas price in gwei
    ///
    /// # Returns
    /// The approval hashes and the receipt of the mint transaction. A rejected mint is an error.
    pub async fn submit(
        &mut self,
        provider: &dyn WalletProvider,
        notifier: &dyn TransactionNotifier,
        gas_price: Option<f64>,
    ) -> Result<AddLiquidityResult, LiquidityError> {
        let gas_price = gas_price_to_wei(gas_price.ok_or(LiquidityError::GasPriceNotSelected)?)?;
        let chain_id = provider.chain_id().await?;
        let contract = get_network_contracts(chain_id)
            .and_then(|contracts| contracts.add_liquidity_v3)
            .ok_or(LiquidityError::ContractNotAvailable(chain_id))?;
        let bounds = self.bounds.clone().filter(|_| !self.pending_bounds).ok_or(LiquidityError::BoundsPending)?;
        let tx_config = transaction_config(gas_price);

        let mut value = native_units(ADD_LIQUIDITY_FEE)?;
        if let Some(native) = self.selection.entry(NATIVE_TOKEN_SYMBOL).filter(|entry| entry.selected) {
            let amount = parse_amount(&native.amount).filter(|amount| !amount.is_zero()).ok_or(LiquidityError::AmountNotEntered)?;
            value += to_base_units(&amount, NATIVE_TOKEN_DECIMALS)?;
        }

        let mut approvals = Vec::new();
        let tokens = [self.pool.token0.clone(), self.pool.token1.clone()];
        for (token, expected_amount) in tokens.iter().zip(self.expected_amounts.clone()) {
            if token.symbol == WRAPPED_NATIVE_TOKEN_SYMBOL && self.selection.is_native_only() {
                debug!(target: "log", "Skipping the {} approval, the position is funded with {}", token.symbol, NATIVE_TOKEN_SYMBOL);
                continue;
            }

            let amount = to_base_units(&expected_amount, token.decimals)? * U256::from(APPROVAL_AMOUNT_MULTIPLIER);
            let data = IERC20::approveCall { spender: contract, amount }.abi_encode();
            let hash = send_with_notification(provider, notifier, TransactionRequest::new(token.id, data), &tx_config).await?;

            self.pending_approval = true;
            self.pending.push_approval(hash);
            notifier.notify(Notification::Approving(hash));
            notifier.pending_changed(&self.pending);

            let receipt = wait_for_receipt(provider, hash, tx_config.timeout(), tx_config.interval()).await;
            self.pending.remove_approval(&hash);
            self.pending_approval = false;
            notifier.pending_changed(&self.pending);

            if !receipt?.is_success() {
                notifier.notify(Notification::Rejected(hash));
                return Err(LiquidityError::ApprovalFailed(hash));
            }
            approvals.push(hash);
        }

        let account = provider.account().await?;
        let deadline = SystemTime::now().duration_since(UNIX_EPOCH).map(|now| now.as_secs()).unwrap_or_default() + read_config(&DEADLINE_OFFSET_SECONDS);
        let params = mint_params(
            self.pool.token0.id,
            self.pool.token1.id,
            self.pool.fee_tier,
            bounds.position.tick_lower_index,
            bounds.position.tick_upper_index,
            U256::from(bounds.position.token_est_a),
            U256::from(bounds.position.token_est_b),
            account,
            deadline,
        )?;
        let data = if self.selection.is_native_only() {
            IAddLiquidityV3::addLiquidityEthForUniV3Call { tokenId: U256::ZERO, params }.abi_encode()
        } else {
            IAddLiquidityV3::addLiquidityForUniV3Call { tokenId: U256::ZERO, params }.abi_encode()
        };
        debug!(target: "log", "Minting {:?} on {} with value {}", bounds.position, contract, value);

        let tx = TransactionRequest::new(contract, data).with_value(value);
        let hash = send_with_notification(provider, notifier, tx, &tx_config).await?;
        self.pending.push_confirm(hash);
        notifier.notify(Notification::Confirming(hash));
        notifier.pending_changed(&self.pending);

        let receipt = wait_for_receipt(provider, hash, tx_config.timeout(), tx_config.interval()).await;
        self.pending.remove_confirm(&hash);
        notifier.pending_changed(&self.pending);
        let receipt = receipt?;

        if receipt.is_success() {
            notifier.notify(Notification::Confirmed(hash));
            Ok(AddLiquidityResult { approvals, hash, receipt })
        } else {
            notifier.notify(Notification::Rejected(hash));
            Err(LiquidityError::TransactionRejected(hash))
        }
    }
}

/// The single-token split values token1 at the pool price, so the impact only reflects the
/// rounding of the token1 amount to 8 decimals.
fn single_token_price_impact(expected_amounts: &[BigDecimal; 2], token0_price: &BigDecimal) -> Option<BigDecimal> {
    if token0_price.is_zero() {
        return None;
    }
    let expected_no_slippage = &expected_amounts[0] / token0_price;
    if expected_no_slippage.is_zero() {
        return None;
    }
    let expected = expected_amounts[1].with_scale_round(8, RoundingMode::HalfUp);
    Some((&expected_no_slippage - expected) / expected_no_slippage * BigDecimal::from(100))
}

fn base_amount(amount: &BigDecimal, decimals: u8) -> Result<u128, LiquidityError> {
    let units = to_base_units(amount, decimals)?;
    u128::try_from(units).map_err(|_| LiquidityError::InvalidAmount(amount.to_string()))
}

async fn send_with_notification(
    provider: &dyn WalletProvider,
    notifier: &dyn TransactionNotifier,
    tx: TransactionRequest,
    tx_config: &SmartTxConfig,
) -> Result<TxHash, LiquidityError> {
    match send_smart_transaction(provider, tx, tx_config).await {
        Ok(hash) => Ok(hash),
        Err(err @ TransactionError::GasEstimation(_)) => {
            notifier.notify(Notification::Error(GAS_ESTIMATION_FAILED_MESSAGE.to_string()));
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
