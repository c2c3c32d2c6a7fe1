//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    from_base_units, native_units, parse_amount, read_config, to_base_units, transaction_config, LiquidityError, APPROVAL_AMOUNT_MULTIPLIER, REMOVE_APPROVAL_GAS_LIMIT,
    REMOVE_LIQUIDITY_CONTRACT, REMOVE_LIQUIDITY_FEE, REMOVE_LIQUIDITY_GAS_LIMIT,
};
use alloy_primitives::{Address, TxHash, U256};
use alloy_sol_types::SolCall;
use bigdecimal::{BigDecimal, Zero};
use log::{debug, warn};
use sommelier_client::{
    gas_price_to_wei, GasPriceLevel, GasPrices, IRemoveLiquidity, LpPositionData, UniswapPair, WalletBalance, WalletBalances, IERC20, LP_TOKEN_DECIMALS,
    NATIVE_TOKEN_ADDRESS, NATIVE_TOKEN_SYMBOL, WRAPPED_NATIVE_TOKEN_SYMBOL,
};
use sommelier_core::{remove_liquidity_quote, ExitSide, PairFacade, QUOTE_PRECISION};
use sommelier_tx_sender::{
    send_smart_transaction, wait_for_receipt, Notification, SmartTxConfig, TransactionError, TransactionNotifier, TransactionReceipt, TransactionRequest,
    WalletProvider,
};
use std::time::Duration;
use tokio::time::sleep;

/// Delay between a submitted removal and the form reset.
pub const SUBMITTED_RESET_DELAY: Duration = Duration::from_secs(1);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ApprovalState {
    #[default]
    Needed,
    Pending,
    Done,
}

/// What the remove-liquidity form lets the user do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RemoveLiquidityActionState {
    AwaitingGasPrices,
    Submitted,
    AmountNotEntered,
    InsufficientFunds,
    GasPriceNotSelected,
    NeedsApproval,
    WaitingApproval,
    NeedsSubmit,
    Unknown,
}

/// The state of a remove-liquidity form for a Uniswap V2 pair.
///
/// The LP tokens are divested into a single exit asset through the removal contract. The LP token
/// has to be approved for the removal contract first.
#[derive(Clone, Debug)]
pub struct RemoveLiquidityWorkflow {
    pair: UniswapPair,
    exit_token: String,
    exit_amount: Option<BigDecimal>,
    gas_prices: Option<GasPrices>,
    gas_price: Option<f64>,
    approval_state: ApprovalState,
    submitted: bool,
}

impl RemoveLiquidityWorkflow {
    pub fn new(pair: UniswapPair) -> Self {
        Self {
            pair,
            exit_token: NATIVE_TOKEN_SYMBOL.to_string(),
            exit_amount: Some(BigDecimal::zero()),
            gas_prices: None,
            gas_price: None,
            approval_state: ApprovalState::default(),
            submitted: false,
        }
    }

    pub fn pair(&self) -> &UniswapPair {
        &self.pair
    }

    pub fn exit_token(&self) -> &str {
        &self.exit_token
    }

    pub fn exit_amount(&self) -> Option<&BigDecimal> {
        self.exit_amount.as_ref()
    }

    pub fn gas_price(&self) -> Option<f64> {
        self.gas_price
    }

    pub fn approval_state(&self) -> ApprovalState {
        self.approval_state
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_exit_amount(&mut self, amount: BigDecimal) {
        self.exit_amount = Some(amount);
    }

    /// Stores a user-entered amount. Anything that is not a number clears it.
    pub fn set_exit_amount_str(&mut self, raw: &str) {
        self.exit_amount = parse_amount(raw);
    }

    /// Selects the exit asset. Only the native currency and tokens held in the wallet are accepted.
    pub fn set_exit_token(&mut self, symbol: &str, balances: &WalletBalances) -> bool {
        if symbol != NATIVE_TOKEN_SYMBOL && !balances.tokens.contains_key(symbol) {
            debug!(target: "log", "Ignoring exit token {} without a wallet balance", symbol);
            return false;
        }
        self.exit_token = symbol.to_string();
        true
    }

    /// Stores the gas price levels. A level still has to be selected.
    pub fn set_gas_prices(&mut self, gas_prices: GasPrices) {
        self.gas_prices = Some(gas_prices);
    }

    pub fn select_gas_price(&mut self, level: GasPriceLevel) {
        self.gas_price = self.gas_prices.map(|gas_prices| gas_prices.price(level));
    }

    fn amount_or_zero(&self) -> BigDecimal {
        self.exit_amount.clone().unwrap_or_else(BigDecimal::zero)
    }

    /// Derives the approval state from the LP token allowance of the removal contract.
    /// Nothing changes while the allowance is unknown.
    pub fn sync_allowance(&mut self, balance: &WalletBalance) {
        if balance.allowance.is_none() {
            return;
        }
        self.approval_state = if self.amount_or_zero() > balance.allowance_units() {
            ApprovalState::Needed
        } else {
            ApprovalState::Done
        };
    }

    /// Reads the allowance of the current LP token towards the removal contract, stores it on the
    /// balance and updates the approval state.
    ///
    /// # Returns
    /// The allowance in base units, or `None` when the wallet holds no LP token of this pair.
    pub async fn refresh_allowance(&mut self, provider: &dyn WalletProvider, balances: &mut WalletBalances) -> Result<Option<U256>, LiquidityError> {
        let Some(balance) = balances.current_pair.as_mut().filter(|balance| balance.id == self.pair.id) else {
            debug!(target: "log", "No LP token balance for pair {}", self.pair.id);
            return Ok(None);
        };

        let data = IERC20::allowanceCall {
            owner: provider.account().await?,
            spender: read_config(&REMOVE_LIQUIDITY_CONTRACT),
        }
        .abi_encode();
        let response = provider.call(&TransactionRequest::new(balance.id, data)).await?;
        let allowance =
            IERC20::allowanceCall::abi_decode_returns(&response).map_err(|err| TransactionError::InvalidResponse(format!("allowance of {}: {}", balance.id, err)))?;
        debug!(target: "log", "Allowance of {} {} for the removal contract", from_base_units(allowance, balance.decimals)?, balance.symbol);

        balance.allowance = Some(allowance);
        self.sync_allowance(balance);
        Ok(Some(allowance))
    }

    /// The LP token balance of the pair, with 8 decimals.
    pub fn current_lp_tokens(&self, position_data: &LpPositionData) -> String {
        position_data.current_lp_tokens(&self.pair.id).to_plain_string()
    }

    fn exit_side(&self) -> ExitSide {
        let is_exit = |symbol: &str| self.exit_token == symbol || (symbol == WRAPPED_NATIVE_TOKEN_SYMBOL && self.exit_token == NATIVE_TOKEN_SYMBOL);
        if is_exit(&self.pair.token0.symbol) {
            ExitSide::TokenA
        } else if is_exit(&self.pair.token1.symbol) {
            ExitSide::TokenB
        } else if self.exit_token == NATIVE_TOKEN_SYMBOL {
            ExitSide::TrackedReserve
        } else {
            ExitSide::Unknown
        }
    }

    /// The amount of the exit asset the entered LP tokens are worth, rounded to 4 decimals.
    /// Zero without position data.
    pub fn compute_expected_payout(&self, position_data: Option<&LpPositionData>) -> BigDecimal {
        let zero = BigDecimal::zero().with_scale(QUOTE_PRECISION);
        if position_data.is_none() {
            return zero;
        }

        match remove_liquidity_quote(&self.amount_or_zero(), &PairFacade::from(&self.pair), self.exit_side()) {
            Ok(quote) => {
                debug!(target: "log", "Expected payout {} {} for {:?}", quote.amount, self.exit_token, quote);
                quote.amount
            }
            Err(err) => {
                warn!(target: "log", "Could not quote the removal from pair {}: {}", self.pair.id, err);
                zero
            }
        }
    }

    pub fn action_state(&self, position_data: &LpPositionData) -> RemoveLiquidityActionState {
        let current_lp_tokens = position_data.current_lp_tokens(&self.pair.id);
        let amount = self.amount_or_zero();

        if self.gas_prices.is_none() {
            RemoveLiquidityActionState::AwaitingGasPrices
        } else if self.submitted {
            RemoveLiquidityActionState::Submitted
        } else if amount <= BigDecimal::zero() {
            RemoveLiquidityActionState::AmountNotEntered
        } else if amount > current_lp_tokens {
            RemoveLiquidityActionState::InsufficientFunds
        } else if self.gas_price.is_none() {
            RemoveLiquidityActionState::GasPriceNotSelected
        } else if self.approval_state == ApprovalState::Needed {
            RemoveLiquidityActionState::NeedsApproval
        } else if self.approval_state == ApprovalState::Pending {
            RemoveLiquidityActionState::WaitingApproval
        } else if amount > BigDecimal::zero() && amount <= current_lp_tokens {
            RemoveLiquidityActionState::NeedsSubmit
        } else {
            RemoveLiquidityActionState::Unknown
        }
    }

    /// Approves the removal contract to spend a hundred times the entered LP tokens.
    ///
    /// # Arguments
    /// * `provider` - The connected wallet
    /// * `notifier` - Receives the progress of the approval
    /// * `balance` - The wallet balance of the LP token
    pub async fn approve(&mut self, provider: &dyn WalletProvider, notifier: &dyn TransactionNotifier, balance: &WalletBalance) -> Result<TxHash, LiquidityError> {
        let gas_price = gas_price_to_wei(self.gas_price.ok_or(LiquidityError::GasPriceNotSelected)?)?;
        if balance.decimals == 0 {
            return Err(LiquidityError::MissingDecimals(balance.symbol.clone()));
        }

        let amount = self.amount_or_zero() * BigDecimal::from(APPROVAL_AMOUNT_MULTIPLIER);
        let data = IERC20::approveCall {
            spender: read_config(&REMOVE_LIQUIDITY_CONTRACT),
            amount: to_base_units(&amount, balance.decimals)?,
        }
        .abi_encode();
        let tx_config = SmartTxConfig {
            gas_limit: Some(REMOVE_APPROVAL_GAS_LIMIT),
            ..transaction_config(gas_price)
        };

        let hash = send_smart_transaction(provider, TransactionRequest::new(self.pair.id, data), &tx_config).await?;
        self.approval_state = ApprovalState::Pending;
        notifier.notify(Notification::Approving(hash));

        let receipt = match wait_for_receipt(provider, hash, tx_config.timeout(), tx_config.interval()).await {
            Ok(receipt) => receipt,
            Err(err) => {
                self.approval_state = ApprovalState::Needed;
                return Err(err.into());
            }
        };
        if !receipt.is_success() {
            self.approval_state = ApprovalState::Needed;
            notifier.notify(Notification::Rejected(hash));
            return Err(LiquidityError::ApprovalFailed(hash));
        }

        self.approval_state = ApprovalState::Done;
        Ok(hash)
    }

    fn exit_address(&self) -> Address {
        if self.exit_token == self.pair.token0.symbol {
            self.pair.token0.id
        } else if self.exit_token == self.pair.token1.symbol {
            self.pair.token1.id
        } else {
            NATIVE_TOKEN_ADDRESS
        }
    }

    /// Divests the entered LP tokens into the exit asset.
    ///
    /// Once the receipt is in, the form is reset after a one second delay and `on_done` is called.
    ///
    /// # Arguments
    /// * `provider` - The connected wallet
    /// * `notifier` - Receives the progress of the transaction
    /// * `position_data` - The LP positions of the wallet
    /// * `on_done` - Called after the reset
    pub async fn submit<F>(
        &mut self,
        provider: &dyn WalletProvider,
        notifier: &dyn TransactionNotifier,
        position_data: &LpPositionData,
        on_done: F,
    ) -> Result<TransactionReceipt, LiquidityError>
    where
        F: FnOnce(),
    {
        if !position_data.positions.contains_key(&self.pair.id) {
            return Err(LiquidityError::NoPosition);
        }
        let gas_price = gas_price_to_wei(self.gas_price.ok_or(LiquidityError::GasPriceNotSelected)?)?;
        let amount = self.exit_amount.clone().filter(|amount| *amount > BigDecimal::zero()).ok_or(LiquidityError::AmountNotEntered)?;
        if amount > position_data.current_lp_tokens(&self.pair.id) {
            return Err(LiquidityError::InsufficientFunds);
        }
        if self.approval_state != ApprovalState::Done {
            return Err(LiquidityError::NeedsApproval);
        }

        let data = IRemoveLiquidity::divestEthPairToTokenCall {
            pair: self.pair.id,
            exitToken: self.exit_address(),
            lpTokens: to_base_units(&amount, LP_TOKEN_DECIMALS)?,
        }
        .abi_encode();
        let tx = TransactionRequest::new(read_config(&REMOVE_LIQUIDITY_CONTRACT), data).with_value(native_units(REMOVE_LIQUIDITY_FEE)?);
        let tx_config = SmartTxConfig {
            gas_limit: Some(REMOVE_LIQUIDITY_GAS_LIMIT),
            ..transaction_config(gas_price)
        };
        debug!(target: "log", "Divesting {} LP tokens of {} into {}", amount, self.pair.id, self.exit_token);

        let hash = send_smart_transaction(provider, tx, &tx_config).await?;
        self.submitted = true;
        notifier.notify(Notification::Confirming(hash));

        let receipt = match wait_for_receipt(provider, hash, tx_config.timeout(), tx_config.interval()).await {
            Ok(receipt) => receipt,
            Err(err) => {
                self.submitted = false;
                return Err(err.into());
            }
        };
        if !receipt.is_success() {
            self.submitted = false;
            notifier.notify(Notification::Rejected(hash));
            return Err(LiquidityError::TransactionRejected(hash));
        }
        notifier.notify(Notification::Confirmed(hash));

        sleep(SUBMITTED_RESET_DELAY).await;
        self.submitted = false;
        self.reset_form();
        on_done();
        Ok(receipt)
    }

    fn reset_form(&mut self) {
        self.exit_token = NATIVE_TOKEN_SYMBOL.to_string();
        self.exit_amount = Some(BigDecimal::zero());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{lp_balance, position_data, usdc_weth_pair, RecordingNotifier, PAIR_ADDRESS, TEST_CHAIN_ID};
    use crate::{reset_configuration, DEFAULT_REMOVE_LIQUIDITY_CONTRACT};
    use alloy_primitives::U256;
    use rstest::rstest;
    use serial_test::serial;
    use sommelier_client::NATIVE_TOKEN_ADDRESS;
    use sommelier_tx_sender::MockWalletProvider;
    use std::cell::Cell;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn gas_prices() -> GasPrices {
        GasPrices {
            standard: 20.0,
            fast: 30.0,
            fastest: 40.0,
        }
    }

    fn ready_workflow(amount: &str) -> RemoveLiquidityWorkflow {
        let mut workflow = RemoveLiquidityWorkflow::new(usdc_weth_pair());
        workflow.set_gas_prices(gas_prices());
        workflow.select_gas_price(GasPriceLevel::Fast);
        workflow.set_exit_amount_str(amount);
        workflow
    }

    fn approved_workflow(amount: &str) -> RemoveLiquidityWorkflow {
        let mut workflow = ready_workflow(amount);
        workflow.approval_state = ApprovalState::Done;
        workflow
    }

    fn wallet_balances(allowance: Option<U256>) -> WalletBalances {
        WalletBalances {
            current_pair: Some(lp_balance(allowance)),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let workflow = RemoveLiquidityWorkflow::new(usdc_weth_pair());
        assert_eq!(workflow.exit_token(), "ETH");
        assert_eq!(workflow.exit_amount(), Some(&BigDecimal::zero()));
        assert_eq!(workflow.approval_state(), ApprovalState::Needed);
        assert!(!workflow.is_submitted());
        assert!(workflow.gas_price().is_none());
    }

    #[test]
    fn test_action_state_precedence() {
        let data = position_data("10");
        let mut workflow = RemoveLiquidityWorkflow::new(usdc_weth_pair());
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::AwaitingGasPrices);

        workflow.set_gas_prices(gas_prices());
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::AmountNotEntered);

        workflow.set_exit_amount_str("abc");
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::AmountNotEntered);

        workflow.set_exit_amount_str("50");
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::InsufficientFunds);

        workflow.set_exit_amount_str("5");
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::GasPriceNotSelected);

        workflow.select_gas_price(GasPriceLevel::Fastest);
        assert_eq!(workflow.gas_price(), Some(40.0));
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::NeedsApproval);

        workflow.approval_state = ApprovalState::Pending;
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::WaitingApproval);

        workflow.approval_state = ApprovalState::Done;
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::NeedsSubmit);

        workflow.submitted = true;
        assert_eq!(workflow.action_state(&data), RemoveLiquidityActionState::Submitted);
    }

    #[test]
    fn test_action_state_without_position() {
        let workflow = ready_workflow("1");
        assert_eq!(workflow.action_state(&LpPositionData::default()), RemoveLiquidityActionState::InsufficientFunds);
    }

    #[test]
    fn test_current_lp_tokens() {
        let workflow = RemoveLiquidityWorkflow::new(usdc_weth_pair());
        assert_eq!(workflow.current_lp_tokens(&position_data("10")), "10.00000000");
        assert_eq!(workflow.current_lp_tokens(&LpPositionData::default()), "0.00000000");
    }

    #[rstest]
    #[case(Some(1_000_000_000_000_000_000u128), "1", ApprovalState::Done)]
    #[case(Some(1_000_000_000_000_000_000u128), "1.5", ApprovalState::Needed)]
    #[case(None, "1.5", ApprovalState::Needed)]
    fn test_sync_allowance(#[case] allowance: Option<u128>, #[case] amount: &str, #[case] expected: ApprovalState) {
        let mut workflow = ready_workflow(amount);
        workflow.sync_allowance(&lp_balance(allowance.map(U256::from)));
        assert_eq!(workflow.approval_state(), expected);
    }

    #[test]
    fn test_sync_allowance_keeps_state_without_allowance() {
        let mut workflow = ready_workflow("1");
        workflow.approval_state = ApprovalState::Done;
        workflow.sync_allowance(&lp_balance(None));
        assert_eq!(workflow.approval_state(), ApprovalState::Done);
    }

    #[tokio::test]
    #[serial]
    async fn test_refresh_allowance() {
        reset_configuration().unwrap();
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let allowance = U256::from(3_000_000_000_000_000_000u128);
        provider.set_call_result(PAIR_ADDRESS, IERC20::allowanceCall::abi_encode_returns(&allowance).into());
        let mut balances = wallet_balances(None);
        let mut workflow = ready_workflow("2.5");

        assert_eq!(workflow.refresh_allowance(&provider, &mut balances).await.unwrap(), Some(allowance));
        assert_eq!(balances.current_pair.as_ref().and_then(|balance| balance.allowance), Some(allowance));
        assert_eq!(workflow.approval_state(), ApprovalState::Done);

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to, PAIR_ADDRESS);
        let call = IERC20::allowanceCall::abi_decode(&calls[0].data).unwrap();
        assert_eq!(call.owner, sommelier_tx_sender::MOCK_ACCOUNT);
        assert_eq!(call.spender, DEFAULT_REMOVE_LIQUIDITY_CONTRACT);
        assert!(provider.sent_transactions().is_empty());

        workflow.set_exit_amount_str("5");
        workflow.refresh_allowance(&provider, &mut balances).await.unwrap();
        assert_eq!(workflow.approval_state(), ApprovalState::Needed);
    }

    #[tokio::test]
    async fn test_refresh_allowance_without_lp_balance() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = approved_workflow("1");
        let mut balances = WalletBalances::default();

        assert_eq!(workflow.refresh_allowance(&provider, &mut balances).await.unwrap(), None);
        assert_eq!(workflow.approval_state(), ApprovalState::Done);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_allowance_invalid_response() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = ready_workflow("1");
        let mut balances = wallet_balances(None);

        let result = workflow.refresh_allowance(&provider, &mut balances).await;
        assert!(matches!(result, Err(LiquidityError::Transaction(TransactionError::InvalidResponse(_)))));
        assert_eq!(balances.current_pair.and_then(|balance| balance.allowance), None);
    }

    #[test]
    fn test_set_exit_token() {
        let mut balances = WalletBalances::default();
        balances.tokens.insert("USDC".to_string(), lp_balance(None));
        let mut workflow = RemoveLiquidityWorkflow::new(usdc_weth_pair());

        assert!(workflow.set_exit_token("USDC", &balances));
        assert_eq!(workflow.exit_token(), "USDC");
        assert!(!workflow.set_exit_token("DAI", &balances));
        assert_eq!(workflow.exit_token(), "USDC");
        assert!(workflow.set_exit_token("ETH", &balances));
        assert_eq!(workflow.exit_token(), "ETH");
    }

    #[rstest]
    #[case("ETH", "381.3222")]
    #[case("WETH", "381.3222")]
    #[case("USDC", "190.6611")]
    #[case("DAI", "0.0000")]
    fn test_compute_expected_payout(#[case] exit_token: &str, #[case] expected: &str) {
        let mut workflow = ready_workflow("10");
        workflow.exit_token = exit_token.to_string();
        let payout = workflow.compute_expected_payout(Some(&position_data("10")));
        assert_eq!(payout.to_plain_string(), expected);
    }

    #[test]
    fn test_compute_expected_payout_tracked_reserve() {
        let mut pair = usdc_weth_pair();
        pair.token1.symbol = "DAI".to_string();
        let mut workflow = RemoveLiquidityWorkflow::new(pair);
        workflow.set_exit_amount_str("10");
        assert_eq!(workflow.compute_expected_payout(Some(&position_data("10"))).to_plain_string(), "400.0000");
    }

    #[test]
    fn test_compute_expected_payout_edge_cases() {
        let workflow = ready_workflow("10");
        assert_eq!(workflow.compute_expected_payout(None).to_plain_string(), "0.0000");

        let mut pair = usdc_weth_pair();
        pair.total_supply = BigDecimal::zero();
        let mut workflow = RemoveLiquidityWorkflow::new(pair);
        workflow.set_exit_amount_str("10");
        assert_eq!(workflow.compute_expected_payout(Some(&position_data("10"))).to_plain_string(), "0.0000");
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_approve() {
        reset_configuration().unwrap();
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let notifier = RecordingNotifier::default();
        let mut workflow = ready_workflow("1.5");

        let hash = workflow.approve(&provider, &notifier, &lp_balance(None)).await.unwrap();
        assert_eq!(workflow.approval_state(), ApprovalState::Done);
        assert_eq!(notifier.notifications(), vec![Notification::Approving(hash)]);

        let sent = provider.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, workflow.pair().id);
        assert_eq!(sent[0].gas.map(|gas| gas.to::<u64>()), Some(REMOVE_APPROVAL_GAS_LIMIT));
        assert_eq!(sent[0].gas_price, Some(U256::from(30_000_000_000u64)));
        let call = IERC20::approveCall::abi_decode(&sent[0].data).unwrap();
        assert_eq!(call.spender, DEFAULT_REMOVE_LIQUIDITY_CONTRACT);
        assert_eq!(call.amount, U256::from(150_000_000_000_000_000_000u128));
    }

    #[tokio::test]
    async fn test_approve_requires_decimals() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = ready_workflow("1");
        let mut balance = lp_balance(None);
        balance.decimals = 0;

        let result = workflow.approve(&provider, &RecordingNotifier::default(), &balance).await;
        assert!(matches!(result, Err(LiquidityError::MissingDecimals(_))));
        assert!(provider.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn test_approve_requires_gas_price() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = RemoveLiquidityWorkflow::new(usdc_weth_pair());
        workflow.set_gas_prices(gas_prices());
        let result = workflow.approve(&provider, &RecordingNotifier::default(), &lp_balance(None)).await;
        assert!(matches!(result, Err(LiquidityError::GasPriceNotSelected)));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_failed_approval_needs_approval_again() {
        reset_configuration().unwrap();
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = ready_workflow("1");
        provider.fail_transactions_to(workflow.pair().id);

        let result = workflow.approve(&provider, &RecordingNotifier::default(), &lp_balance(None)).await;
        assert!(matches!(result, Err(LiquidityError::ApprovalFailed(_))));
        assert_eq!(workflow.approval_state(), ApprovalState::Needed);
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit() {
        reset_configuration().unwrap();
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let notifier = RecordingNotifier::default();
        let mut workflow = approved_workflow("2.5");
        let done = Cell::new(false);

        let receipt = workflow.submit(&provider, &notifier, &position_data("10"), || done.set(true)).await.unwrap();
        assert!(receipt.is_success());
        assert!(done.get());
        assert!(!workflow.is_submitted());
        assert_eq!(workflow.exit_token(), "ETH");
        assert_eq!(workflow.exit_amount(), Some(&BigDecimal::zero()));

        let sent = provider.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, DEFAULT_REMOVE_LIQUIDITY_CONTRACT);
        assert_eq!(sent[0].value, U256::from(10_000_000_000_000_000u64));
        assert_eq!(sent[0].gas.map(|gas| gas.to::<u64>()), Some(REMOVE_LIQUIDITY_GAS_LIMIT));
        let call = IRemoveLiquidity::divestEthPairToTokenCall::abi_decode(&sent[0].data).unwrap();
        assert_eq!(call.pair, workflow.pair().id);
        assert_eq!(call.exitToken, NATIVE_TOKEN_ADDRESS);
        assert_eq!(call.lpTokens, U256::from(2_500_000_000_000_000_000u128));

        assert_eq!(
            notifier.notifications(),
            vec![Notification::Confirming(receipt.transaction_hash), Notification::Confirmed(receipt.transaction_hash)]
        );
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit_to_pair_token() {
        reset_configuration().unwrap();
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = approved_workflow("1");
        workflow.exit_token = "USDC".to_string();

        workflow.submit(&provider, &RecordingNotifier::default(), &position_data("10"), || {}).await.unwrap();
        let call = IRemoveLiquidity::divestEthPairToTokenCall::abi_decode(&provider.sent_transactions()[0].data).unwrap();
        assert_eq!(call.exitToken, workflow.pair().token0.id);
    }

    #[tokio::test]
    async fn test_submit_requires_position() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = ready_workflow("1");
        let result = workflow.submit(&provider, &RecordingNotifier::default(), &LpPositionData::default(), || {}).await;
        assert!(matches!(result, Err(LiquidityError::NoPosition)));
    }

    #[tokio::test]
    async fn test_submit_requires_amount() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = ready_workflow("0");
        let result = workflow.submit(&provider, &RecordingNotifier::default(), &position_data("10"), || {}).await;
        assert!(matches!(result, Err(LiquidityError::AmountNotEntered)));
        assert!(provider.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn test_submit_requires_lp_balance() {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let mut workflow = approved_workflow("50");
        let result = workflow.submit(&provider, &RecordingNotifier::default(), &position_data("10"), || {}).await;
        assert!(matches!(result, Err(LiquidityError::InsufficientFunds)));
        assert!(provider.sent_transactions().is_empty());
        assert!(!workflow.is_submitted());
    }

    #[rstest]
    #[case(ApprovalState::Needed)]
    #[case(ApprovalState::Pending)]
    #[tokio::test]
    async fn test_submit_requires_approval(#[case] approval_state: ApprovalState) {
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        let notifier = RecordingNotifier::default();
        let mut workflow = ready_workflow("5");
        workflow.approval_state = approval_state;

        let result = workflow.submit(&provider, &notifier, &position_data("10"), || {}).await;
        assert!(matches!(result, Err(LiquidityError::NeedsApproval)));
        assert!(provider.sent_transactions().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit_rejected_keeps_form() {
        reset_configuration().unwrap();
        let provider = MockWalletProvider::new(TEST_CHAIN_ID);
        provider.fail_transactions_to(DEFAULT_REMOVE_LIQUIDITY_CONTRACT);
        let mut workflow = approved_workflow("1");
        let done = Cell::new(false);

        let result = workflow.submit(&provider, &RecordingNotifier::default(), &position_data("10"), || done.set(true)).await;
        assert!(matches!(result, Err(LiquidityError::TransactionRejected(_))));
        assert!(!done.get());
        assert!(!workflow.is_submitted());
        assert_eq!(workflow.exit_amount(), Some(&dec("1")));
    }
}
