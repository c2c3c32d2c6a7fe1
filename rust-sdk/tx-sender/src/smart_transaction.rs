//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{TransactionError, TransactionReceipt, TransactionRequest, WalletProvider};
use alloy_primitives::{TxHash, U256};
use log::{debug, error, warn};
use std::time::Duration;
use tokio::time::{sleep, Instant};

pub const DEFAULT_TRANSACTION_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_RECEIPT_POLL_INTERVAL_SECONDS: u64 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmartTxConfig {
    /// Gas price in wei.
    pub gas_price: U256,
    /// A fixed gas limit. The limit is estimated with headroom when not set.
    pub gas_limit: Option<u64>,
    /// The default timeout is 60 seconds.
    pub transaction_timeout: Option<Duration>,
    /// The default interval is 2 seconds.
    pub poll_interval: Option<Duration>,
}

impl SmartTxConfig {
    pub fn new(gas_price: U256) -> Self {
        Self {
            gas_price,
            gas_limit: None,
            transaction_timeout: None,
            poll_interval: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.transaction_timeout
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TRANSACTION_TIMEOUT_SECONDS))
    }

    pub fn interval(&self) -> Duration {
        self.poll_interval
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_RECEIPT_POLL_INTERVAL_SECONDS))
    }
}

/// Adds a third on top of a gas estimate.
pub fn apply_gas_headroom(estimate: u64) -> u64 {
    estimate.saturating_add(estimate / 3)
}

/// Estimates the gas of a transaction and adds a third on top.
pub async fn estimate_gas_with_headroom(provider: &dyn WalletProvider, tx: &TransactionRequest) -> Result<u64, TransactionError> {
    match provider.estimate_gas(tx).await {
        Ok(estimate) => {
            let gas_limit = apply_gas_headroom(estimate);
            debug!(target: "log", "Gas estimate {} to {}: limit {}", estimate, tx.to, gas_limit);
            Ok(gas_limit)
        }
        Err(err) => {
            error!(target: "log", "Could not estimate gas for a transaction to {}: {}", tx.to, err);
            Err(TransactionError::GasEstimation(err.to_string()))
        }
    }
}

/// Prices a transaction, sets its gas limit and hands it to the wallet.
///
/// # Returns
/// The hash of the submitted transaction. Confirmation is awaited separately with `wait_for_receipt`.
pub async fn send_smart_transaction(provider: &dyn WalletProvider, tx: TransactionRequest, tx_config: &SmartTxConfig) -> Result<TxHash, TransactionError> {
    let gas_limit = match tx_config.gas_limit {
        Some(gas_limit) => gas_limit,
        None => estimate_gas_with_headroom(provider, &tx).await?,
    };
    let tx = tx.with_gas_limit(gas_limit).with_gas_price(tx_config.gas_price);
    let hash = provider.send_transaction(tx).await?;
    debug!(target: "log", "Submitted transaction {}", hash);
    Ok(hash)
}

/// Poll a transaction until its receipt is available
///
/// * `hash` - The transaction hash to check
/// * `timeout` - How long to wait for the receipt
/// * `interval` - The delay between two polls
///
/// # Returns
/// The receipt, whatever its status, or a timeout error. Dropping the future stops the polling.
pub async fn wait_for_receipt(
    provider: &dyn WalletProvider,
    hash: TxHash,
    timeout: Duration,
    interval: Duration,
) -> Result<TransactionReceipt, TransactionError> {
    let start = Instant::now();

    while start.elapsed() < timeout {
        match provider.transaction_receipt(hash).await {
            Ok(Some(receipt)) => {
                if !receipt.is_success() {
                    warn!(target: "log", "Transaction {} failed", hash);
                }
                return Ok(receipt);
            }
            Ok(None) => {}
            Err(err) => warn!(target: "log", "Receipt request for {} failed: {}", hash, err),
        }
        sleep(interval).await;
    }

    Err(TransactionError::Timeout {
        hash,
        seconds: timeout.as_secs(),
    })
}
