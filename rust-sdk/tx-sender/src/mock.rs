//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{TransactionError, TransactionReceipt, TransactionRequest, WalletProvider};
use alloy_primitives::{address, Address, Bytes, TxHash, U64};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const MOCK_ACCOUNT: Address = address!("0x00000000000000000000000000000000000a11ce");

#[derive(Default)]
struct MockState {
    gas_estimate: Option<u64>,
    pending_polls: usize,
    failing_targets: HashSet<Address>,
    call_results: HashMap<Address, Bytes>,
    calls: Vec<TransactionRequest>,
    sent: Vec<TransactionRequest>,
    polls: HashMap<TxHash, usize>,
}

/// An in-memory wallet that records sent transactions and mines them after a number of receipt polls.
pub struct MockWalletProvider {
    chain_id: u64,
    state: Mutex<MockState>,
}

impl MockWalletProvider {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            state: Mutex::new(MockState {
                gas_estimate: Some(21_000),
                ..Default::default()
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets the gas estimate. `None` makes estimation fail.
    pub fn set_gas_estimate(&self, gas_estimate: Option<u64>) {
        self.state().gas_estimate = gas_estimate;
    }

    /// Number of receipt polls answered with "pending" before a transaction is mined.
    pub fn set_pending_polls(&self, polls: usize) {
        self.state().pending_polls = polls;
    }

    /// Transactions sent to `target` are mined with a failed status.
    pub fn fail_transactions_to(&self, target: Address) {
        self.state().failing_targets.insert(target);
    }

    /// Read-only calls to `target` return `result`. Other calls return empty bytes.
    pub fn set_call_result(&self, target: Address, result: Bytes) {
        self.state().call_results.insert(target, result);
    }

    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.state().calls.clone()
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.state().sent.clone()
    }

    fn hash_of(index: usize) -> TxHash {
        TxHash::left_padding_from(&(index as u64 + 1).to_be_bytes())
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn chain_id(&self) -> Result<u64, TransactionError> {
        Ok(self.chain_id)
    }

    async fn account(&self) -> Result<Address, TransactionError> {
        Ok(MOCK_ACCOUNT)
    }

    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes, TransactionError> {
        let mut state = self.state();
        state.calls.push(tx.clone());
        Ok(state.call_results.get(&tx.to).cloned().unwrap_or_default())
    }

    async fn estimate_gas(&self, _tx: &TransactionRequest) -> Result<u64, TransactionError> {
        self.state()
            .gas_estimate
            .ok_or_else(|| TransactionError::GasEstimation("execution reverted".to_string()))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, TransactionError> {
        let mut state = self.state();
        let hash = Self::hash_of(state.sent.len());
        state.sent.push(tx);
        state.polls.insert(hash, 0);
        Ok(hash)
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, TransactionError> {
        let mut state = self.state();
        let pending_polls = state.pending_polls;
        let Some(polls) = state.polls.get_mut(&hash) else {
            return Ok(None);
        };
        if *polls < pending_polls {
            *polls += 1;
            return Ok(None);
        }

        let index = (0..state.sent.len()).find(|i| Self::hash_of(*i) == hash).unwrap_or_default();
        let failed = state.sent.get(index).is_some_and(|tx| state.failing_targets.contains(&tx.to));
        Ok(Some(TransactionReceipt {
            transaction_hash: hash,
            block_number: Some(U64::from(index as u64 + 1)),
            gas_used: U64::from(21_000),
            status: if failed { U64::ZERO } else { U64::from(1) },
        }))
    }
}
