//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::TransactionError;
use alloy_primitives::{Address, Bytes, TxHash, U256, U64};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A transaction as handed to the wallet for signing and broadcasting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
}

impl TransactionRequest {
    pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn with_gas_limit(mut self, gas: u64) -> Self {
        self.gas = Some(U64::from(gas));
        self
    }

    pub fn with_gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = Some(gas_price);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub block_number: Option<U64>,
    #[serde(default)]
    pub gas_used: U64,
    /// 1 for success, 0 for failure.
    pub status: U64,
}

impl TransactionReceipt {
    pub fn is_success(&self) -> bool {
        self.status == U64::from(1)
    }
}

/// The connected wallet and the chain it talks to.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn chain_id(&self) -> Result<u64, TransactionError>;

    /// The account transactions are sent from.
    async fn account(&self) -> Result<Address, TransactionError>;

    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes, TransactionError>;

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, TransactionError>;

    /// Signs and broadcasts a transaction, returning its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, TransactionError>;

    /// The receipt of a mined transaction, `None` while it is pending.
    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, TransactionError>;
}
