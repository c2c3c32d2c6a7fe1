//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::TxHash;

#[derive(thiserror::Error, Debug)]
pub enum TransactionError {
    #[error("RpcError: {0}")]
    Rpc(String),
    #[error("Gas estimation failed: {0}")]
    GasEstimation(String),
    #[error("Unable to confirm transaction {hash} in {seconds} seconds")]
    Timeout { hash: TxHash, seconds: u64 },
    #[error("Transaction {0} was rejected")]
    Rejected(TxHash),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<anyhow::Error> for TransactionError {
    fn from(err: anyhow::Error) -> Self {
        TransactionError::Rpc(err.to_string())
    }
}
