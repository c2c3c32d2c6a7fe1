//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::TxHash;
use sommelier_client::ClientError;
use sommelier_core::CoreError;
use sommelier_tx_sender::TransactionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiquidityError {
    #[error("Gas price not selected")]
    GasPriceNotSelected,
    #[error("No add-liquidity contract available for chain {0}")]
    ContractNotAvailable(u64),
    #[error("Price bounds are not computed yet")]
    BoundsPending,
    #[error("No LP position for this pair")]
    NoPosition,
    #[error("Amount not entered")]
    AmountNotEntered,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("The token needs to be approved first")]
    NeedsApproval,
    #[error("Do not have decimal units for {0}, cannot proceed")]
    MissingDecimals(String),
    #[error("Unknown token {0}")]
    UnknownToken(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Approval transaction {0} failed")]
    ApprovalFailed(TxHash),
    #[error("Transaction {0} was rejected")]
    TransactionRejected(TxHash),
    #[error("Core math error: {0}")]
    Core(CoreError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl From<CoreError> for LiquidityError {
    fn from(err: CoreError) -> Self {
        LiquidityError::Core(err)
    }
}
