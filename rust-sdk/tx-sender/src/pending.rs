//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::TxHash;
use std::fmt;

/// Shortens a transaction hash for display, e.g. `0x1234...cdef`.
pub fn compact_hash(hash: &TxHash) -> String {
    let full = hash.to_string();
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

/// Transactions submitted but not yet mined, split by stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingTransactionSet {
    pub approval: Vec<TxHash>,
    pub confirm: Vec<TxHash>,
}

impl PendingTransactionSet {
    pub fn push_approval(&mut self, hash: TxHash) {
        self.approval.push(hash);
    }

    pub fn remove_approval(&mut self, hash: &TxHash) {
        self.approval.retain(|pending| pending != hash);
    }

    pub fn push_confirm(&mut self, hash: TxHash) {
        self.confirm.push(hash);
    }

    pub fn remove_confirm(&mut self, hash: &TxHash) {
        self.confirm.retain(|pending| pending != hash);
    }

    pub fn is_empty(&self) -> bool {
        self.approval.is_empty() && self.confirm.is_empty()
    }
}

/// Progress events of a transaction sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Approving(TxHash),
    Confirming(TxHash),
    Confirmed(TxHash),
    Rejected(TxHash),
    Error(String),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Approving(hash) => write!(f, "Approving tx {}", compact_hash(hash)),
            Notification::Confirming(hash) => write!(f, "Confirming tx {}", compact_hash(hash)),
            Notification::Confirmed(hash) => write!(f, "Confirmed tx {}", compact_hash(hash)),
            Notification::Rejected(hash) => write!(f, "Rejected tx {}", compact_hash(hash)),
            Notification::Error(message) => write!(f, "{}", message),
        }
    }
}

/// Receives progress of the liquidity workflows, typically to surface it to the user.
pub trait TransactionNotifier: Send + Sync {
    fn notify(&self, notification: Notification);

    /// Called whenever the set of pending transactions changes.
    fn pending_changed(&self, _pending: &PendingTransactionSet) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl TransactionNotifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}
