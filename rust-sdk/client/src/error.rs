//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Tick index {0} does not fit into int24")]
    TickOutOfRange(i32),
    #[error("Fee tier {0} does not fit into uint24")]
    FeeTierOutOfRange(u32),
    #[error("Invalid gas price: {0}")]
    InvalidGasPrice(String),
}
