//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod error;
mod json_rpc;
mod pending;
mod provider;
mod request_handler;
mod smart_transaction;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use error::*;
pub use json_rpc::*;
pub use pending::*;
pub use provider::*;
pub use smart_transaction::*;

#[cfg(any(test, feature = "mock"))]
pub use mock::*;
