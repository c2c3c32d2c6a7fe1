//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod increase_liquidity;
mod remove_liquidity;

pub use increase_liquidity::*;
pub use remove_liquidity::*;
