//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod config;
mod decrease_liquidity;
mod error;
mod increase_liquidity;
mod selection;
mod token;

#[cfg(test)]
mod tests;

pub use config::*;
pub use decrease_liquidity::*;
pub use error::*;
pub use increase_liquidity::*;
pub use selection::*;
pub use token::*;
