//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod balance;
mod gas;
mod indicators;
mod pair;
mod pool;
mod position;

pub use balance::*;
pub use gas::*;
pub use indicators::*;
pub use pair::*;
pub use pool::*;
pub use position::*;
