//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod liquidity;
mod pair;
mod pool;
mod position;
mod tick;

pub use liquidity::*;
pub use pair::*;
pub use pool::*;
pub use position::*;
pub use tick::*;
