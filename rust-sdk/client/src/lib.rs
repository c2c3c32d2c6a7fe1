//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod consts;
mod contracts;
mod error;
mod types;

#[cfg(feature = "core-types")]
mod core_types;

pub use consts::*;
pub use contracts::*;
pub use error::*;
pub use types::*;
