//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::ClientError;
use alloy_primitives::{utils::parse_units, U256};
use serde::{Deserialize, Serialize};

/// Gas price tiers in gwei.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GasPrices {
    pub standard: f64,
    pub fast: f64,
    pub fastest: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GasPriceLevel {
    #[default]
    Standard,
    Fast,
    Fastest,
}

impl GasPrices {
    pub fn price(&self, level: GasPriceLevel) -> f64 {
        match level {
            GasPriceLevel::Standard => self.standard,
            GasPriceLevel::Fast => self.fast,
            GasPriceLevel::Fastest => self.fastest,
        }
    }
}

/// Converts a gas price in gwei into wei.
pub fn gas_price_to_wei(gwei: f64) -> Result<U256, ClientError> {
    if !gwei.is_finite() || gwei < 0.0 {
        return Err(ClientError::InvalidGasPrice(gwei.to_string()));
    }
    parse_units(&gwei.to_string(), "gwei")
        .map(|units| units.get_absolute())
        .map_err(|err| ClientError::InvalidGasPrice(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_price_by_level() {
        let prices = GasPrices {
            standard: 30.0,
            fast: 45.0,
            fastest: 60.0,
        };
        assert_eq!(prices.price(GasPriceLevel::Standard), 30.0);
        assert_eq!(prices.price(GasPriceLevel::Fast), 45.0);
        assert_eq!(prices.price(GasPriceLevel::Fastest), 60.0);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 1_000_000_000)]
    #[case(42.5, 42_500_000_000)]
    #[case(0.000000001, 1)]
    fn test_gas_price_to_wei(#[case] gwei: f64, #[case] wei: u64) {
        assert_eq!(gas_price_to_wei(gwei).unwrap(), U256::from(wei));
    }

    #[test]
    fn test_gas_price_to_wei_invalid() {
        assert!(gas_price_to_wei(-1.0).is_err());
        assert!(gas_price_to_wei(f64::NAN).is_err());
    }
}
