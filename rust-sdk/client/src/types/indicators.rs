//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Market outlook selected by the liquidity provider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sentiment {
    Bearish,
    #[default]
    Neutral,
    Bullish,
}

/// Price bands `[lower, upper]` per sentiment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentBounds {
    pub bearish: [f64; 2],
    pub neutral: [f64; 2],
    pub bullish: [f64; 2],
}

impl SentimentBounds {
    pub fn band(&self, sentiment: Sentiment) -> [f64; 2] {
        match sentiment {
            Sentiment::Bearish => self.bearish,
            Sentiment::Neutral => self.neutral,
            Sentiment::Bullish => self.bullish,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketIndicator {
    pub bounds: SentimentBounds,
}

/// Indicators computed from market data, keyed by indicator name.
pub type MarketIndicators = HashMap<String, MarketIndicator>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOLLINGER_EMA_NORMAL_BAND;

    #[test]
    fn test_deserialize_indicators() {
        let indicators: MarketIndicators = serde_json::from_str(
            r#"{ "bollingerEMANormalBand": { "bounds": {
                "bearish": [2800.5, 3100],
                "neutral": [2900, 3300],
                "bullish": [3100, 3600.25]
            } } }"#,
        )
        .unwrap();
        let bounds = &indicators[BOLLINGER_EMA_NORMAL_BAND].bounds;
        assert_eq!(bounds.band(Sentiment::Bearish), [2800.5, 3100.0]);
        assert_eq!(bounds.band(Sentiment::default()), [2900.0, 3300.0]);
        assert_eq!(bounds.band(Sentiment::Bullish), [3100.0, 3600.25]);
    }
}
