//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use sommelier_client::REMOVE_LIQUIDITY_ADDRESS;
use sommelier_tx_sender::SmartTxConfig;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Contract addresses deployed on one network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkContracts {
    #[serde(rename = "ADD_LIQUIDITY_V3")]
    pub add_liquidity_v3: Option<Address>,
}

#[derive(Deserialize)]
struct NetworkConfig {
    contracts: NetworkContracts,
}

/// The contracts of every configured network, keyed by chain id.
pub static NETWORK_CONTRACTS: Mutex<BTreeMap<u64, NetworkContracts>> = Mutex::new(BTreeMap::new());

/// Sets the contracts of a network.
pub fn set_network_contracts(chain_id: u64, contracts: NetworkContracts) -> Result<(), Box<dyn Error>> {
    NETWORK_CONTRACTS.try_lock()?.insert(chain_id, contracts);
    Ok(())
}

/// Loads network contracts from a JSON document shaped like
/// `{ "1": { "contracts": { "ADD_LIQUIDITY_V3": "0x..." } } }`.
pub fn load_network_config(json: &str) -> Result<(), Box<dyn Error>> {
    let networks: HashMap<String, NetworkConfig> = serde_json::from_str(json)?;
    let mut configured = NETWORK_CONTRACTS.try_lock()?;
    for (chain_id, network) in networks {
        configured.insert(chain_id.parse()?, network.contracts);
    }
    Ok(())
}

/// The contracts of a network, if it is configured.
pub fn get_network_contracts(chain_id: u64) -> Option<NetworkContracts> {
    NETWORK_CONTRACTS.lock().unwrap_or_else(PoisonError::into_inner).get(&chain_id).copied()
}

/// The default contract divesting constant-product LP positions.
pub const DEFAULT_REMOVE_LIQUIDITY_CONTRACT: Address = REMOVE_LIQUIDITY_ADDRESS;

/// The currently selected contract divesting constant-product LP positions.
pub static REMOVE_LIQUIDITY_CONTRACT: Mutex<Address> = Mutex::new(DEFAULT_REMOVE_LIQUIDITY_CONTRACT);

/// Sets the currently selected contract divesting constant-product LP positions.
pub fn set_remove_liquidity_contract(contract: Address) -> Result<(), Box<dyn Error>> {
    *REMOVE_LIQUIDITY_CONTRACT.try_lock()? = contract;
    Ok(())
}

/// The default time to wait for a transaction receipt.
pub const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_secs(60);

/// The currently selected time to wait for a transaction receipt.
pub static TRANSACTION_TIMEOUT: Mutex<Duration> = Mutex::new(DEFAULT_TRANSACTION_TIMEOUT);

/// Sets the currently selected time to wait for a transaction receipt.
pub fn set_transaction_timeout(timeout: Duration) -> Result<(), Box<dyn Error>> {
    *TRANSACTION_TIMEOUT.try_lock()? = timeout;
    Ok(())
}

/// The default delay between two receipt polls.
pub const DEFAULT_RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The currently selected delay between two receipt polls.
pub static RECEIPT_POLL_INTERVAL: Mutex<Duration> = Mutex::new(DEFAULT_RECEIPT_POLL_INTERVAL);

/// Sets the currently selected delay between two receipt polls.
pub fn set_receipt_poll_interval(interval: Duration) -> Result<(), Box<dyn Error>> {
    *RECEIPT_POLL_INTERVAL.try_lock()? = interval;
    Ok(())
}

/// The default validity of a mint transaction, in seconds from submission.
pub const DEFAULT_DEADLINE_OFFSET_SECONDS: u64 = 86_400;

/// The currently selected validity of a mint transaction, in seconds from submission.
pub static DEADLINE_OFFSET_SECONDS: Mutex<u64> = Mutex::new(DEFAULT_DEADLINE_OFFSET_SECONDS);

/// Sets the currently selected validity of a mint transaction, in seconds from submission.
pub fn set_deadline_offset_seconds(offset: u64) -> Result<(), Box<dyn Error>> {
    *DEADLINE_OFFSET_SECONDS.try_lock()? = offset;
    Ok(())
}

/// The default slippage tolerance, expressed in basis points. Value of 100 is equivalent to 1%.
pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = 100;

/// The currently selected slippage tolerance, expressed in basis points.
pub static SLIPPAGE_TOLERANCE_BPS: Mutex<u16> = Mutex::new(DEFAULT_SLIPPAGE_TOLERANCE_BPS);

/// Sets the currently selected slippage tolerance, expressed in basis points.
pub fn set_slippage_tolerance_bps(tolerance: u16) -> Result<(), Box<dyn Error>> {
    *SLIPPAGE_TOLERANCE_BPS.try_lock()? = tolerance;
    Ok(())
}

pub(crate) fn read_config<T: Copy>(value: &Mutex<T>) -> T {
    *value.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Transaction settings for the given gas price (wei) using the configured receipt timeout and poll interval.
pub(crate) fn transaction_config(gas_price: U256) -> SmartTxConfig {
    SmartTxConfig {
        transaction_timeout: Some(read_config(&TRANSACTION_TIMEOUT)),
        poll_interval: Some(read_config(&RECEIPT_POLL_INTERVAL)),
        ..SmartTxConfig::new(gas_price)
    }
}

/// Resets the configuration to its default values.
pub fn reset_configuration() -> Result<(), Box<dyn Error>> {
    NETWORK_CONTRACTS.try_lock()?.clear();
    *REMOVE_LIQUIDITY_CONTRACT.try_lock()? = DEFAULT_REMOVE_LIQUIDITY_CONTRACT;
    *TRANSACTION_TIMEOUT.try_lock()? = DEFAULT_TRANSACTION_TIMEOUT;
    *RECEIPT_POLL_INTERVAL.try_lock()? = DEFAULT_RECEIPT_POLL_INTERVAL;
    *DEADLINE_OFFSET_SECONDS.try_lock()? = DEFAULT_DEADLINE_OFFSET_SECONDS;
    *SLIPPAGE_TOLERANCE_BPS.try_lock()? = DEFAULT_SLIPPAGE_TOLERANCE_BPS;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_network_contracts() {
        let contracts = NetworkContracts {
            add_liquidity_v3: Some(address!("0x1111111111111111111111111111111111111111")),
        };
        set_network_contracts(5, contracts).unwrap();
        assert_eq!(get_network_contracts(5), Some(contracts));
        assert_eq!(get_network_contracts(1), None);
        reset_configuration().unwrap();
    }

    #[test]
    #[serial]
    fn test_load_network_config() {
        load_network_config(
            r#"{
                "1": { "contracts": { "ADD_LIQUIDITY_V3": "0x2222222222222222222222222222222222222222" } },
                "3": { "contracts": {} }
            }"#,
        )
        .unwrap();
        assert_eq!(
            get_network_contracts(1).and_then(|c| c.add_liquidity_v3),
            Some(address!("0x2222222222222222222222222222222222222222"))
        );
        assert_eq!(get_network_contracts(3), Some(NetworkContracts::default()));
        assert!(load_network_config(r#"{ "mainnet": { "contracts": {} } }"#).is_err());
        reset_configuration().unwrap();
    }

    #[test]
    #[serial]
    fn test_set_transaction_timeout() {
        set_transaction_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(*TRANSACTION_TIMEOUT.lock().unwrap(), Duration::from_secs(5));
        reset_configuration().unwrap();
    }

    #[test]
    #[serial]
    fn test_set_slippage_tolerance_bps() {
        let new_tolerance = 200;
        set_slippage_tolerance_bps(new_tolerance).unwrap();
        assert_eq!(*SLIPPAGE_TOLERANCE_BPS.lock().unwrap(), new_tolerance);
        reset_configuration().unwrap();
    }

    #[test]
    #[serial]
    fn test_reset_configuration() {
        set_deadline_offset_seconds(60).unwrap();
        set_remove_liquidity_contract(Address::ZERO).unwrap();
        reset_configuration().unwrap();
        assert!(NETWORK_CONTRACTS.lock().unwrap().is_empty());
        assert_eq!(*REMOVE_LIQUIDITY_CONTRACT.lock().unwrap(), DEFAULT_REMOVE_LIQUIDITY_CONTRACT);
        assert_eq!(*TRANSACTION_TIMEOUT.lock().unwrap(), Duration::from_secs(60));
        assert_eq!(*RECEIPT_POLL_INTERVAL.lock().unwrap(), Duration::from_secs(2));
        assert_eq!(*DEADLINE_OFFSET_SECONDS.lock().unwrap(), 86_400);
        assert_eq!(*SLIPPAGE_TOLERANCE_BPS.lock().unwrap(), 100);
    }
}
