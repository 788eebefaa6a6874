//! # Network Configuration & Gas Schedule
//!
//! Every magic number the transaction factories depend on lives here. The
//! gas constants mirror the execution-fee schedule enforced by the DRT
//! protocol: if one of them drifts from what validators charge, transactions
//! either fail with "insufficient gas" or overpay, so treat edits to this file
//! with the suspicion they deserve.
//!
//! The constants are only defaults. Factories never read them directly; they
//! read the [`TransactionsFactoryConfig`] handed to them at construction.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Mainnet chain identifier.
pub const CHAIN_ID_MAINNET: &str = "1";

/// Testnet chain identifier.
pub const CHAIN_ID_TESTNET: &str = "T";

/// Devnet chain identifier.
pub const CHAIN_ID_DEVNET: &str = "D";

/// Bech32 human-readable prefix for account addresses.
pub const DEFAULT_ADDRESS_HRP: &str = "moa";

/// Raw length of an account address, in bytes.
pub const ADDRESS_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Transaction Defaults
// ---------------------------------------------------------------------------

/// Transaction version emitted by the factories. Version 2 is the first one
/// that understands the `options` field.
pub const TRANSACTION_VERSION: u32 = 2;

/// Default transaction options: no guardian, no hash signing.
pub const TRANSACTION_OPTIONS: u32 = 0;

/// Minimum gas price accepted by the network, in the native denomination's
/// smallest unit.
pub const MIN_GAS_PRICE: u64 = 1_000_000_000;

/// Identifier used to carry the native coin inside a multi-token transfer.
pub const NATIVE_TOKEN_IDENTIFIER_FOR_MULTI_TRANSFER: &str = "REWA-000000";

// ---------------------------------------------------------------------------
// Gas Schedule
// ---------------------------------------------------------------------------

/// Gas charged for any move-balance transaction, before data costs.
pub const MIN_GAS_LIMIT: u64 = 50_000;

/// Gas charged per byte of the `data` field.
pub const GAS_LIMIT_PER_BYTE: u64 = 1_500;

/// Built-in function cost of `DCDTTransfer`.
pub const GAS_LIMIT_DCDT_TRANSFER: u64 = 200_000;

/// Built-in function cost of `DCDTNFTTransfer`.
pub const GAS_LIMIT_DCDT_NFT_TRANSFER: u64 = 200_000;

/// Built-in function cost of `MultiDCDTNFTTransfer`, charged once per
/// transferred token.
pub const GAS_LIMIT_MULTI_DCDT_NFT_TRANSFER: u64 = 200_000;

/// Surcharge on top of a fungible transfer.
pub const ADDITIONAL_GAS_FOR_DCDT_TRANSFER: u64 = 100_000;

/// Surcharge on top of NFT and multi transfers. These are self-addressed
/// calls whose effects land on another account (possibly in another shard),
/// so the sender pays for the cross-shard leg up front.
pub const ADDITIONAL_GAS_FOR_DCDT_NFT_TRANSFER: u64 = 800_000;

/// The subset of the execution-fee schedule used by the transfer factory.
///
/// All values are in gas units. [`GasSchedule::default`] returns the
/// protocol's current table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSchedule {
    /// Base cost of moving balance between accounts.
    pub min_gas_limit: u64,
    /// Cost per byte of the `data` field.
    pub gas_limit_per_byte: u64,
    /// Built-in cost of a single fungible transfer.
    pub gas_limit_dcdt_transfer: u64,
    /// Built-in cost of a single NFT / SFT transfer.
    pub gas_limit_dcdt_nft_transfer: u64,
    /// Built-in cost per token inside a multi-transfer.
    pub gas_limit_multi_dcdt_nft_transfer: u64,
    /// Surcharge for fungible transfers.
    pub additional_gas_for_dcdt_transfer: u64,
    /// Surcharge for NFT and multi transfers.
    pub additional_gas_for_dcdt_nft_transfer: u64,
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            min_gas_limit: MIN_GAS_LIMIT,
            gas_limit_per_byte: GAS_LIMIT_PER_BYTE,
            gas_limit_dcdt_transfer: GAS_LIMIT_DCDT_TRANSFER,
            gas_limit_dcdt_nft_transfer: GAS_LIMIT_DCDT_NFT_TRANSFER,
            gas_limit_multi_dcdt_nft_transfer: GAS_LIMIT_MULTI_DCDT_NFT_TRANSFER,
            additional_gas_for_dcdt_transfer: ADDITIONAL_GAS_FOR_DCDT_TRANSFER,
            additional_gas_for_dcdt_nft_transfer: ADDITIONAL_GAS_FOR_DCDT_NFT_TRANSFER,
        }
    }
}

impl GasSchedule {
    /// Gas for a plain move-balance carrying `data_len` bytes of data.
    ///
    /// Returns `None` if the result does not fit in a `u64`, which only
    /// happens with a hand-edited schedule.
    pub fn move_balance(&self, data_len: usize) -> Option<u64> {
        let data_len = u64::try_from(data_len).ok()?;
        self.gas_limit_per_byte
            .checked_mul(data_len)?
            .checked_add(self.min_gas_limit)
    }
}

// ---------------------------------------------------------------------------
// TransactionsFactoryConfig
// ---------------------------------------------------------------------------

/// Immutable configuration shared by the transaction factories.
///
/// Construct one per target network and hand it to each factory by
/// reference. Missing fields fall back to the protocol defaults when
/// deserializing, so a config file only needs to carry what differs:
///
/// ```
/// use drt_sdk_core::config::TransactionsFactoryConfig;
///
/// let config: TransactionsFactoryConfig =
///     serde_json::from_str(r#"{ "chain_id": "D" }"#).unwrap();
/// assert_eq!(config.gas_schedule.min_gas_limit, 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsFactoryConfig {
    /// Chain the transactions are destined for.
    pub chain_id: String,

    /// Bech32 prefix that sender and receiver addresses are required to
    /// carry. Addresses keep rendering with their own prefix.
    #[serde(default = "default_address_hrp")]
    pub address_hrp: String,

    /// Gas price stamped on every transaction.
    #[serde(default = "default_min_gas_price")]
    pub min_gas_price: u64,

    /// Identifier standing in for the native coin in multi-transfers.
    #[serde(default = "default_native_token_identifier")]
    pub native_token_identifier: String,

    /// Execution-fee schedule.
    #[serde(default)]
    pub gas_schedule: GasSchedule,
}

fn default_address_hrp() -> String {
    DEFAULT_ADDRESS_HRP.to_string()
}

fn default_min_gas_price() -> u64 {
    MIN_GAS_PRICE
}

fn default_native_token_identifier() -> String {
    NATIVE_TOKEN_IDENTIFIER_FOR_MULTI_TRANSFER.to_string()
}

impl TransactionsFactoryConfig {
    /// Creates a config for `chain_id` with the protocol's default schedule.
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            address_hrp: default_address_hrp(),
            min_gas_price: MIN_GAS_PRICE,
            native_token_identifier: default_native_token_identifier(),
            gas_schedule: GasSchedule::default(),
        }
    }

    /// Replaces the gas schedule.
    pub fn with_gas_schedule(mut self, gas_schedule: GasSchedule) -> Self {
        self.gas_schedule = gas_schedule;
        self
    }

    /// Replaces the address prefix.
    pub fn with_address_hrp(mut self, hrp: impl Into<String>) -> Self {
        self.address_hrp = hrp.into();
        self
    }
}

/// Returns a friendly name for a chain ID, mainly for logging.
pub fn network_name(chain_id: &str) -> String {
    match chain_id {
        CHAIN_ID_MAINNET => "mainnet".to_string(),
        CHAIN_ID_TESTNET => "testnet".to_string(),
        CHAIN_ID_DEVNET => "devnet".to_string(),
        other => format!("custom({})", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ids_are_distinct() {
        assert_ne!(CHAIN_ID_MAINNET, CHAIN_ID_TESTNET);
        assert_ne!(CHAIN_ID_MAINNET, CHAIN_ID_DEVNET);
        assert_ne!(CHAIN_ID_TESTNET, CHAIN_ID_DEVNET);
    }

    #[test]
    fn network_name_formatting() {
        assert_eq!(network_name(CHAIN_ID_MAINNET), "mainnet");
        assert_eq!(network_name("D"), "devnet");
        assert_eq!(network_name("local-testnet"), "custom(local-testnet)");
    }

    #[test]
    fn default_schedule_matches_protocol_table() {
        let schedule = GasSchedule::default();
        assert_eq!(schedule.min_gas_limit, 50_000);
        assert_eq!(schedule.gas_limit_per_byte, 1_500);
        assert_eq!(schedule.gas_limit_dcdt_transfer, 200_000);
        assert_eq!(schedule.gas_limit_dcdt_nft_transfer, 200_000);
        assert_eq!(schedule.gas_limit_multi_dcdt_nft_transfer, 200_000);
        assert_eq!(schedule.additional_gas_for_dcdt_transfer, 100_000);
        assert_eq!(schedule.additional_gas_for_dcdt_nft_transfer, 800_000);
    }

    #[test]
    fn move_balance_charges_per_byte() {
        let schedule = GasSchedule::default();
        assert_eq!(schedule.move_balance(0), Some(50_000));
        assert_eq!(schedule.move_balance(9), Some(63_500));
    }

    #[test]
    fn move_balance_overflow_is_reported() {
        let schedule = GasSchedule {
            gas_limit_per_byte: u64::MAX / 2,
            ..GasSchedule::default()
        };
        assert_eq!(schedule.move_balance(1), Some(u64::MAX / 2 + 50_000));
        assert_eq!(schedule.move_balance(3), None);

        let schedule = GasSchedule {
            min_gas_limit: u64::MAX,
            ..GasSchedule::default()
        };
        assert_eq!(schedule.move_balance(0), Some(u64::MAX));
        assert_eq!(schedule.move_balance(1), None);
    }

    #[test]
    fn new_config_uses_defaults() {
        let config = TransactionsFactoryConfig::new("D");
        assert_eq!(config.chain_id, "D");
        assert_eq!(config.address_hrp, "moa");
        assert_eq!(config.min_gas_price, MIN_GAS_PRICE);
        assert_eq!(config.native_token_identifier, "REWA-000000");
        assert_eq!(config.gas_schedule, GasSchedule::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let json = r#"{ "chain_id": "T", "gas_schedule": { "gas_limit_per_byte": 2000 } }"#;
        let config: TransactionsFactoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.chain_id, "T");
        assert_eq!(config.gas_schedule.gas_limit_per_byte, 2_000);
        assert_eq!(config.gas_schedule.min_gas_limit, MIN_GAS_LIMIT);
        assert_eq!(config.address_hrp, DEFAULT_ADDRESS_HRP);
    }

    #[test]
    fn config_json_roundtrip() {
        let config = TransactionsFactoryConfig::new("1").with_address_hrp("drt");
        let json = serde_json::to_string(&config).unwrap();
        let recovered: TransactionsFactoryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, recovered);
    }
}
