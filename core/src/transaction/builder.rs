//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] enforces a disciplined construction flow: set
//! the fields, call `.build()`, and get back an unsigned [`Transaction`].
//! Factories compute `data` and `gas_limit`; the builder only assembles.
//!
//! The builder does not sign. Signatures are attached by whoever holds the
//! keys, which keeps construction testable without key material.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::config::{MIN_GAS_PRICE, TRANSACTION_OPTIONS, TRANSACTION_VERSION};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// An unsigned DRT transaction.
///
/// Serializes to the JSON shape the network's proxy expects: camelCase keys,
/// `value` as a decimal string, `data` and usernames as base64, signatures
/// as hex. Empty optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Per-sender sequence number.
    pub nonce: u64,

    /// Native amount moved, in the smallest denomination.
    #[serde(with = "serde_helpers::biguint_string")]
    pub value: BigUint,

    /// Receiver address (Bech32).
    pub receiver: String,

    /// Sender address (Bech32).
    pub sender: String,

    /// Optional herotag of the sender.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        with = "serde_helpers::base64_string"
    )]
    pub sender_username: String,

    /// Optional herotag of the receiver.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        with = "serde_helpers::base64_string"
    )]
    pub receiver_username: String,

    /// Price per gas unit.
    pub gas_price: u64,

    /// Maximum gas the transaction may consume.
    pub gas_limit: u64,

    /// Call data: a built-in function invocation or a free-form note.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "serde_helpers::base64_bytes"
    )]
    pub data: Vec<u8>,

    /// Destination chain.
    #[serde(rename = "chainID")]
    pub chain_id: String,

    /// Transaction format version.
    pub version: u32,

    /// Option bit flags.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub options: u32,

    /// Guardian address (Bech32), for guarded accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian: Option<String>,

    /// Sender signature. Empty until signed.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "serde_helpers::hex_bytes"
    )]
    pub signature: Vec<u8>,

    /// Guardian co-signature. Empty until co-signed.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "serde_helpers::hex_bytes"
    )]
    pub guardian_signature: Vec<u8>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Transaction {
    /// The `data` field as text. Invalid UTF-8 is replaced, which never
    /// happens for factory-built transfer payloads.
    pub fn data_str(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// Returns `true` if the transaction carries a sender signature.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Returns `true` if a guardian is set.
    pub fn is_guarded(&self) -> bool {
        self.guardian.is_some()
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`] values.
///
/// # Usage
///
/// ```rust
/// use drt_sdk_core::address::Address;
/// use drt_sdk_core::transaction::TransactionBuilder;
///
/// let alice = Address::new_from_bech32(
///     "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8",
/// ).unwrap();
///
/// let tx = TransactionBuilder::new("D")
///     .sender(&alice)
///     .receiver(&alice)
///     .gas_limit(50_000)
///     .build();
/// assert_eq!(tx.version, 2);
/// ```
///
/// Defaults: `version` 2, `options` 0, `nonce` 0, `value` 0, empty data, and
/// the network's minimum gas price.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    chain_id: String,
    sender: String,
    receiver: String,
    nonce: u64,
    value: BigUint,
    gas_price: u64,
    gas_limit: u64,
    data: Vec<u8>,
    version: u32,
    options: u32,
    guardian: Option<String>,
}

impl TransactionBuilder {
    /// Creates a builder for a transaction on `chain_id`.
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            sender: String::new(),
            receiver: String::new(),
            nonce: 0,
            value: BigUint::default(),
            gas_price: MIN_GAS_PRICE,
            gas_limit: 0,
            data: Vec::new(),
            version: TRANSACTION_VERSION,
            options: TRANSACTION_OPTIONS,
            guardian: None,
        }
    }

    /// Sets the sender.
    pub fn sender(mut self, address: &Address) -> Self {
        self.sender = address.to_bech32();
        self
    }

    /// Sets the receiver.
    pub fn receiver(mut self, address: &Address) -> Self {
        self.receiver = address.to_bech32();
        self
    }

    /// Sets the sender's nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the native value.
    pub fn value(mut self, value: BigUint) -> Self {
        self.value = value;
        self
    }

    /// Sets the gas price.
    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Sets the gas limit.
    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Sets the call data.
    pub fn data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Overrides the transaction version. Only needed for testing upgrades.
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Sets the option flags.
    pub fn options(mut self, options: u32) -> Self {
        self.options = options;
        self
    }

    /// Sets the guardian.
    pub fn guardian(mut self, address: &Address) -> Self {
        self.guardian = Some(address.to_bech32());
        self
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    pub fn build(self) -> Transaction {
        Transaction {
            nonce: self.nonce,
            value: self.value,
            receiver: self.receiver,
            sender: self.sender,
            sender_username: String::new(),
            receiver_username: String::new(),
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            data: self.data,
            chain_id: self.chain_id,
            version: self.version,
            options: self.options,
            guardian: self.guardian,
            signature: Vec::new(),
            guardian_signature: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

mod serde_helpers {
    pub mod biguint_string {
        use num_bigint::BigUint;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&value.to_string())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }

    pub mod base64_bytes {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&STANDARD.encode(bytes))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
            let s = String::deserialize(deserializer)?;
            STANDARD.decode(s).map_err(serde::de::Error::custom)
        }
    }

    pub mod base64_string {
        use serde::{Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
            super::base64_bytes::serialize(value.as_bytes(), serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
            let bytes = super::base64_bytes::deserialize(deserializer)?;
            String::from_utf8(bytes).map_err(serde::de::Error::custom)
        }
    }

    pub mod hex_bytes {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&hex::encode(bytes))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
            let s = String::deserialize(deserializer)?;
            hex::decode(s).map_err(serde::de::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8";
    const BOB: &str = "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk";

    fn sample_tx() -> Transaction {
        TransactionBuilder::new("D")
            .sender(&Address::new_from_bech32(ALICE).unwrap())
            .receiver(&Address::new_from_bech32(BOB).unwrap())
            .value(BigUint::from(1_000_000_000_000_000_000u64))
            .gas_limit(63_500)
            .data(b"test data".to_vec())
            .build()
    }

    #[test]
    fn builder_applies_defaults() {
        let tx = TransactionBuilder::new("T").build();
        assert_eq!(tx.chain_id, "T");
        assert_eq!(tx.version, 2);
        assert_eq!(tx.options, 0);
        assert_eq!(tx.nonce, 0);
        assert_eq!(tx.gas_price, 1_000_000_000);
        assert_eq!(tx.value, BigUint::default());
        assert!(tx.data.is_empty());
        assert!(!tx.is_signed());
        assert!(!tx.is_guarded());
    }

    #[test]
    fn builder_sets_fields() {
        let tx = sample_tx();
        assert_eq!(tx.sender, ALICE);
        assert_eq!(tx.receiver, BOB);
        assert_eq!(tx.gas_limit, 63_500);
        assert_eq!(tx.data_str(), "test data");
    }

    #[test]
    fn guardian_is_rendered_as_bech32() {
        let bob = Address::new_from_bech32(BOB).unwrap();
        let tx = TransactionBuilder::new("D").guardian(&bob).options(2).build();
        assert_eq!(tx.guardian.as_deref(), Some(BOB));
        assert!(tx.is_guarded());
    }

    #[test]
    fn json_uses_network_field_names() {
        let json = serde_json::to_value(sample_tx()).unwrap();
        assert_eq!(json["value"], "1000000000000000000");
        assert_eq!(json["chainID"], "D");
        assert_eq!(json["gasLimit"], 63_500);
        assert_eq!(json["gasPrice"], 1_000_000_000u64);
        assert_eq!(json["data"], "dGVzdCBkYXRh");
        assert!(json.get("signature").is_none());
        assert!(json.get("options").is_none());
        assert!(json.get("senderUsername").is_none());
    }

    #[test]
    fn transaction_json_roundtrip() {
        let mut tx = sample_tx();
        tx.signature = vec![0xCA, 0xFE];
        tx.sender_username = "alice".to_string();
        let json = serde_json::to_string(&tx).unwrap();
        let recovered: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, recovered);
    }
}
