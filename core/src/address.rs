//! # Account Addresses
//!
//! A DRT account is identified by 32 raw bytes. Humans see those bytes as a
//! Bech32 string with the `moa` prefix:
//!
//! ```text
//! raw bytes (32)  ->  Bech32("moa", bytes)  ->  moa1qyu5wthldzr8wx5c9ucg...
//! ```
//!
//! The transfer encoders need both views: the Bech32 form goes into the
//! transaction's `sender`/`receiver` fields, and the hex of the raw bytes is
//! embedded as an argument of NFT and multi-transfer calls.

use bech32::{Bech32, Hrp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::ADDRESS_LENGTH;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while parsing or constructing an [`Address`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The Bech32 string could not be decoded.
    #[error("bech32 decode error: {0}")]
    Bech32Decode(String),

    /// The human-readable prefix is not a valid Bech32 HRP.
    #[error("invalid HRP '{0}'")]
    InvalidHrp(String),

    /// The decoded address has a prefix other than the one required.
    #[error("unexpected HRP: expected '{expected}', got '{got}'")]
    UnexpectedHrp {
        /// The prefix the caller asked for.
        expected: String,
        /// The prefix actually found.
        got: String,
    },

    /// The payload is not exactly [`ADDRESS_LENGTH`] bytes.
    #[error("invalid address data length: expected {expected} bytes, got {got}")]
    InvalidDataLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },

    /// The hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// An account address: 32 raw bytes plus the prefix used to render them.
///
/// Two addresses are equal when their raw bytes are equal, whatever prefix
/// they were parsed with.
///
/// # Examples
///
/// ```
/// use drt_sdk_core::address::Address;
///
/// let bob = Address::new_from_bech32(
///     "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk",
/// ).unwrap();
/// assert_eq!(
///     bob.to_hex(),
///     "8049d639e5a6980d1cd2392abcce41029cda74a1563523a202f09641cc2618f8",
/// );
/// ```
#[derive(Clone)]
pub struct Address {
    bytes: [u8; ADDRESS_LENGTH],
    hrp: Hrp,
}

impl Address {
    /// Wraps raw bytes, rendered with the given prefix.
    pub fn new(bytes: [u8; ADDRESS_LENGTH], hrp: &str) -> Result<Self, AddressError> {
        let hrp = Hrp::parse(hrp).map_err(|_| AddressError::InvalidHrp(hrp.to_string()))?;
        Ok(Self { bytes, hrp })
    }

    /// Parses a Bech32 address. Any valid prefix is accepted.
    pub fn new_from_bech32(value: &str) -> Result<Self, AddressError> {
        let (hrp, data) =
            bech32::decode(value).map_err(|e| AddressError::Bech32Decode(e.to_string()))?;
        Ok(Self {
            bytes: to_fixed_bytes(&data)?,
            hrp,
        })
    }

    /// Parses a Bech32 address and checks that it carries `expected_hrp`.
    pub fn new_from_bech32_with_hrp(value: &str, expected_hrp: &str) -> Result<Self, AddressError> {
        let address = Self::new_from_bech32(value)?;
        if address.hrp() != expected_hrp {
            return Err(AddressError::UnexpectedHrp {
                expected: expected_hrp.to_string(),
                got: address.hrp().to_string(),
            });
        }
        Ok(address)
    }

    /// Parses 64 hex characters of raw address bytes.
    pub fn new_from_hex(value: &str, hrp: &str) -> Result<Self, AddressError> {
        let data = hex::decode(value).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::new(to_fixed_bytes(&data)?, hrp)
    }

    /// Encodes the address as a Bech32 string.
    pub fn to_bech32(&self) -> String {
        bech32::encode::<Bech32>(self.hrp, &self.bytes)
            .expect("a valid HRP with a 32-byte payload always encodes")
    }

    /// Lowercase hex of the raw bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.bytes
    }

    /// The human-readable prefix this address renders with.
    pub fn hrp(&self) -> &str {
        self.hrp.as_str()
    }

    /// Returns `true` for smart contract addresses, whose first eight bytes
    /// are zero.
    pub fn is_smart_contract(&self) -> bool {
        self.bytes[..8].iter().all(|b| *b == 0)
    }
}

fn to_fixed_bytes(data: &[u8]) -> Result<[u8; ADDRESS_LENGTH], AddressError> {
    <[u8; ADDRESS_LENGTH]>::try_from(data).map_err(|_| AddressError::InvalidDataLength {
        expected: ADDRESS_LENGTH,
        got: data.len(),
    })
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Address {}

impl std::hash::Hash for Address {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Consistent with PartialEq: the prefix is presentation only.
        self.bytes.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bech32())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_bech32())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_bech32(s)
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bech32())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::new_from_bech32(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
