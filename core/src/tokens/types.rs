//! Value types for tokens and token transfers.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while interpreting token identifiers and amounts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The identifier does not have the `TICKER-abcdef` shape.
    #[error("invalid token identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// The offending identifier.
        identifier: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An amount string is empty, signed, or not a base-10 integer.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}

impl TokenError {
    pub(crate) fn invalid_identifier(identifier: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A token, or one nonce of a token collection.
///
/// `nonce == 0` is a fungible token. Any other nonce names a single NFT or
/// semi-fungible instance within the collection `identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Collection identifier, e.g. `FOO-123456`.
    pub identifier: String,
    /// Instance nonce; zero for fungible tokens.
    #[serde(default)]
    pub nonce: u64,
}

impl Token {
    /// Creates a token reference.
    pub fn new(identifier: impl Into<String>, nonce: u64) -> Self {
        Self {
            identifier: identifier.into(),
            nonce,
        }
    }

    /// Creates a fungible token reference (nonce zero).
    pub fn fungible(identifier: impl Into<String>) -> Self {
        Self::new(identifier, 0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nonce == 0 {
            write!(f, "{}", self.identifier)
        } else {
            write!(f, "{}#{}", self.identifier, self.nonce)
        }
    }
}

// ---------------------------------------------------------------------------
// TokenTransfer
// ---------------------------------------------------------------------------

/// An amount of one token to move.
///
/// For fungible tokens `amount` is in the token's smallest denomination. For
/// NFTs it is the quantity of that nonce: 1 for a true NFT, possibly more
/// for a semi-fungible token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
    /// What is being transferred.
    pub token: Token,
    /// How much of it.
    pub amount: BigUint,
}

impl TokenTransfer {
    /// Creates a transfer.
    pub fn new(token: Token, amount: impl Into<BigUint>) -> Self {
        Self {
            token,
            amount: amount.into(),
        }
    }
}

impl fmt::Display for TokenTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.token)
    }
}

// ---------------------------------------------------------------------------
// TokenIdentifierParts
// ---------------------------------------------------------------------------

/// The components of an extended identifier such as `NFT-123456-0a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentifierParts {
    /// Uppercase ticker, e.g. `NFT`.
    pub ticker: String,
    /// Six hex characters assigned at issuance, e.g. `123456`.
    pub random_sequence: String,
    /// Instance nonce; zero when the identifier had no nonce suffix.
    pub nonce: u64,
}

// ---------------------------------------------------------------------------
// Amount parsing
// ---------------------------------------------------------------------------

/// Parses a base-10 amount in the smallest denomination.
///
/// Only ASCII digits are accepted: no sign, no separators, no decimals.
///
/// ```
/// use drt_sdk_core::tokens::parse_amount;
///
/// assert_eq!(parse_amount("1000000").unwrap().to_string(), "1000000");
/// assert!(parse_amount("-5").is_err());
/// ```
pub fn parse_amount(value: &str) -> Result<BigUint, TokenError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenError::InvalidAmount(value.to_string()));
    }
    BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| TokenError::InvalidAmount(value.to_string()))
}
