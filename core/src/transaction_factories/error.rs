//! Error types for the transaction factories.
//!
//! Encoding is deterministic, so every failure here is a caller bug. Errors
//! are returned as soon as malformed input is seen and no partially built
//! transaction ever escapes.

use thiserror::Error;

use crate::tokens::TokenError;

/// Errors that can occur while building a transfer transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// A token transfer was requested with an empty transfer list.
    #[error("no token transfers provided")]
    EmptyTransferList,

    /// Free-form data was supplied together with token transfers. The
    /// built-in transfer functions leave no room for it.
    #[error("free-form data cannot be combined with token transfers")]
    DataWithTokenTransfers,

    /// The configured gas schedule pushes the gas limit past `u64::MAX`.
    #[error("gas limit overflows u64 under the configured gas schedule")]
    GasOverflow,

    /// A token identifier or amount was malformed.
    #[error(transparent)]
    Token(#[from] TokenError),
}
