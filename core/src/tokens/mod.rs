//! # Tokens
//!
//! Token references, transfers, and the [`TokenComputer`] that validates and
//! renders their identifiers.
//!
//! ```text
//! types.rs: Token, TokenTransfer, TokenIdentifierParts, TokenError, parse_amount
//! computer.rs: TokenComputer: identifier splitting, nonce hex, extended identifiers
//! ```

pub mod computer;
pub mod types;

pub use computer::TokenComputer;
pub use types::{parse_amount, Token, TokenError, TokenIdentifierParts, TokenTransfer};
