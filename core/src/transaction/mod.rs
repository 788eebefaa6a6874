//! # Transaction Module
//!
//! The unsigned transaction record produced by every factory, and the
//! builder that assembles it.
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: a factory computes `data` and `gas_limit` and hands them
//!    to [`TransactionBuilder`].
//! 2. **Sign**: outside this crate; the caller fills `signature`.
//! 3. **Broadcast**: outside this crate; [`Transaction`] serializes to the
//!    JSON shape the network proxy accepts.
//!
//! ## Design Decisions
//!
//! - Amounts are [`num_bigint::BigUint`]. Token supplies routinely exceed
//!   `u64::MAX` once 18 decimals are involved.
//! - `sender` and `receiver` are stored in their Bech32 form, which is what
//!   goes over the wire.

pub mod builder;

pub use builder::{Transaction, TransactionBuilder};
