// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # DRT SDK Core Library
//!
//! Builds unsigned DRT transactions. Given who pays, who receives, and what
//! moves (native value, one token, an NFT, or a bundle of tokens), the
//! factories produce a transaction whose `data` field and `gas_limit` match
//! what the network's execution layer expects, byte for byte.
//!
//! Nothing here touches the network, holds keys, or keeps state. Everything
//! is a pure function of its inputs and a [`TransactionsFactoryConfig`].
//!
//! ## Architecture
//!
//! - **address**: Bech32 account addresses and their raw bytes.
//! - **tokens**: Token references, transfers, and identifier normalisation.
//! - **codec**: Hex argument encoding for the `@`-separated data grammar.
//! - **transaction**: The unsigned transaction record and its builder.
//! - **transaction_factories**: Transfer encoding and gas pricing.
//! - **config**: Chain identifiers, defaults, and the gas schedule.
//!
//! [`TransactionsFactoryConfig`]: config::TransactionsFactoryConfig

pub mod address;
pub mod codec;
pub mod config;
pub mod tokens;
pub mod transaction;
pub mod transaction_factories;

pub use address::Address;
pub use config::TransactionsFactoryConfig;
pub use tokens::{Token, TokenComputer, TokenTransfer};
pub use transaction::Transaction;
pub use transaction_factories::TransferTransactionsFactory;
