//! # Transaction Factories
//!
//! Factories map typed intents to complete, unsigned transactions. They are
//! pure: the same arguments and config always yield byte-identical `data`
//! and the same `gas_limit`.
//!
//! ```text
//! transfer_transactions_factory.rs: native, single-token, NFT and multi transfers
//! token_transfers_data_builder.rs: the DCDT* built-in function argument lists
//! error.rs: TransferError
//! ```

pub mod error;
pub mod token_transfers_data_builder;
pub mod transfer_transactions_factory;

pub use error::TransferError;
pub use token_transfers_data_builder::TokenTransfersDataBuilder;
pub use transfer_transactions_factory::TransferTransactionsFactory;
