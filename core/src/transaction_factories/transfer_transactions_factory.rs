//! Native and token transfer transactions.
//!
//! [`TransferTransactionsFactory`] turns a transfer intent into a complete,
//! unsigned [`Transaction`]: it picks the built-in function, renders the
//! `data` field, and prices it with the configured [`GasSchedule`].
//!
//! Gas is never estimated. It is an exact function of the operation, the
//! data length, and the number of transfers:
//!
//! ```text
//! native          min + len(data) * per_byte
//! fungible        min + len(data) * per_byte + dcdt_transfer + additional_dcdt
//! nft             min + len(data) * per_byte + dcdt_nft_transfer + additional_nft
//! multi (n)       min + len(data) * per_byte + n * multi_transfer + additional_nft
//! ```
//!
//! [`GasSchedule`]: crate::config::GasSchedule

use num_bigint::BigUint;
use num_traits::Zero;

use super::error::TransferError;
use super::token_transfers_data_builder::TokenTransfersDataBuilder;
use crate::address::Address;
use crate::codec;
use crate::config::TransactionsFactoryConfig;
use crate::tokens::{Token, TokenComputer, TokenTransfer};
use crate::transaction::{Transaction, TransactionBuilder};

// ---------------------------------------------------------------------------
// TransferShape
// ---------------------------------------------------------------------------

/// The three encodings a token transfer set can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransferShape<'t> {
    /// One transfer of a fungible token.
    SingleFungible(&'t TokenTransfer),
    /// One transfer of an NFT / SFT nonce.
    SingleNft(&'t TokenTransfer),
    /// Two or more transfers, whatever their kinds.
    Multi(&'t [TokenTransfer]),
}

impl<'t> TransferShape<'t> {
    fn classify(
        transfers: &'t [TokenTransfer],
        token_computer: &TokenComputer,
    ) -> Result<Self, TransferError> {
        match transfers {
            [] => Err(TransferError::EmptyTransferList),
            [single] if token_computer.is_fungible(&single.token) => {
                Ok(Self::SingleFungible(single))
            }
            [single] => Ok(Self::SingleNft(single)),
            many => Ok(Self::Multi(many)),
        }
    }
}

// ---------------------------------------------------------------------------
// TransferTransactionsFactory
// ---------------------------------------------------------------------------

/// Builds transfer transactions against a fixed configuration.
///
/// The factory borrows its config for its whole lifetime and holds no other
/// state, so one instance can be shared freely between threads.
///
/// ```
/// use drt_sdk_core::address::Address;
/// use drt_sdk_core::config::TransactionsFactoryConfig;
/// use drt_sdk_core::tokens::{Token, TokenComputer, TokenTransfer};
/// use drt_sdk_core::transaction_factories::TransferTransactionsFactory;
///
/// let config = TransactionsFactoryConfig::new("D");
/// let factory = TransferTransactionsFactory::new(&config, TokenComputer::new());
///
/// let alice = Address::new_from_bech32(
///     "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8",
/// ).unwrap();
/// let bob = Address::new_from_bech32(
///     "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk",
/// ).unwrap();
///
/// let tx = factory
///     .create_transaction_for_dcdt_token_transfer(
///         &alice,
///         &bob,
///         &[TokenTransfer::new(Token::fungible("FOO-123456"), 1_000_000u64)],
///     )
///     .unwrap();
/// assert_eq!(tx.data_str(), "DCDTTransfer@464f4f2d313233343536@0f4240");
/// assert_eq!(tx.gas_limit, 410_000);
/// ```
#[derive(Debug, Clone)]
pub struct TransferTransactionsFactory<'a> {
    config: &'a TransactionsFactoryConfig,
    token_computer: TokenComputer,
    data_builder: TokenTransfersDataBuilder,
}

impl<'a> TransferTransactionsFactory<'a> {
    /// Creates a factory bound to `config`.
    pub fn new(config: &'a TransactionsFactoryConfig, token_computer: TokenComputer) -> Self {
        Self {
            config,
            token_computer,
            data_builder: TokenTransfersDataBuilder::new(token_computer),
        }
    }

    /// The configuration this factory was built with.
    pub fn config(&self) -> &TransactionsFactoryConfig {
        self.config
    }

    /// Moves native value, optionally with a free-form note in `data`.
    pub fn create_transaction_for_native_token_transfer(
        &self,
        sender: &Address,
        receiver: &Address,
        native_amount: impl Into<BigUint>,
        data: Option<&str>,
    ) -> Result<Transaction, TransferError> {
        let data = data.map(|d| d.as_bytes().to_vec()).unwrap_or_default();
        let gas_limit = self
            .config
            .gas_schedule
            .move_balance(data.len())
            .ok_or(TransferError::GasOverflow)?;

        tracing::debug!(
            sender = %sender,
            receiver = %receiver,
            data_len = data.len(),
            gas_limit,
            "built native transfer"
        );

        Ok(self
            .transaction(sender, receiver, gas_limit)
            .value(native_amount.into())
            .data(data)
            .build())
    }

    /// Moves one or more tokens.
    ///
    /// A single fungible transfer is addressed to `receiver` directly. NFT
    /// and multi transfers are addressed to `sender` itself, with the real
    /// receiver carried inside `data`.
    pub fn create_transaction_for_dcdt_token_transfer(
        &self,
        sender: &Address,
        receiver: &Address,
        token_transfers: &[TokenTransfer],
    ) -> Result<Transaction, TransferError> {
        let shape = TransferShape::classify(token_transfers, &self.token_computer)?;
        let schedule = &self.config.gas_schedule;

        let (args, tx_receiver, extra_gas) = match shape {
            TransferShape::SingleFungible(transfer) => (
                self.data_builder.build_args_for_dcdt_transfer(transfer)?,
                receiver,
                schedule
                    .gas_limit_dcdt_transfer
                    .checked_add(schedule.additional_gas_for_dcdt_transfer),
            ),
            TransferShape::SingleNft(transfer) => (
                self.data_builder
                    .build_args_for_single_dcdt_nft_transfer(transfer, receiver)?,
                sender,
                schedule
                    .gas_limit_dcdt_nft_transfer
                    .checked_add(schedule.additional_gas_for_dcdt_nft_transfer),
            ),
            TransferShape::Multi(transfers) => (
                self.data_builder
                    .build_args_for_multi_dcdt_nft_transfer(receiver, transfers)?,
                sender,
                u64::try_from(transfers.len())
                    .ok()
                    .and_then(|count| schedule.gas_limit_multi_dcdt_nft_transfer.checked_mul(count))
                    .and_then(|gas| gas.checked_add(schedule.additional_gas_for_dcdt_nft_transfer)),
            ),
        };

        let data = codec::join_args(&args).into_bytes();
        let gas_limit = extra_gas
            .zip(schedule.move_balance(data.len()))
            .and_then(|(extra, base)| base.checked_add(extra))
            .ok_or(TransferError::GasOverflow)?;

        tracing::debug!(
            sender = %sender,
            receiver = %receiver,
            transfers = token_transfers.len(),
            data_len = data.len(),
            gas_limit,
            "built token transfer"
        );
        tracing::trace!(shape = ?shape, "token transfer shape");

        Ok(self
            .transaction(sender, tx_receiver, gas_limit)
            .data(data)
            .build())
    }

    /// General entry point covering native value, tokens, or both.
    ///
    /// - no tokens: a native transfer carrying `data`;
    /// - tokens only: same as
    ///   [`create_transaction_for_dcdt_token_transfer`](Self::create_transaction_for_dcdt_token_transfer);
    /// - tokens plus native value: the native value rides along as an extra
    ///   transfer of the configured native identifier, which always yields a
    ///   multi-transfer.
    ///
    /// `data` cannot be combined with token transfers.
    pub fn create_transaction_for_transfer(
        &self,
        sender: &Address,
        receiver: &Address,
        native_amount: impl Into<BigUint>,
        token_transfers: &[TokenTransfer],
        data: Option<&str>,
    ) -> Result<Transaction, TransferError> {
        let native_amount = native_amount.into();

        if token_transfers.is_empty() {
            return self.create_transaction_for_native_token_transfer(
                sender,
                receiver,
                native_amount,
                data,
            );
        }

        if data.is_some_and(|d| !d.is_empty()) {
            return Err(TransferError::DataWithTokenTransfers);
        }

        if native_amount.is_zero() {
            return self.create_transaction_for_dcdt_token_transfer(
                sender,
                receiver,
                token_transfers,
            );
        }

        let mut transfers = token_transfers.to_vec();
        transfers.push(TokenTransfer::new(
            Token::fungible(self.config.native_token_identifier.clone()),
            native_amount,
        ));
        self.create_transaction_for_dcdt_token_transfer(sender, receiver, &transfers)
    }

    fn transaction(
        &self,
        sender: &Address,
        receiver: &Address,
        gas_limit: u64,
    ) -> TransactionBuilder {
        TransactionBuilder::new(self.config.chain_id.clone())
            .sender(sender)
            .receiver(receiver)
            .gas_price(self.config.min_gas_price)
            .gas_limit(gas_limit)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
