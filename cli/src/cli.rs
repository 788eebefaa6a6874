//! # CLI Interface
//!
//! Defines the command-line argument structure for `drt-tx` using `clap`
//! derive. Supports four subcommands: `native`, `dcdt`, `transfer`, and
//! `config`.

use clap::{Args, Parser, Subcommand};
use num_bigint::BigUint;
use std::path::PathBuf;

use drt_sdk_core::address::Address;
use drt_sdk_core::tokens::{parse_amount, Token, TokenComputer, TokenError, TokenTransfer};

/// DRT transfer transaction builder.
///
/// Builds an unsigned transaction and prints it as JSON on stdout, ready to
/// be signed and broadcast by another tool. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "drt-tx",
    about = "Build unsigned DRT transfer transactions",
    version,
    propagate_version = true
)]
pub struct DrtTxCli {
    /// Path to a JSON factory configuration. Missing fields take the
    /// protocol defaults.
    #[arg(long, short = 'c', env = "DRT_TX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Chain identifier. Overrides the value from `--config`.
    #[arg(long, env = "DRT_CHAIN_ID", global = true)]
    pub chain_id: Option<String>,

    /// Log output format: `pretty` or `json`.
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: String,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "drt_tx=info,drt_sdk_core=info", global = true)]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Move native value, optionally with a note in the data field.
    Native(NativeArgs),
    /// Move one or more tokens.
    Dcdt(DcdtArgs),
    /// Move native value, tokens, or both.
    Transfer(TransferArgs),
    /// Print the effective factory configuration and exit.
    Config,
}

/// Sender and receiver, shared by every transfer subcommand.
#[derive(Args, Debug)]
pub struct Parties {
    /// Sender address (Bech32).
    #[arg(long)]
    pub sender: Address,

    /// Receiver address (Bech32).
    #[arg(long)]
    pub receiver: Address,
}

/// Arguments for the `native` subcommand.
#[derive(Args, Debug)]
pub struct NativeArgs {
    #[command(flatten)]
    pub parties: Parties,

    /// Amount in the smallest denomination.
    #[arg(long, value_parser = parse_amount)]
    pub amount: BigUint,

    /// Free-form note stored in the data field.
    #[arg(long)]
    pub data: Option<String>,
}

/// Arguments for the `dcdt` subcommand.
#[derive(Args, Debug)]
pub struct DcdtArgs {
    #[command(flatten)]
    pub parties: Parties,

    /// Token transfer as `IDENTIFIER:AMOUNT` or `IDENTIFIER:NONCE:AMOUNT`.
    /// Repeat for multi-transfers; order is preserved.
    #[arg(long = "transfer", short = 't', required = true, value_parser = parse_transfer)]
    pub transfers: Vec<TokenTransfer>,
}

/// Arguments for the `transfer` subcommand.
#[derive(Args, Debug)]
pub struct TransferArgs {
    #[command(flatten)]
    pub parties: Parties,

    /// Native amount in the smallest denomination.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub amount: BigUint,

    /// Token transfer as `IDENTIFIER:AMOUNT` or `IDENTIFIER:NONCE:AMOUNT`.
    #[arg(long = "transfer", short = 't', value_parser = parse_transfer)]
    pub transfers: Vec<TokenTransfer>,

    /// Free-form note. Only valid without token transfers.
    #[arg(long)]
    pub data: Option<String>,
}

/// Parses `IDENTIFIER:AMOUNT` or `IDENTIFIER:NONCE:AMOUNT`.
///
/// In the two-part form the identifier may carry its nonce as a hex suffix
/// (`NFT-123456-0a:1`). In the three-part form the nonce is decimal.
pub fn parse_transfer(value: &str) -> Result<TokenTransfer, TokenError> {
    let computer = TokenComputer::new();
    let parts: Vec<&str> = value.split(':').collect();

    match parts.as_slice() {
        [identifier, amount] => {
            let id_parts = computer.parse_extended_identifier_parts(identifier)?;
            let collection = format!("{}-{}", id_parts.ticker, id_parts.random_sequence);
            Ok(TokenTransfer::new(
                Token::new(collection, id_parts.nonce),
                parse_amount(amount)?,
            ))
        }
        [identifier, nonce, amount] => {
            computer.ensure_identifier_has_correct_structure(identifier)?;
            let nonce = nonce
                .parse::<u64>()
                .map_err(|_| TokenError::InvalidIdentifier {
                    identifier: value.to_string(),
                    reason: format!("invalid nonce '{}'", nonce),
                })?;
            Ok(TokenTransfer::new(
                Token::new(*identifier, nonce),
                parse_amount(amount)?,
            ))
        }
        _ => Err(TokenError::InvalidIdentifier {
            identifier: value.to_string(),
            reason: "expected IDENTIFIER:AMOUNT or IDENTIFIER:NONCE:AMOUNT".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        DrtTxCli::command().debug_assert();
    }

    #[test]
    fn parse_fungible_transfer() {
        let transfer = parse_transfer("FOO-123456:1000000").unwrap();
        assert_eq!(transfer.token, Token::fungible("FOO-123456"));
        assert_eq!(transfer.amount, BigUint::from(1_000_000u32));
    }

    #[test]
    fn parse_nft_transfer_forms_agree() {
        let explicit = parse_transfer("NFT-123456:10:1").unwrap();
        let extended = parse_transfer("NFT-123456-0a:1").unwrap();
        assert_eq!(explicit, extended);
        assert_eq!(explicit.token, Token::new("NFT-123456", 10));
    }

    #[test]
    fn parse_transfer_rejects_garbage() {
        assert!(parse_transfer("FOO-123456").is_err());
        assert!(parse_transfer("FOO-123456:abc").is_err());
        assert!(parse_transfer("FOO-123456:x:1").is_err());
        assert!(parse_transfer("foo:1").is_err());
        assert!(parse_transfer("A:B:C:D").is_err());
    }

    #[test]
    fn parses_dcdt_command_line() {
        let cli = DrtTxCli::try_parse_from([
            "drt-tx",
            "--chain-id",
            "D",
            "dcdt",
            "--sender",
            "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8",
            "--receiver",
            "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk",
            "-t",
            "NFT-123456:10:1",
            "-t",
            "TEST-987654:1:1",
        ])
        .unwrap();

        assert_eq!(cli.chain_id.as_deref(), Some("D"));
        match cli.command {
            Commands::Dcdt(args) => assert_eq!(args.transfers.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn dcdt_requires_a_transfer() {
        let result = DrtTxCli::try_parse_from([
            "drt-tx",
            "dcdt",
            "--sender",
            "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8",
            "--receiver",
            "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk",
        ]);
        assert!(result.is_err());
    }
}
