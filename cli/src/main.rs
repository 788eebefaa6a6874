// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # drt-tx
//!
//! Entry point for the `drt-tx` binary. Parses CLI arguments, initializes
//! logging, loads the factory configuration, builds the requested transfer,
//! and prints the unsigned transaction as JSON.
//!
//! - `native`: native value transfer
//! - `dcdt`: single or multi token transfer
//! - `transfer`: native value, tokens, or both
//! - `config`: print the effective configuration

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;

use drt_sdk_core::address::Address;
use drt_sdk_core::config::{network_name, TransactionsFactoryConfig, CHAIN_ID_DEVNET};
use drt_sdk_core::tokens::TokenComputer;
use drt_sdk_core::transaction_factories::TransferTransactionsFactory;

use cli::{Commands, DrtTxCli, Parties};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = DrtTxCli::parse();

    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    let config = load_config(cli.config.as_deref(), cli.chain_id)?;
    tracing::info!(
        chain_id = %config.chain_id,
        network = %network_name(&config.chain_id),
        "factory configuration loaded"
    );

    let factory = TransferTransactionsFactory::new(&config, TokenComputer::new());

    match cli.command {
        Commands::Native(args) => {
            check_parties(&args.parties, &config)?;
            let tx = factory
                .create_transaction_for_native_token_transfer(
                    &args.parties.sender,
                    &args.parties.receiver,
                    args.amount,
                    args.data.as_deref(),
                )
                .context("failed to build native transfer")?;
            print_json(&tx)
        }
        Commands::Dcdt(args) => {
            check_parties(&args.parties, &config)?;
            let tx = factory
                .create_transaction_for_dcdt_token_transfer(
                    &args.parties.sender,
                    &args.parties.receiver,
                    &args.transfers,
                )
                .context("failed to build token transfer")?;
            print_json(&tx)
        }
        Commands::Transfer(args) => {
            check_parties(&args.parties, &config)?;
            let tx = factory
                .create_transaction_for_transfer(
                    &args.parties.sender,
                    &args.parties.receiver,
                    args.amount,
                    &args.transfers,
                    args.data.as_deref(),
                )
                .context("failed to build transfer")?;
            print_json(&tx)
        }
        Commands::Config => print_json(&config),
    }
}

/// Reads the JSON config at `path`, or starts from the devnet defaults, then
/// applies the `--chain-id` override.
fn load_config(path: Option<&Path>, chain_id: Option<String>) -> Result<TransactionsFactoryConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            parse_config(&raw)
                .with_context(|| format!("failed to parse config file: {}", path.display()))?
        }
        None => TransactionsFactoryConfig::new(CHAIN_ID_DEVNET),
    };

    Ok(with_chain_id(config, chain_id))
}

fn parse_config(raw: &str) -> serde_json::Result<TransactionsFactoryConfig> {
    serde_json::from_str(raw)
}

fn with_chain_id(
    mut config: TransactionsFactoryConfig,
    chain_id: Option<String>,
) -> TransactionsFactoryConfig {
    if let Some(chain_id) = chain_id {
        config.chain_id = chain_id;
    }
    config
}

/// Both addresses must use the prefix of the configured network.
fn check_parties(parties: &Parties, config: &TransactionsFactoryConfig) -> Result<()> {
    check_hrp("sender", &parties.sender, config)?;
    check_hrp("receiver", &parties.receiver, config)
}

fn check_hrp(role: &str, address: &Address, config: &TransactionsFactoryConfig) -> Result<()> {
    if address.hrp() != config.address_hrp {
        bail!(
            "{} {} uses prefix '{}', expected '{}'",
            role,
            address,
            address.hrp(),
            config.address_hrp
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
