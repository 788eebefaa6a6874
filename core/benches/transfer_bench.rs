// Transfer encoding benchmarks.
//
// Covers identifier validation, single-token encoding, and multi-transfer
// encoding at various batch sizes. The factory sits on the hot path of
// wallets that batch-build transactions, so regressions here show up as
// user-visible latency.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use drt_sdk_core::address::Address;
use drt_sdk_core::config::TransactionsFactoryConfig;
use drt_sdk_core::tokens::{Token, TokenComputer, TokenTransfer};
use drt_sdk_core::transaction_factories::TransferTransactionsFactory;

const ALICE: &str = "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8";
const BOB: &str = "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk";

fn bench_identifier_parts(c: &mut Criterion) {
    let computer = TokenComputer::new();

    c.bench_function("tokens/identifier_parts", |b| {
        b.iter(|| computer.identifier_parts("FOO-123456"));
    });
}

fn bench_fungible_transfer(c: &mut Criterion) {
    let config = TransactionsFactoryConfig::new("D");
    let factory = TransferTransactionsFactory::new(&config, TokenComputer::new());
    let alice = Address::new_from_bech32(ALICE).unwrap();
    let bob = Address::new_from_bech32(BOB).unwrap();
    let transfers = [TokenTransfer::new(Token::fungible("FOO-123456"), 1_000_000u64)];

    c.bench_function("factory/fungible_transfer", |b| {
        b.iter(|| factory.create_transaction_for_dcdt_token_transfer(&alice, &bob, &transfers));
    });
}

fn bench_multi_transfer(c: &mut Criterion) {
    let config = TransactionsFactoryConfig::new("D");
    let factory = TransferTransactionsFactory::new(&config, TokenComputer::new());
    let alice = Address::new_from_bech32(ALICE).unwrap();
    let bob = Address::new_from_bech32(BOB).unwrap();

    let mut group = c.benchmark_group("factory/multi_transfer");
    for size in [2usize, 10, 50] {
        let transfers: Vec<TokenTransfer> = (1..=size as u64)
            .map(|nonce| TokenTransfer::new(Token::new("NFT-123456", nonce), 1u64))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &transfers, |b, transfers| {
            b.iter(|| factory.create_transaction_for_dcdt_token_transfer(&alice, &bob, transfers));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_identifier_parts,
    bench_fungible_transfer,
    bench_multi_transfer
);
criterion_main!(benches);
