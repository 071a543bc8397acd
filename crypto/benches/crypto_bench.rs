use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seedvault_crypto::sealer::SealOptions;
use seedvault_types::{MnemonicStrength, ProtocolMagic, Seed};

const PHRASE: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";

fn mnemonic_generate_bench(c: &mut Criterion) {
    c.bench_function("mnemonic_generate_12w", |b| {
        b.iter(|| seedvault_crypto::generate_mnemonic(black_box(MnemonicStrength::Bits128)))
    });
}

fn mnemonic_validate_bench(c: &mut Criterion) {
    c.bench_function("mnemonic_validate_12w", |b| {
        b.iter(|| seedvault_crypto::validate_mnemonic(black_box(PHRASE), 12))
    });
}

fn derive_seed_bench(c: &mut Criterion) {
    c.bench_function("derive_seed_12w", |b| {
        b.iter(|| seedvault_crypto::derive_seed(black_box(PHRASE)))
    });
}

fn seal_default_bench(c: &mut Criterion) {
    let seed = Seed::from_bytes([7u8; 32]);
    let options = SealOptions::default();
    let mut group = c.benchmark_group("sealer");
    group.sample_size(10);
    group.bench_function("seal_argon2id_64MiB", |b| {
        b.iter(|| seedvault_crypto::seal(black_box("correct-horse"), &seed, &options))
    });
    let envelope = seedvault_crypto::seal("correct-horse", &seed, &options).unwrap();
    group.bench_function("unseal_argon2id_64MiB", |b| {
        b.iter(|| seedvault_crypto::unseal(black_box("correct-horse"), &envelope))
    });
    group.finish();
}

fn sign_bench(c: &mut Criterion) {
    let kp = seedvault_crypto::keypair_from_wallet_seed(&Seed::from_bytes([9u8; 32]));
    let msg = [42u8; 128];

    c.bench_function("ed25519_sign_128B", |b| {
        b.iter(|| seedvault_crypto::sign_message(black_box(&msg), &kp.private, ProtocolMagic::MAINNET))
    });
}

criterion_group!(
    benches,
    mnemonic_generate_bench,
    mnemonic_validate_bench,
    derive_seed_bench,
    seal_default_bench,
    sign_bench,
);
criterion_main!(benches);
