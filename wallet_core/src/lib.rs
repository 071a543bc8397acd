//! Wallet core library for seedvault.
//!
//! Carries a wallet from its recovery phrase to an operable, network-bound
//! wallet:
//! - Phrase generation and validation
//! - Seed derivation, optionally sealed under a password
//! - Binding a seed to one network's protocol magic
//! - JSON persistence of the sealed or raw seed
//! - Password changes without exposing the seed
//! - Blocking-pool wrappers for async callers

pub mod binder;
pub mod config;
pub mod error;
pub mod storage;
pub mod wallet_seed;
pub mod worker;

pub use binder::{bind, CryptoWallet};
pub use config::WalletConfig;
pub use error::WalletError;
pub use storage::{
    from_json, load_wallet_seed, save_wallet_seed, to_json, WalletSeedFile, RECORD_VERSION,
};
pub use wallet_seed::{
    change_password, change_password_with, crypto_wallet_from_seed, generate_new_phrase,
    generate_wallet_seed, generate_wallet_seed_with, is_valid_phrase, WalletSeed,
};
pub use worker::{
    change_password_task, crypto_wallet_from_seed_task, generate_wallet_seed_task,
    seal_blocking_task, unseal_blocking_task,
};
