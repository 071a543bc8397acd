//! Off-thread execution of the memory-hard operations.
//!
//! Argon2id at default cost takes a noticeable fraction of a second, so
//! async callers run sealing and unsealing on tokio's blocking pool.
//! Passwords are moved into the task and wiped when it finishes.

use seedvault_crypto::{seal, unseal, SealOptions};
use seedvault_types::{EncryptedEnvelope, MnemonicPhrase, ProtocolMagic, Seed};
use tokio::task::JoinError;
use zeroize::Zeroizing;

use crate::binder::CryptoWallet;
use crate::error::WalletError;
use crate::wallet_seed::{change_password, crypto_wallet_from_seed, generate_wallet_seed, WalletSeed};

fn join_error(e: JoinError) -> WalletError {
    WalletError::Worker(e.to_string())
}

/// Seal a seed on the blocking pool.
pub async fn seal_blocking_task(
    password: String,
    seed: Seed,
    options: SealOptions,
) -> Result<EncryptedEnvelope, WalletError> {
    let password = Zeroizing::new(password);
    let envelope = tokio::task::spawn_blocking(move || seal(&password, &seed, &options))
        .await
        .map_err(join_error)??;
    Ok(envelope)
}

/// Unseal an envelope on the blocking pool.
pub async fn unseal_blocking_task(
    password: String,
    envelope: EncryptedEnvelope,
) -> Result<Seed, WalletError> {
    let password = Zeroizing::new(password);
    let seed = tokio::task::spawn_blocking(move || unseal(&password, &envelope))
        .await
        .map_err(join_error)??;
    Ok(seed)
}

pub async fn generate_wallet_seed_task(
    phrase: MnemonicPhrase,
    password: Option<String>,
    options: SealOptions,
) -> Result<WalletSeed, WalletError> {
    let password = password.map(Zeroizing::new);
    tokio::task::spawn_blocking(move || {
        generate_wallet_seed(&phrase, password.as_deref().map(String::as_str), &options)
    })
    .await
    .map_err(join_error)?
}

pub async fn crypto_wallet_from_seed_task(
    wallet_seed: WalletSeed,
    password: Option<String>,
    protocol_magic: ProtocolMagic,
) -> Result<CryptoWallet, WalletError> {
    let password = password.map(Zeroizing::new);
    tokio::task::spawn_blocking(move || {
        crypto_wallet_from_seed(
            &wallet_seed,
            password.as_deref().map(String::as_str),
            protocol_magic,
        )
    })
    .await
    .map_err(join_error)?
}

pub async fn change_password_task(
    wallet_seed: WalletSeed,
    old_password: Option<String>,
    new_password: Option<String>,
    options: SealOptions,
) -> Result<WalletSeed, WalletError> {
    let old_password = old_password.map(Zeroizing::new);
    let new_password = new_password.map(Zeroizing::new);
    tokio::task::spawn_blocking(move || {
        change_password(
            &wallet_seed,
            old_password.as_deref().map(String::as_str),
            new_password.as_deref().map(String::as_str),
            &options,
        )
    })
    .await
    .map_err(join_error)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedvault_crypto::CryptoError;
    use seedvault_types::KdfParams;

    fn fast() -> SealOptions {
        SealOptions {
            kdf: KdfParams {
                memory_kib: 128,
                iterations: 1,
                parallelism: 1,
                ..KdfParams::default()
            },
            ..SealOptions::default()
        }
    }

    #[tokio::test]
    async fn seal_then_unseal_off_thread() {
        let seed = Seed::from_bytes([5; 32]);
        let envelope = seal_blocking_task("pw".to_string(), seed.duplicate(), fast())
            .await
            .unwrap();
        let back = unseal_blocking_task("pw".to_string(), envelope).await.unwrap();
        assert_eq!(back.as_bytes(), seed.as_bytes());
    }

    #[tokio::test]
    async fn wrong_password_off_thread() {
        let envelope = seal_blocking_task("pw".to_string(), Seed::from_bytes([5; 32]), fast())
            .await
            .unwrap();
        let err = unseal_blocking_task("nope".to_string(), envelope)
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::Crypto(CryptoError::Authentication)));
    }
}
