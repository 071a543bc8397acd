use thiserror::Error;

/// Errors raised by the wallet secret lifecycle primitives.
///
/// `Authentication` deliberately carries no detail: a wrong password and a
/// corrupted envelope must look the same to the caller.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid mnemonic phrase: {0}")]
    InvalidPhrase(String),

    #[error("cipher error: {0}")]
    Cipher(String),

    #[error("authentication failed: wrong password or corrupted data")]
    Authentication,

    #[error("secure random source unavailable: {0}")]
    RandomnessFailure(String),
}
