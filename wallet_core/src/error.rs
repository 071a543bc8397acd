use seedvault_crypto::CryptoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("wallet seed is sealed: a password is required")]
    PasswordRequired,

    #[error("invalid wallet seed record: {0}")]
    InvalidRecord(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("background worker failed: {0}")]
    Worker(String),
}

impl WalletError {
    /// True for a wrong password or a damaged envelope.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Crypto(CryptoError::Authentication))
    }

    /// True when the user typed a phrase that must be re-entered.
    pub fn is_invalid_phrase(&self) -> bool {
        matches!(self, Self::Crypto(CryptoError::InvalidPhrase(_)))
    }
}
