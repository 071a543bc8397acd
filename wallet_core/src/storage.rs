//! JSON persistence for wallet seeds.
//!
//! A record holds exactly one of `seed` (hex, unsealed wallets) or
//! `encrypted_seed` (a sealed envelope). Files are written owner-only on
//! unix and replaced atomically through a temporary sibling.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use seedvault_types::{EncryptedEnvelope, Seed};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::error::WalletError;
use crate::wallet_seed::WalletSeed;

/// Current record format version.
pub const RECORD_VERSION: u32 = 1;

/// On-disk wallet seed record.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletSeedFile {
    pub version: u32,
    /// Hex-encoded raw seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_seed: Option<EncryptedEnvelope>,
}

impl Drop for WalletSeedFile {
    fn drop(&mut self) {
        if let Some(seed) = self.seed.as_mut() {
            seed.zeroize();
        }
    }
}

impl From<&WalletSeed> for WalletSeedFile {
    fn from(wallet_seed: &WalletSeed) -> Self {
        match wallet_seed {
            WalletSeed::Raw(seed) => Self {
                version: RECORD_VERSION,
                seed: Some(hex::encode(seed.as_bytes())),
                encrypted_seed: None,
            },
            WalletSeed::Sealed(envelope) => Self {
                version: RECORD_VERSION,
                seed: None,
                encrypted_seed: Some(envelope.clone()),
            },
        }
    }
}

impl TryFrom<WalletSeedFile> for WalletSeed {
    type Error = WalletError;

    fn try_from(mut file: WalletSeedFile) -> Result<Self, Self::Error> {
        if file.version != RECORD_VERSION {
            return Err(WalletError::InvalidRecord(format!(
                "unsupported record version: {}",
                file.version
            )));
        }

        match (file.seed.take(), file.encrypted_seed.take()) {
            (Some(seed_hex), None) => {
                let seed_hex = Zeroizing::new(seed_hex);
                let bytes = Zeroizing::new(
                    hex::decode(seed_hex.as_str())
                        .map_err(|e| WalletError::InvalidRecord(format!("invalid seed hex: {e}")))?,
                );
                let seed = Seed::from_slice(&bytes).ok_or_else(|| {
                    WalletError::InvalidRecord(format!(
                        "invalid seed length: expected {}, got {}",
                        Seed::LEN,
                        bytes.len()
                    ))
                })?;
                Ok(WalletSeed::Raw(seed))
            }
            (None, Some(envelope)) => Ok(WalletSeed::Sealed(envelope)),
            (Some(_), Some(_)) => Err(WalletError::InvalidRecord(
                "record holds both seed and encrypted_seed".to_string(),
            )),
            (None, None) => Err(WalletError::InvalidRecord(
                "record holds neither seed nor encrypted_seed".to_string(),
            )),
        }
    }
}

/// Serialize a wallet seed to its JSON record.
pub fn to_json(wallet_seed: &WalletSeed) -> Result<String, WalletError> {
    let file = WalletSeedFile::from(wallet_seed);
    serde_json::to_string_pretty(&file)
        .map_err(|e| WalletError::Storage(format!("JSON serialization failed: {e}")))
}

/// Parse a wallet seed from its JSON record.
pub fn from_json(json: &str) -> Result<WalletSeed, WalletError> {
    let file: WalletSeedFile = serde_json::from_str(json)
        .map_err(|e| WalletError::InvalidRecord(format!("invalid wallet seed JSON: {e}")))?;
    WalletSeed::try_from(file)
}

/// Save a wallet seed to a JSON file.
pub fn save_wallet_seed(wallet_seed: &WalletSeed, path: &Path) -> Result<(), WalletError> {
    let json = Zeroizing::new(to_json(wallet_seed)?);
    let tmp = temp_path(path);
    if let Err(e) = write_then_replace(&tmp, path, json.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    tracing::info!(path = %path.display(), sealed = wallet_seed.is_sealed(), "wallet seed saved");
    Ok(())
}

/// `wallet.json` -> `wallet.json.tmp`, next to the target.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_then_replace(tmp: &Path, path: &Path, contents: &[u8]) -> Result<(), WalletError> {
    let mut file = open_private(tmp)
        .map_err(|e| WalletError::Storage(format!("failed to create {}: {e}", tmp.display())))?;
    file.write_all(contents)
        .and_then(|_| file.sync_all())
        .map_err(|e| WalletError::Storage(format!("failed to write wallet seed file: {e}")))?;
    drop(file);
    fs::rename(tmp, path)
        .map_err(|e| WalletError::Storage(format!("failed to replace {}: {e}", path.display())))
}

/// Load a wallet seed from a JSON file.
pub fn load_wallet_seed(path: &Path) -> Result<WalletSeed, WalletError> {
    let json = Zeroizing::new(
        fs::read_to_string(path)
            .map_err(|e| WalletError::Storage(format!("failed to read {}: {e}", path.display())))?,
    );
    let wallet_seed = from_json(&json)?;
    tracing::debug!(path = %path.display(), sealed = wallet_seed.is_sealed(), "wallet seed loaded");
    Ok(wallet_seed)
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedvault_types::{CipherId, KdfParams};

    fn envelope() -> EncryptedEnvelope {
        EncryptedEnvelope {
            version: 1,
            cipher: CipherId::ChaCha20Poly1305,
            kdf: KdfParams::default(),
            salt: vec![1; 32],
            nonce: vec![2; 12],
            ciphertext: vec![3; 48],
        }
    }

    #[test]
    fn raw_record_has_only_seed() {
        let json = to_json(&WalletSeed::Raw(Seed::from_bytes([0xab; 32]))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["seed"], "ab".repeat(32));
        assert!(value.get("encrypted_seed").is_none());
    }

    #[test]
    fn sealed_record_has_only_envelope() {
        let json = to_json(&WalletSeed::Sealed(envelope())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("seed").is_none());
        assert_eq!(value["encrypted_seed"]["cipher"], "chacha20-poly1305");
        match from_json(&json).unwrap() {
            WalletSeed::Sealed(back) => assert_eq!(back, envelope()),
            WalletSeed::Raw(_) => panic!("expected sealed seed"),
        }
    }

    #[test]
    fn record_with_both_fields_rejected() {
        let json = format!(
            r#"{{"version":1,"seed":"{}","encrypted_seed":{}}}"#,
            "00".repeat(32),
            serde_json::to_string(&envelope()).unwrap()
        );
        assert!(matches!(from_json(&json), Err(WalletError::InvalidRecord(_))));
    }

    #[test]
    fn record_with_neither_field_rejected() {
        assert!(matches!(
            from_json(r#"{"version":1}"#),
            Err(WalletError::InvalidRecord(_))
        ));
    }

    #[test]
    fn unknown_version_rejected() {
        let json = format!(r#"{{"version":2,"seed":"{}"}}"#, "00".repeat(32));
        assert!(matches!(from_json(&json), Err(WalletError::InvalidRecord(_))));
    }

    #[test]
    fn short_seed_rejected() {
        let json = format!(r#"{{"version":1,"seed":"{}"}}"#, "00".repeat(16));
        assert!(matches!(from_json(&json), Err(WalletError::InvalidRecord(_))));
        assert!(matches!(
            from_json(r#"{"version":1,"seed":"zz"}"#),
            Err(WalletError::InvalidRecord(_))
        ));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        save_wallet_seed(&WalletSeed::Raw(Seed::from_bytes([7; 32])), &path).unwrap();
        match load_wallet_seed(&path).unwrap() {
            WalletSeed::Raw(seed) => assert_eq!(seed.as_bytes(), &[7; 32]),
            WalletSeed::Sealed(_) => panic!("expected raw seed"),
        }
        assert!(!dir.path().join("wallet.json.tmp").exists());
    }

    #[test]
    fn sibling_tmp_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let sibling = dir.path().join("wallet.tmp");
        fs::write(&sibling, "user data").unwrap();
        save_wallet_seed(&WalletSeed::Raw(Seed::from_bytes([7; 32])), &dir.path().join("wallet.json"))
            .unwrap();
        assert_eq!(fs::read_to_string(&sibling).unwrap(), "user data");
    }

    #[test]
    fn failed_replace_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory in the way makes the final rename fail.
        let path = dir.path().join("wallet.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = save_wallet_seed(&WalletSeed::Raw(Seed::from_bytes([7; 32])), &path).unwrap_err();
        assert!(matches!(err, WalletError::Storage(_)));
        assert!(!dir.path().join("wallet.json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        save_wallet_seed(&WalletSeed::Sealed(envelope()), &path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_wallet_seed(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, WalletError::Storage(_)));
    }
}
