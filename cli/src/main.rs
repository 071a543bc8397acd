//! seedvault command line for creating and using wallet seeds.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use seedvault_crypto::{decode_address, verify_signature};
use seedvault_types::{CipherId, MnemonicPhrase, NetworkId, Signature};
use seedvault_utils::LogFormat;
use seedvault_wallet_core::{
    change_password_task, crypto_wallet_from_seed_task, generate_new_phrase,
    generate_wallet_seed_task, is_valid_phrase, load_wallet_seed, save_wallet_seed, WalletConfig,
};

#[derive(Parser)]
#[command(name = "seedvault", about = "Wallet seed lifecycle tool")]
struct Cli {
    /// Network to bind wallets to: "mainnet" or "testnet".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "SEEDVAULT_NETWORK")]
    network: Option<String>,

    /// Explicit protocol magic, overriding the network's.
    #[arg(long, env = "SEEDVAULT_PROTOCOL_MAGIC")]
    protocol_magic: Option<u32>,

    /// Wallet seed file.
    #[arg(long, env = "SEEDVAULT_WALLET_FILE")]
    wallet_file: Option<PathBuf>,

    /// Cipher for sealing: "chacha20-poly1305" or "aes-256-gcm".
    #[arg(long, env = "SEEDVAULT_CIPHER")]
    cipher: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SEEDVAULT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "SEEDVAULT_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "SEEDVAULT_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print a fresh 12-word recovery phrase.
    Generate,

    /// Check a recovery phrase's words and checksum.
    Validate {
        /// The phrase, quoted.
        phrase: String,

        /// Required number of words.
        #[arg(long, default_value_t = 12)]
        words: usize,
    },

    /// Derive a wallet seed from a phrase and write it to the wallet file.
    Create {
        /// The recovery phrase, quoted.
        #[arg(long, env = "SEEDVAULT_PHRASE", hide_env_values = true)]
        phrase: String,

        /// Seal the seed under this password. Without it, or when empty, the
        /// seed is stored raw.
        #[arg(long, env = "SEEDVAULT_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Overwrite an existing wallet file.
        #[arg(long)]
        force: bool,
    },

    /// Show the wallet file's form and, once opened, its address.
    Inspect {
        #[arg(long, env = "SEEDVAULT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Reseal the wallet seed under a new password.
    ChangePassword {
        #[arg(long, env = "SEEDVAULT_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        #[arg(
            long,
            env = "SEEDVAULT_NEW_PASSWORD",
            hide_env_values = true,
            required_unless_present = "unseal"
        )]
        new_password: Option<String>,

        /// Store the seed unsealed instead of under a new password.
        #[arg(long, conflicts_with = "new_password")]
        unseal: bool,
    },

    /// Sign a message with the wallet, for the configured network.
    Sign {
        message: String,

        #[arg(long, env = "SEEDVAULT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Verify a hex signature against an address on the configured network.
    Verify {
        message: String,

        #[arg(long)]
        signature: String,

        #[arg(long)]
        address: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;

    let log_format: LogFormat = config
        .log_format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    seedvault_utils::init_logging(log_format, &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    run(cli.command, config).await
}

/// Merge the optional config file with CLI flags and env vars.
fn resolve_config(cli: &Cli) -> anyhow::Result<WalletConfig> {
    let mut config = match &cli.config {
        Some(path) => WalletConfig::from_toml_file(path)?,
        None => WalletConfig::default(),
    };

    if let Some(network) = &cli.network {
        config.network = network
            .parse::<NetworkId>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if let Some(magic) = cli.protocol_magic {
        config.protocol_magic = Some(magic);
    }
    if let Some(path) = &cli.wallet_file {
        config.wallet_file = path.clone();
    }
    if let Some(cipher) = &cli.cipher {
        config.seal.cipher = parse_cipher(cipher)?;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    Ok(config)
}

fn parse_cipher(s: &str) -> anyhow::Result<CipherId> {
    match s.to_lowercase().as_str() {
        "chacha20-poly1305" | "chacha20" => Ok(CipherId::ChaCha20Poly1305),
        "aes-256-gcm" | "aes" => Ok(CipherId::Aes256Gcm),
        other => bail!("unknown cipher: {other}"),
    }
}

async fn run(command: Command, config: WalletConfig) -> anyhow::Result<()> {
    let magic = config.resolve_magic();

    match command {
        Command::Generate => {
            let phrase = generate_new_phrase()?;
            println!("{}", phrase.as_str());
        }

        Command::Validate { phrase, words } => {
            if !is_valid_phrase(&phrase, words) {
                bail!("invalid recovery phrase");
            }
            println!("valid");
        }

        Command::Create {
            phrase,
            password,
            force,
        } => {
            let phrase = MnemonicPhrase::new(phrase);
            let path = &config.wallet_file;
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let wallet_seed =
                generate_wallet_seed_task(phrase, password.clone(), config.seal).await?;
            save_wallet_seed(&wallet_seed, path)?;
            let wallet = crypto_wallet_from_seed_task(wallet_seed, password, magic).await?;
            println!("{}", wallet.address());
        }

        Command::Inspect { password } => {
            let wallet_seed = load(&config.wallet_file)?;
            match wallet_seed.envelope() {
                Some(envelope) => println!(
                    "sealed: {} / argon2id m={} t={} p={}",
                    envelope.cipher.as_str(),
                    envelope.kdf.memory_kib,
                    envelope.kdf.iterations,
                    envelope.kdf.parallelism
                ),
                None => println!("unsealed"),
            }
            if wallet_seed.is_sealed() && password.as_deref().map_or(true, str::is_empty) {
                return Ok(());
            }
            let wallet = crypto_wallet_from_seed_task(wallet_seed, password, magic).await?;
            println!("network magic: {}", wallet.protocol_magic());
            println!("public key:    {}", wallet.public_key());
            println!("address:       {}", wallet.address());
        }

        Command::ChangePassword {
            password,
            new_password,
            unseal,
        } => {
            if unseal {
                tracing::warn!("wallet seed will be stored without a password");
            }
            let path = &config.wallet_file;
            let wallet_seed = load(path)?;
            let resealed =
                change_password_task(wallet_seed, password, new_password, config.seal).await?;
            save_wallet_seed(&resealed, path)?;
            if resealed.is_sealed() {
                println!("password changed");
            } else {
                println!("password removed");
            }
        }

        Command::Sign { message, password } => {
            let wallet_seed = load(&config.wallet_file)?;
            let wallet = crypto_wallet_from_seed_task(wallet_seed, password, magic).await?;
            println!("{}", wallet.sign(message.as_bytes()));
        }

        Command::Verify {
            message,
            signature,
            address,
        } => {
            let public_key = decode_address(&address, magic)
                .with_context(|| format!("address is not valid on network {magic}"))?;
            let signature = Signature::from_hex(&signature).context("malformed signature hex")?;
            if !verify_signature(message.as_bytes(), &signature, &public_key, magic) {
                bail!("signature does not verify");
            }
            println!("ok");
        }
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<seedvault_wallet_core::WalletSeed> {
    load_wallet_seed(path).with_context(|| format!("no usable wallet at {}", path.display()))
}
