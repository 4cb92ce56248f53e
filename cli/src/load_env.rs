//! Environment variables read by the CLI.
//!
//! - `PET_PASSPORT_RPC_URL`: RPC endpoint, defaults to a local validator.
//! - `OWNER_SECRET_KEY`: the signing keypair, as a JSON byte array or base58. Only required when
//!   `--keypair` isn't passed.

use std::{
    path::Path,
    sync::LazyLock,
};

use anyhow::Context;
use pet_passport_client::transactions::DEFAULT_RPC_URL;
use solana_keypair::Keypair;
use solana_sdk::bs58;

pub fn rpc_url() -> String {
    static URL: LazyLock<String> = LazyLock::new(|| {
        std::env::var("PET_PASSPORT_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.into())
    });

    URL.clone()
}

pub fn owner_keypair() -> anyhow::Result<Keypair> {
    let kp_str = std::env::var("OWNER_SECRET_KEY")
        .context("Environment variable OWNER_SECRET_KEY must be set or --keypair passed.")?;
    parse_keypair(kp_str.trim())
}

/// Reads a keypair file in the JSON byte array format `solana-keygen` writes.
pub fn read_keypair_file(path: &Path) -> anyhow::Result<Keypair> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Couldn't read keypair file {}", path.display()))?;
    parse_keypair(contents.trim())
}

/// Parses a secret key given as a JSON byte array or a base58 string.
pub fn parse_keypair(kp_str: &str) -> anyhow::Result<Keypair> {
    let byte_vec: Vec<u8> = if kp_str.starts_with('[') {
        serde_json::from_str(kp_str).context("Invalid JSON keypair")?
    } else {
        bs58::decode(kp_str)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}
