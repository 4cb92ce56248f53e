//! Reads and decodes Pet Passport accounts.
//!
//! Transport is abstracted behind [`AccountReader`] so the decoding rules can be exercised against
//! in-memory accounts. Batch queries never fail because of one bad account: undecodable entries
//! are logged and reported in [`PetBatch::skipped`].

use std::fmt;

use anyhow::Context;
use colored::Colorize;
use pet_passport_interface::{
    error::CodecError,
    state::pet_data::PetData,
};
use solana_address::Address;
use solana_client::{
    rpc_config::{
        RpcAccountInfoConfig,
        RpcProgramAccountsConfig,
        UiAccountEncoding,
    },
    rpc_filter::{
        Memcmp,
        RpcFilterType,
    },
};
use solana_commitment_config::CommitmentConfig;

use crate::{
    context::passport::PassportContext,
    eprint_kv,
    transactions::CustomRpcClient,
    LogColor,
};

/// Read access to account data.
#[allow(async_fn_in_trait)]
pub trait AccountReader {
    /// The account's data, or `None` if no account exists at `address`.
    async fn get_account_data(&self, address: &Address) -> anyhow::Result<Option<Vec<u8>>>;

    /// Every account owned by `program_id` whose data starts with `prefix`.
    async fn scan_program_accounts(
        &self,
        program_id: &Address,
        prefix: &[u8],
    ) -> anyhow::Result<Vec<(Address, Vec<u8>)>>;
}

impl AccountReader for CustomRpcClient {
    async fn get_account_data(&self, address: &Address) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self
            .client
            .get_account_with_commitment(address, CommitmentConfig::confirmed())
            .await
            .context("Couldn't retrieve account data")?
            .value
            .map(|account| account.data))
    }

    async fn scan_program_accounts(
        &self,
        program_id: &Address,
        prefix: &[u8],
    ) -> anyhow::Result<Vec<(Address, Vec<u8>)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                0,
                prefix.to_vec(),
            ))]),
            account_config: RpcAccountInfoConfig {
                commitment: Some(CommitmentConfig::confirmed()),
                encoding: Some(UiAccountEncoding::Base64),
                data_slice: None,
                min_context_slot: None,
            },
            with_context: Some(false),
            sort_results: Some(true),
        };

        let accounts = self
            .client
            .get_program_accounts_with_config(program_id, config)
            .await
            .context("Couldn't scan program accounts")?;

        Ok(accounts
            .into_iter()
            .map(|(address, account)| (address, account.data))
            .collect())
    }
}

#[derive(Debug)]
pub enum QueryError {
    Transport(anyhow::Error),
    MalformedEntity {
        address: Address,
        source: CodecError,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Transport(error) => write!(f, "transport failure: {error:#}"),
            QueryError::MalformedEntity { address, source } => {
                write!(f, "account {address} is not a valid pet passport: {source}")
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Transport(error) => Some(&**error),
            QueryError::MalformedEntity { source, .. } => Some(source),
        }
    }
}

impl From<anyhow::Error> for QueryError {
    fn from(error: anyhow::Error) -> Self {
        QueryError::Transport(error)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PetAccount {
    pub address: Address,
    pub data: PetData,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedAccount {
    pub address: Address,
    pub error: CodecError,
}

/// The decoded result of one program scan, in scan order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PetBatch {
    pub pets: Vec<PetAccount>,
    pub skipped: Vec<SkippedAccount>,
}

impl PetBatch {
    /// Decodes each account independently. Failures are logged and collected, never propagated.
    pub fn decode(accounts: Vec<(Address, Vec<u8>)>) -> Self {
        let mut batch = PetBatch::default();
        for (address, data) in accounts {
            match PetData::unpack(&data) {
                Ok(data) => batch.pets.push(PetAccount { address, data }),
                Err(error) => {
                    eprint_kv!(
                        "Skipping malformed account",
                        format!("{address}: {error}"),
                        LogColor::Warning
                    );
                    batch.skipped.push(SkippedAccount { address, error });
                }
            }
        }
        batch
    }

    /// Keeps the pets whose owner is exactly `owner`, in their original order.
    pub fn owned_by(mut self, owner: &Address) -> Self {
        self.pets.retain(|pet| pet.data.is_owned_by(owner));
        self
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

/// Every pet passport account the program owns.
pub async fn fetch_all_pets<R: AccountReader>(
    reader: &R,
    ctx: &PassportContext,
) -> Result<PetBatch, QueryError> {
    let accounts = reader
        .scan_program_accounts(&ctx.program_id, ctx.account_discriminator())
        .await?;

    Ok(PetBatch::decode(accounts))
}

/// The pet passports currently owned by `owner`.
pub async fn fetch_pets_by_owner<R: AccountReader>(
    reader: &R,
    ctx: &PassportContext,
    owner: &Address,
) -> Result<PetBatch, QueryError> {
    Ok(fetch_all_pets(reader, ctx).await?.owned_by(owner))
}

/// Fetches and decodes one pet data account. `Ok(None)` if the account doesn't exist.
///
/// The discriminator isn't checked, so any account at `address` is decoded positionally.
pub async fn fetch_pet_by_address<R: AccountReader>(
    reader: &R,
    address: &Address,
) -> Result<Option<PetData>, QueryError> {
    let Some(data) = reader.get_account_data(address).await? else {
        return Ok(None);
    };

    PetData::unpack(&data)
        .map(Some)
        .map_err(|source| QueryError::MalformedEntity {
            address: *address,
            source,
        })
}
