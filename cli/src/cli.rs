use std::path::PathBuf;

use clap::{
    command,
    Parser,
    Subcommand,
};
use pet_passport_client::{
    transactions::DEFAULT_FUND_AMOUNT,
    views::parse_date,
};
use pet_passport_interface::{
    state::records::RecordKind,
    vocabulary::{
        HealthRecordType,
        LocationEventType,
        Species,
    },
};
use solana_address::Address;
use solana_keypair::Keypair;

use crate::load_env;

#[derive(Parser)]
#[command(name = "pet-passport")]
pub struct CliArgs {
    /// RPC endpoint. Falls back to `PET_PASSPORT_RPC_URL`, then a local validator.
    #[arg(short = 'u', long, global = true)]
    pub url: Option<String>,

    /// Path to a JSON keypair file. Falls back to `OWNER_SECRET_KEY`.
    #[arg(short = 'k', long, global = true)]
    pub keypair: Option<PathBuf>,

    /// Compute unit limit to request for each transaction.
    #[arg(long, global = true)]
    pub compute_budget: Option<u32>,

    /// Don't print submitted instructions.
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    pub fn rpc_url(&self) -> String {
        self.url.clone().unwrap_or_else(load_env::rpc_url)
    }

    /// The signer for every transaction, loaded only by commands that send one.
    pub fn signer(&self) -> anyhow::Result<Keypair> {
        match &self.keypair {
            Some(path) => load_env::read_keypair_file(path),
            None => load_env::owner_keypair(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Creates a pet passport and mints its NFT.
    Create {
        #[arg(long)]
        name: String,
        /// e.g. Dog, Cat, "Guinea Pig".
        #[arg(long)]
        species: Species,
        #[arg(long)]
        breed: String,
        /// YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        birth_date: i64,
    },
    AddVaccination {
        #[arg(long)]
        pet: Address,
        #[arg(long)]
        vaccine: String,
        /// YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        date: i64,
        /// YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        next_due: i64,
        #[arg(long)]
        vet: String,
    },
    AddHealth {
        #[arg(long)]
        pet: Address,
        #[arg(long, default_value_t = HealthRecordType::default())]
        record_type: HealthRecordType,
        /// YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        date: i64,
        #[arg(long)]
        description: String,
        #[arg(long)]
        vet: String,
    },
    AddLocation {
        #[arg(long)]
        pet: Address,
        #[arg(long)]
        location: String,
        #[arg(long, default_value_t = LocationEventType::default())]
        event_type: LocationEventType,
        /// YYYY-MM-DD. Defaults to now.
        #[arg(long, value_parser = parse_date)]
        date: Option<i64>,
    },
    /// Hands a passport over to a new owner.
    Transfer {
        #[arg(long)]
        pet: Address,
        #[arg(long)]
        new_owner: Address,
    },
    /// Marks a vaccination or health record as verified.
    Verify {
        #[arg(long)]
        pet: Address,
        /// vaccination or health.
        #[arg(long)]
        kind: RecordKind,
        #[arg(long)]
        index: u32,
    },
    /// Lists the signer's pets, another owner's, or every pet.
    List {
        #[arg(long, conflicts_with = "all")]
        owner: Option<Address>,
        #[arg(long)]
        all: bool,
    },
    /// Shows a single passport with all of its records.
    Show { pet: Address },
    /// Requests an airdrop to the signer.
    Airdrop {
        #[arg(long, default_value_t = DEFAULT_FUND_AMOUNT)]
        lamports: u64,
    },
}
