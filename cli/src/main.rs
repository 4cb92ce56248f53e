//! Command line client for the Pet Passport program.
//!
//! See [`crate::load_env`] for the environment variables it reads.

use clap::Parser;
use pet_passport_client::{
    context::passport::PassportContext,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
};

use crate::cli::CliArgs;

pub mod cli;
pub mod commands;
pub mod load_env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let rpc = CustomRpcClient::new_from_url(
        &args.rpc_url(),
        SendTransactionConfig {
            compute_budget: args.compute_budget,
            debug_logs: Some(!args.quiet),
            ..Default::default()
        },
    );
    let ctx = PassportContext::default();

    commands::run(&args, &rpc, &ctx).await
}
