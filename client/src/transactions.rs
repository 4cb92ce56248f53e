//! Lightweight, nonblocking RPC client utilities for funding accounts, sending transactions,
//! and pretty-printing Pet Passport instructions and program errors.

use std::collections::HashSet;

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use itertools::Itertools;
use pet_passport_interface::{
    discriminators::Discriminators,
    error::PetPassportError,
    instructions::PetPassportInstructionData,
};
use solana_address::Address;
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;

use crate::{
    logs::fmt_sol,
    print_kv,
    LogColor,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        CustomRpcClient::new_from_url(DEFAULT_RPC_URL, Default::default())
    }
}

impl CustomRpcClient {
    pub fn new(client: Option<RpcClient>, config: Option<SendTransactionConfig>) -> Self {
        match (client, config) {
            (Some(client), Some(config)) => Self { client, config },
            (client, config) => {
                let CustomRpcClient {
                    client: default_client,
                    config: default_config,
                } = Default::default();
                Self {
                    client: client.unwrap_or(default_client),
                    config: config.unwrap_or(default_config),
                }
            }
        }
    }

    pub fn new_from_url(url: &str, config: SendTransactionConfig) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
            config,
        }
    }

    /// Requests an airdrop of `lamports` and waits for it to land.
    pub async fn fund_account(&self, address: &Address, lamports: u64) -> anyhow::Result<()> {
        fund(&self.client, address, lamports).await
    }

    pub async fn get_balance(&self, address: &Address) -> anyhow::Result<u64> {
        self.client
            .get_balance(address)
            .await
            .context("Couldn't fetch balance")
    }

    /// Sends and confirms a transaction paid for by `payer`, which always signs.
    ///
    /// `signers` holds any additional signers, e.g. the new pet data and mint keypairs when
    /// creating a passport.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        send_transaction_with_config(&self.client, payer, signers, instructions, &self.config).await
    }
}

const MAX_TRIES: u8 = 20;

pub const DEFAULT_FUND_AMOUNT: u64 = 1_000_000_000;

async fn fund(rpc: &RpcClient, address: &Address, lamports: u64) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, lamports)
        .await
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .await
        .context("Couldn't confirm transaction")?
        && i < MAX_TRIES
    {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        i += 1;
    }

    if i == MAX_TRIES {
        bail!("Airdrop did not land.");
    }

    print_kv!("Airdropped", fmt_sol(lamports), LogColor::Info);

    Ok(())
}

#[derive(Clone)]
pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
    /// Instructions for these programs are decoded and printed when `debug_logs` is on.
    pub program_id_filter: HashSet<Address>,
    /// The table used to decode those instructions.
    pub discriminators: Discriminators,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
            program_id_filter: HashSet::from([pet_passport_interface::program::ID]),
            discriminators: Discriminators::PET_PASSPORT,
        }
    }
}

async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> anyhow::Result<Signature> {
    let bh = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch latest blockhash")?;

    let final_instructions: &[Instruction] = &[
        config.compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat();

    let msg = Message::new(final_instructions, Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(
        &std::iter::once(payer)
            .chain(signers.iter().copied())
            .collect::<Vec<_>>(),
        bh,
    )
    .context("Couldn't sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(signature) => {
            if matches!(config.debug_logs, Some(true)) {
                print_kv!("Signature", signature, LogColor::Header);
                print_kv!("Sender", payer.pubkey());
                for line in fmt_instructions(final_instructions, config) {
                    println!("{line}");
                }
            }
            Ok(signature)
        }
        Err(error) => {
            if let Some((index, program_error)) = program_error(&error) {
                print_kv!(
                    format!("Instruction {index} failed"),
                    format!("{program_error:?}: {program_error}"),
                    LogColor::Error
                );
            }
            print_kv!("Payer", payer.pubkey(), LogColor::Error);
            Err(error).context("Failed transaction submission")
        }
    }
}

/// Renders each instruction for a program in `config.program_id_filter` as its decoded payload.
fn fmt_instructions(instructions: &[Instruction], config: &SendTransactionConfig) -> Vec<String> {
    instructions
        .iter()
        .enumerate()
        .filter(|(_, ix)| config.program_id_filter.contains(&ix.program_id))
        .map(|(i, ix)| {
            match PetPassportInstructionData::unpack(&ix.data, &config.discriminators) {
                Ok(data) => format!("  [{i}] {}: {data:?}", data.instruction()),
                Err(e) => format!("  [{i}] undecodable instruction: {e}"),
            }
        })
        .collect_vec()
}

/// Extracts the failing instruction index and Pet Passport error from a rejected transaction.
pub fn program_error(error: &ClientError) -> Option<(u8, PetPassportError)> {
    match error.get_transaction_error()? {
        TransactionError::InstructionError(index, InstructionError::Custom(code)) => {
            PetPassportError::from_repr(code).map(|e| (index, e))
        }
        _ => None,
    }
}
