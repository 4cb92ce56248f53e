//! Runs each subcommand against the RPC client.

use anyhow::Context;
use colored::Colorize;
use pet_passport_client::{
    context::passport::PassportContext,
    logs::{
        fmt_sol,
        log_divider,
    },
    print_kv,
    query::{
        fetch_all_pets,
        fetch_pet_by_address,
        fetch_pets_by_owner,
        PetBatch,
    },
    transactions::CustomRpcClient,
    views::{
        PetPassportView,
        PetSummary,
    },
    LogColor,
};
use pet_passport_interface::{
    instructions::{
        AddHealthRecordInstructionData,
        AddLocationRecordInstructionData,
        AddVaccinationRecordInstructionData,
        CreatePetPassportInstructionData,
    },
    state::pet_data::PetData,
};
use solana_address::Address;
use solana_keypair::Keypair;
use solana_sdk::{
    message::Instruction,
    signature::Signer,
};

use crate::cli::{
    CliArgs,
    Command,
};

pub async fn run(
    args: &CliArgs,
    rpc: &CustomRpcClient,
    ctx: &PassportContext,
) -> anyhow::Result<()> {
    match &args.command {
        Command::Create {
            name,
            species,
            breed,
            birth_date,
        } => {
            let owner = args.signer()?;
            let pet_data = Keypair::new();
            let mint = Keypair::new();
            let data = CreatePetPassportInstructionData::new(
                name,
                species.to_string(),
                breed,
                *birth_date,
            );
            let ix =
                ctx.create_pet_passport(owner.pubkey(), pet_data.pubkey(), mint.pubkey(), &data);
            rpc.send_and_confirm_txn(&owner, &[&pet_data, &mint], &[ix])
                .await?;

            print_kv!("Created passport", pet_data.pubkey(), LogColor::Header);
            print_kv!("Mint", mint.pubkey());
            show(rpc, &pet_data.pubkey()).await
        }
        Command::AddVaccination {
            pet,
            vaccine,
            date,
            next_due,
            vet,
        } => {
            let data = AddVaccinationRecordInstructionData::new(vaccine, *date, *next_due, vet);
            send_as_owner(args, rpc, pet, |owner| {
                ctx.add_vaccination_record(*pet, owner, &data)
            })
            .await
        }
        Command::AddHealth {
            pet,
            record_type,
            date,
            description,
            vet,
        } => {
            let data = AddHealthRecordInstructionData::new(
                record_type.to_string(),
                *date,
                description,
                vet,
            );
            send_as_owner(args, rpc, pet, |owner| {
                ctx.add_health_record(*pet, owner, &data)
            })
            .await
        }
        Command::AddLocation {
            pet,
            location,
            event_type,
            date,
        } => {
            let timestamp = date.unwrap_or_else(|| chrono::Utc::now().timestamp());
            let data =
                AddLocationRecordInstructionData::new(location, timestamp, event_type.to_string());
            send_as_owner(args, rpc, pet, |owner| {
                ctx.add_location_record(*pet, owner, &data)
            })
            .await
        }
        Command::Transfer { pet, new_owner } => {
            send_as_owner(args, rpc, pet, |owner| ctx.update_owner(*pet, owner, *new_owner)).await
        }
        Command::Verify { pet, kind, index } => {
            let verifier = args.signer()?;
            let ix = ctx.verify_record(*pet, verifier.pubkey(), *kind, *index);
            rpc.send_and_confirm_txn(&verifier, &[], &[ix]).await?;
            show(rpc, pet).await
        }
        Command::List { owner, all } => {
            let batch = match (owner, all) {
                (_, true) => fetch_all_pets(rpc, ctx).await?,
                (Some(owner), false) => fetch_pets_by_owner(rpc, ctx, owner).await?,
                (None, false) => fetch_pets_by_owner(rpc, ctx, &args.signer()?.pubkey()).await?,
            };
            print_batch(&batch);
            Ok(())
        }
        Command::Show { pet } => show(rpc, pet).await,
        Command::Airdrop { lamports } => {
            let owner = args.signer()?.pubkey();
            rpc.fund_account(&owner, *lamports).await?;
            print_kv!("Balance", fmt_sol(rpc.get_balance(&owner).await?));
            Ok(())
        }
    }
}

/// Sends an instruction signed by the owner keypair, then shows the updated passport.
///
/// Ownership is enforced by the program; a non-owner signer gets the remote rejection.
async fn send_as_owner(
    args: &CliArgs,
    rpc: &CustomRpcClient,
    pet: &Address,
    build: impl FnOnce(Address) -> Instruction,
) -> anyhow::Result<()> {
    let owner = args.signer()?;
    rpc.send_and_confirm_txn(&owner, &[], &[build(owner.pubkey())])
        .await?;
    show(rpc, pet).await
}

async fn fetch_existing(rpc: &CustomRpcClient, pet: &Address) -> anyhow::Result<PetData> {
    fetch_pet_by_address(rpc, pet)
        .await
        .with_context(|| format!("Couldn't load pet {pet}"))?
        .with_context(|| format!("No pet passport exists at {pet}"))
}

async fn show(rpc: &CustomRpcClient, pet: &Address) -> anyhow::Result<()> {
    let data = fetch_existing(rpc, pet).await?;
    print!(
        "{}",
        PetPassportView {
            address: pet,
            pet: &data,
        }
    );
    Ok(())
}

fn print_batch(batch: &PetBatch) {
    if batch.is_empty() {
        println!("{}", "No pets found.".color(LogColor::Gray));
    }
    for pet in batch.pets.iter() {
        println!("{}", PetSummary(pet));
    }
    if !batch.skipped.is_empty() {
        log_divider();
        print_kv!("Skipped accounts", batch.skipped.len(), LogColor::Warning);
    }
}
