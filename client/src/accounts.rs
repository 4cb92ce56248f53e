//! Account lists for each Pet Passport instruction, in the order the program reads them.
//!
//! The program resolves accounts by position, so these orders are part of the wire contract.

use pet_passport_interface::{
    discriminators::Discriminators,
    ids::{
        METADATA_PROGRAM_ID,
        RENT_SYSVAR_ID,
        SYSTEM_PROGRAM_ID,
        TOKEN_PROGRAM_ID,
    },
    instructions::InstructionData,
};
use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

/// Assembles an instruction from its account list and full payload (opcode included).
pub fn build_instruction(
    program_id: Address,
    accounts: Vec<AccountMeta>,
    data: Vec<u8>,
) -> Instruction {
    Instruction {
        program_id,
        accounts,
        data,
    }
}

/// Pairs an account list with a typed payload.
pub trait InstructionAccounts {
    fn account_metas(&self) -> Vec<AccountMeta>;

    fn create_instruction<T: InstructionData>(
        &self,
        program_id: Address,
        discriminators: &Discriminators,
        data: &T,
    ) -> Instruction {
        build_instruction(
            program_id,
            self.account_metas(),
            data.pack_instruction_data(discriminators),
        )
    }
}

/// Accounts for `create_pet_passport`.
///
/// `pet_data` and `mint` are freshly generated keypairs, so both sign alongside the owner.
#[derive(Clone, Debug)]
pub struct CreatePetPassport {
    pub pet_data: Address,
    pub owner: Address,
    pub mint: Address,
    pub metadata: Address,
    pub system_program: Address,
    pub token_program: Address,
    pub rent: Address,
    pub metadata_program: Address,
}

impl CreatePetPassport {
    /// Uses the canonical program and sysvar ids.
    pub fn new(pet_data: Address, owner: Address, mint: Address, metadata: Address) -> Self {
        Self {
            pet_data,
            owner,
            mint,
            metadata,
            system_program: SYSTEM_PROGRAM_ID,
            token_program: TOKEN_PROGRAM_ID,
            rent: RENT_SYSVAR_ID,
            metadata_program: METADATA_PROGRAM_ID,
        }
    }
}

impl InstructionAccounts for CreatePetPassport {
    fn account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pet_data, true),
            AccountMeta::new(self.owner, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new(self.mint, true),
            AccountMeta::new(self.metadata, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.rent, false),
            AccountMeta::new_readonly(self.metadata_program, false),
        ]
    }
}

/// Accounts for every owner-gated mutation: `add_*_record` and `update_owner`.
#[derive(Clone, Debug)]
pub struct OwnerMutation {
    pub pet_data: Address,
    pub owner: Address,
}

impl InstructionAccounts for OwnerMutation {
    fn account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pet_data, false),
            AccountMeta::new_readonly(self.owner, true),
        ]
    }
}

/// Accounts for `verify_record`. The verifier is whoever signs; authorization happens remotely.
#[derive(Clone, Debug)]
pub struct VerifyRecord {
    pub pet_data: Address,
    pub verifier: Address,
}

impl InstructionAccounts for VerifyRecord {
    fn account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pet_data, false),
            AccountMeta::new_readonly(self.verifier, true),
        ]
    }
}
