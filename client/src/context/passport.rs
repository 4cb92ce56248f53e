//! Program-level context for building Pet Passport instructions.

use pet_passport_interface::{
    discriminators::{
        Discriminator,
        Discriminators,
    },
    instructions::{
        AddHealthRecordInstructionData,
        AddLocationRecordInstructionData,
        AddVaccinationRecordInstructionData,
        CreatePetPassportInstructionData,
        UpdateOwnerInstructionData,
        VerifyRecordInstructionData,
    },
    state::records::RecordKind,
};
use solana_address::Address;
use solana_instruction::Instruction;

use crate::{
    accounts::{
        CreatePetPassport,
        InstructionAccounts,
        OwnerMutation,
        VerifyRecord,
    },
    pda::find_metadata_address,
};

/// The program id and discriminator table every instruction and query is built against.
///
/// Implements helper methods for building all program instructions.
#[derive(Clone, Debug)]
pub struct PassportContext {
    pub program_id: Address,
    pub discriminators: Discriminators,
}

impl Default for PassportContext {
    fn default() -> Self {
        Self {
            program_id: pet_passport_interface::program::ID,
            discriminators: Discriminators::PET_PASSPORT,
        }
    }
}

impl PassportContext {
    pub fn new(program_id: Address, discriminators: Discriminators) -> Self {
        Self {
            program_id,
            discriminators,
        }
    }

    /// The prefix every `PetData` account's data starts with.
    pub fn account_discriminator(&self) -> &Discriminator {
        &self.discriminators.pet_data_account
    }

    /// Creates the pet data account and mints its passport NFT.
    ///
    /// `pet_data` and `mint` must be new keypairs that sign the transaction with the owner. The
    /// metadata account is derived from `mint`.
    pub fn create_pet_passport(
        &self,
        owner: Address,
        pet_data: Address,
        mint: Address,
        data: &CreatePetPassportInstructionData,
    ) -> Instruction {
        let (metadata, _bump) = find_metadata_address(&mint);
        CreatePetPassport::new(pet_data, owner, mint, metadata).create_instruction(
            self.program_id,
            &self.discriminators,
            data,
        )
    }

    pub fn add_vaccination_record(
        &self,
        pet_data: Address,
        owner: Address,
        data: &AddVaccinationRecordInstructionData,
    ) -> Instruction {
        OwnerMutation { pet_data, owner }.create_instruction(
            self.program_id,
            &self.discriminators,
            data,
        )
    }

    pub fn add_health_record(
        &self,
        pet_data: Address,
        owner: Address,
        data: &AddHealthRecordInstructionData,
    ) -> Instruction {
        OwnerMutation { pet_data, owner }.create_instruction(
            self.program_id,
            &self.discriminators,
            data,
        )
    }

    pub fn add_location_record(
        &self,
        pet_data: Address,
        owner: Address,
        data: &AddLocationRecordInstructionData,
    ) -> Instruction {
        OwnerMutation { pet_data, owner }.create_instruction(
            self.program_id,
            &self.discriminators,
            data,
        )
    }

    /// Transfers the passport. Only the current owner can sign this.
    pub fn update_owner(
        &self,
        pet_data: Address,
        owner: Address,
        new_owner: Address,
    ) -> Instruction {
        OwnerMutation { pet_data, owner }.create_instruction(
            self.program_id,
            &self.discriminators,
            &UpdateOwnerInstructionData::new(new_owner),
        )
    }

    /// Marks a record as verified. `kind` isn't checked locally; the program rejects locations.
    pub fn verify_record(
        &self,
        pet_data: Address,
        verifier: Address,
        kind: RecordKind,
        record_index: u32,
    ) -> Instruction {
        VerifyRecord { pet_data, verifier }.create_instruction(
            self.program_id,
            &self.discriminators,
            &VerifyRecordInstructionData::new(kind, record_index),
        )
    }
}
