//! The 8-byte discriminators that tag account data and instruction payloads.
//!
//! The values belong to the deployed program and are not derived here. They are grouped into a
//! [`Discriminators`] table so that a different deployment (or a test fixture) can supply its own
//! values without touching the codec.

use crate::instructions::PetPassportInstruction;

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// Immutable table of every account and instruction discriminator used by the codec.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Discriminators {
    /// Prefix of every `PetData` account's data.
    pub pet_data_account: Discriminator,
    pub create_pet_passport: Discriminator,
    pub update_owner: Discriminator,
    pub add_vaccination_record: Discriminator,
    pub add_health_record: Discriminator,
    pub add_location_record: Discriminator,
    pub verify_record: Discriminator,
}

impl Discriminators {
    /// The values used by the deployed Pet Passport program.
    #[rustfmt::skip]
    pub const PET_PASSPORT: Self = Self {
        pet_data_account:       [167, 1, 40, 45, 213, 3, 76, 101],
        create_pet_passport:    [205, 90, 94, 251, 191, 195, 83, 241],
        update_owner:           [164, 188, 124, 254, 132, 26, 198, 178],
        add_vaccination_record: [165, 255, 41, 165, 48, 119, 78, 190],
        add_health_record:      [63, 170, 214, 44, 34, 36, 92, 166],
        add_location_record:    [241, 237, 192, 179, 13, 219, 227, 182],
        verify_record:          [95, 2, 230, 207, 188, 217, 145, 202],
    };

    /// Returns the opcode that prefixes `instruction`'s payload.
    pub fn opcode(&self, instruction: PetPassportInstruction) -> &Discriminator {
        match instruction {
            PetPassportInstruction::CreatePetPassport => &self.create_pet_passport,
            PetPassportInstruction::UpdateOwner => &self.update_owner,
            PetPassportInstruction::AddVaccinationRecord => &self.add_vaccination_record,
            PetPassportInstruction::AddHealthRecord => &self.add_health_record,
            PetPassportInstruction::AddLocationRecord => &self.add_location_record,
            PetPassportInstruction::VerifyRecord => &self.verify_record,
        }
    }

    /// Looks up which instruction an opcode selects, if any.
    pub fn instruction(&self, opcode: &Discriminator) -> Option<PetPassportInstruction> {
        PetPassportInstruction::ALL
            .into_iter()
            .find(|instruction| self.opcode(*instruction) == opcode)
    }
}

impl Default for Discriminators {
    fn default() -> Self {
        Self::PET_PASSPORT
    }
}
