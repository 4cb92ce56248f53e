//! Instruction payloads accepted by the Pet Passport program.
//!
//! Every payload is an 8-byte opcode from the [`Discriminators`] table followed by the
//! instruction's arguments, packed in the exact order the program declares them. There is no
//! field tagging, so the order here is part of the wire contract.

use alloc::{
    string::{
        String,
        ToString,
    },
    vec::Vec,
};

use solana_address::Address;

use crate::{
    discriminators::Discriminators,
    error::{
        CodecError,
        CodecResult,
    },
    pack::{
        pack_address,
        pack_i64,
        pack_string,
        pack_u32,
        Pack,
    },
    reader::{
        ByteReader,
        Unpack,
    },
    state::records::RecordKind,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(strum_macros::Display, strum_macros::EnumIter)]
pub enum PetPassportInstruction {
    CreatePetPassport,
    UpdateOwner,
    AddVaccinationRecord,
    AddHealthRecord,
    AddLocationRecord,
    VerifyRecord,
}

impl PetPassportInstruction {
    pub const ALL: [Self; 6] = [
        Self::CreatePetPassport,
        Self::UpdateOwner,
        Self::AddVaccinationRecord,
        Self::AddHealthRecord,
        Self::AddLocationRecord,
        Self::VerifyRecord,
    ];
}

/// The arguments of one instruction. [`Pack`] and [`Unpack`] cover the arguments only; the opcode
/// is added by [`InstructionData::pack_instruction_data`].
pub trait InstructionData: Pack + Unpack {
    const INSTRUCTION: PetPassportInstruction;

    fn pack_instruction_data(&self, discriminators: &Discriminators) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(discriminators.opcode(Self::INSTRUCTION));
        self.pack_into(&mut data);
        data
    }
}

/// Creates the pet data account and mints the passport NFT with its metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatePetPassportInstructionData {
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Unix seconds.
    pub birth_date: i64,
}

impl CreatePetPassportInstructionData {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        breed: impl Into<String>,
        birth_date: i64,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            breed: breed.into(),
            birth_date,
        }
    }
}

impl Pack for CreatePetPassportInstructionData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.name);
        pack_string(buf, &self.species);
        pack_string(buf, &self.breed);
        pack_i64(buf, self.birth_date);
    }
}

impl Unpack for CreatePetPassportInstructionData {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            name: reader.read_string()?,
            species: reader.read_string()?,
            breed: reader.read_string()?,
            birth_date: reader.read_i64()?,
        })
    }
}

impl InstructionData for CreatePetPassportInstructionData {
    const INSTRUCTION: PetPassportInstruction = PetPassportInstruction::CreatePetPassport;
}

/// Hands the passport over to a new owner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateOwnerInstructionData {
    pub new_owner: Address,
}

impl UpdateOwnerInstructionData {
    pub fn new(new_owner: Address) -> Self {
        Self { new_owner }
    }
}

impl Pack for UpdateOwnerInstructionData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_address(buf, &self.new_owner);
    }
}

impl Unpack for UpdateOwnerInstructionData {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            new_owner: reader.read_address()?,
        })
    }
}

impl InstructionData for UpdateOwnerInstructionData {
    const INSTRUCTION: PetPassportInstruction = PetPassportInstruction::UpdateOwner;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddVaccinationRecordInstructionData {
    pub vaccine_name: String,
    pub date_administered: i64,
    pub next_due_date: i64,
    pub veterinarian: String,
}

impl AddVaccinationRecordInstructionData {
    pub fn new(
        vaccine_name: impl Into<String>,
        date_administered: i64,
        next_due_date: i64,
        veterinarian: impl Into<String>,
    ) -> Self {
        Self {
            vaccine_name: vaccine_name.into(),
            date_administered,
            next_due_date,
            veterinarian: veterinarian.into(),
        }
    }
}

impl Pack for AddVaccinationRecordInstructionData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.vaccine_name);
        pack_i64(buf, self.date_administered);
        pack_i64(buf, self.next_due_date);
        pack_string(buf, &self.veterinarian);
    }
}

impl Unpack for AddVaccinationRecordInstructionData {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            vaccine_name: reader.read_string()?,
            date_administered: reader.read_i64()?,
            next_due_date: reader.read_i64()?,
            veterinarian: reader.read_string()?,
        })
    }
}

impl InstructionData for AddVaccinationRecordInstructionData {
    const INSTRUCTION: PetPassportInstruction = PetPassportInstruction::AddVaccinationRecord;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddHealthRecordInstructionData {
    pub record_type: String,
    pub date: i64,
    pub description: String,
    pub veterinarian: String,
}

impl AddHealthRecordInstructionData {
    pub fn new(
        record_type: impl Into<String>,
        date: i64,
        description: impl Into<String>,
        veterinarian: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            date,
            description: description.into(),
            veterinarian: veterinarian.into(),
        }
    }
}

impl Pack for AddHealthRecordInstructionData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.record_type);
        pack_i64(buf, self.date);
        pack_string(buf, &self.description);
        pack_string(buf, &self.veterinarian);
    }
}

impl Unpack for AddHealthRecordInstructionData {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            record_type: reader.read_string()?,
            date: reader.read_i64()?,
            description: reader.read_string()?,
            veterinarian: reader.read_string()?,
        })
    }
}

impl InstructionData for AddHealthRecordInstructionData {
    const INSTRUCTION: PetPassportInstruction = PetPassportInstruction::AddHealthRecord;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddLocationRecordInstructionData {
    pub location: String,
    pub timestamp: i64,
    pub event_type: String,
}

impl AddLocationRecordInstructionData {
    pub fn new(location: impl Into<String>, timestamp: i64, event_type: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            timestamp,
            event_type: event_type.into(),
        }
    }
}

impl Pack for AddLocationRecordInstructionData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.location);
        pack_i64(buf, self.timestamp);
        pack_string(buf, &self.event_type);
    }
}

impl Unpack for AddLocationRecordInstructionData {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            location: reader.read_string()?,
            timestamp: reader.read_i64()?,
            event_type: reader.read_string()?,
        })
    }
}

impl InstructionData for AddLocationRecordInstructionData {
    const INSTRUCTION: PetPassportInstruction = PetPassportInstruction::AddLocationRecord;
}

/// Marks a vaccination or health record as verified.
///
/// `record_type` is sent as a string. The program only accepts `"vaccination"` and `"health"`;
/// anything else is rejected remotely with `InvalidRecordType`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyRecordInstructionData {
    pub record_type: String,
    pub record_index: u32,
}

impl VerifyRecordInstructionData {
    pub fn new(kind: RecordKind, record_index: u32) -> Self {
        Self {
            record_type: kind.to_string(),
            record_index,
        }
    }
}

impl Pack for VerifyRecordInstructionData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.record_type);
        pack_u32(buf, self.record_index);
    }
}

impl Unpack for VerifyRecordInstructionData {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            record_type: reader.read_string()?,
            record_index: reader.read_u32()?,
        })
    }
}

impl InstructionData for VerifyRecordInstructionData {
    const INSTRUCTION: PetPassportInstruction = PetPassportInstruction::VerifyRecord;
}

/// Any decoded instruction payload, selected by its opcode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PetPassportInstructionData {
    CreatePetPassport(CreatePetPassportInstructionData),
    UpdateOwner(UpdateOwnerInstructionData),
    AddVaccinationRecord(AddVaccinationRecordInstructionData),
    AddHealthRecord(AddHealthRecordInstructionData),
    AddLocationRecord(AddLocationRecordInstructionData),
    VerifyRecord(VerifyRecordInstructionData),
}

impl PetPassportInstructionData {
    /// Decodes an instruction payload by looking its opcode up in `discriminators`.
    pub fn unpack(data: &[u8], discriminators: &Discriminators) -> CodecResult<Self> {
        let mut reader = ByteReader::new(data);
        let opcode = reader.read_array()?;
        let instruction = discriminators
            .instruction(&opcode)
            .ok_or(CodecError::UnknownOpcode(opcode))?;

        let reader = &mut reader;
        Ok(match instruction {
            PetPassportInstruction::CreatePetPassport => Self::CreatePetPassport(reader.read()?),
            PetPassportInstruction::UpdateOwner => Self::UpdateOwner(reader.read()?),
            PetPassportInstruction::AddVaccinationRecord => {
                Self::AddVaccinationRecord(reader.read()?)
            }
            PetPassportInstruction::AddHealthRecord => Self::AddHealthRecord(reader.read()?),
            PetPassportInstruction::AddLocationRecord => Self::AddLocationRecord(reader.read()?),
            PetPassportInstruction::VerifyRecord => Self::VerifyRecord(reader.read()?),
        })
    }

    pub fn instruction(&self) -> PetPassportInstruction {
        match self {
            Self::CreatePetPassport(_) => PetPassportInstruction::CreatePetPassport,
            Self::UpdateOwner(_) => PetPassportInstruction::UpdateOwner,
            Self::AddVaccinationRecord(_) => PetPassportInstruction::AddVaccinationRecord,
            Self::AddHealthRecord(_) => PetPassportInstruction::AddHealthRecord,
            Self::AddLocationRecord(_) => PetPassportInstruction::AddLocationRecord,
            Self::VerifyRecord(_) => PetPassportInstruction::VerifyRecord,
        }
    }
}
