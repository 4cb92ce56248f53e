//! See [`PetData`].

use alloc::{
    string::String,
    vec::Vec,
};

use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    discriminators::{
        Discriminator,
        DISCRIMINATOR_LEN,
    },
    error::{
        CodecError,
        CodecResult,
    },
    pack::{
        pack_address,
        pack_i64,
        pack_sequence,
        pack_string,
        Pack,
    },
    reader::ByteReader,
    state::{
        records::{
            HealthRecord,
            LocationRecord,
            RecordKind,
            VaccinationRecord,
        },
        ADDRESS_SIZE,
        I64_SIZE,
        U32_SIZE,
    },
};

/// The number of bytes the program allocates for a `PetData` account when it is created.
///
/// Appends that would grow the payload past this size are rejected remotely.
pub const PET_DATA_ACCOUNT_SPACE: usize =
    8 + 32 + 32 + 32 + 8 + 32 + 8 + 4 + (32 * 10) + 4 + (32 * 10) + 4 + (32 * 10);

const_assert_eq!(PET_DATA_ACCOUNT_SPACE, 1124);

/// The full state of one pet passport account.
///
/// Account data layout:
///   - [0..8]: account discriminator, skipped when decoding
///   - name, species, breed: length-prefixed strings
///   - birth_date: i64
///   - owner: 32-byte address
///   - last_updated: i64
///   - vaccination_records, health_records, location_history: count-prefixed sequences
///
/// A decoded `PetData` is never mutated to reflect a new record. Clients send an instruction and
/// fetch the account again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PetData {
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Unix seconds.
    pub birth_date: i64,
    /// The only signer the program accepts for appending records.
    pub owner: Address,
    /// Unix seconds, set by the program on every mutation.
    pub last_updated: i64,
    pub vaccination_records: Vec<VaccinationRecord>,
    pub health_records: Vec<HealthRecord>,
    pub location_history: Vec<LocationRecord>,
}

impl PetData {
    /// Decodes a `PetData` account's data.
    ///
    /// The first [`DISCRIMINATOR_LEN`] bytes are skipped without being checked; callers that
    /// didn't obtain `data` through a discriminator-filtered scan must compare the prefix
    /// themselves. Bytes after `location_history` are ignored since accounts are allocated with
    /// slack space.
    pub fn unpack(data: &[u8]) -> CodecResult<Self> {
        let reader = &mut ByteReader::new(data);
        entity_field(reader, "discriminator", |r| r.skip(DISCRIMINATOR_LEN))?;

        Ok(Self {
            name: entity_field(reader, "name", ByteReader::read_string)?,
            species: entity_field(reader, "species", ByteReader::read_string)?,
            breed: entity_field(reader, "breed", ByteReader::read_string)?,
            birth_date: entity_field(reader, "birth_date", ByteReader::read_i64)?,
            owner: entity_field(reader, "owner", ByteReader::read_address)?,
            last_updated: entity_field(reader, "last_updated", ByteReader::read_i64)?,
            vaccination_records: entity_field(reader, "vaccination_records", |r| {
                r.read_sequence(RecordKind::Vaccination, |r| r.read::<VaccinationRecord>())
            })?,
            health_records: entity_field(reader, "health_records", |r| {
                r.read_sequence(RecordKind::Health, |r| r.read::<HealthRecord>())
            })?,
            location_history: entity_field(reader, "location_history", |r| {
                r.read_sequence(RecordKind::Location, |r| r.read::<LocationRecord>())
            })?,
        })
    }

    /// Encodes the full account data: `discriminator` followed by the packed fields.
    pub fn pack_account(&self, discriminator: &Discriminator) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.packed_len());
        data.extend_from_slice(discriminator);
        self.pack_into(&mut data);
        data
    }

    /// The account data length this value occupies, discriminator included.
    pub fn packed_len(&self) -> usize {
        let string = |s: &String| U32_SIZE + s.len();
        let vaccinations: usize = self
            .vaccination_records
            .iter()
            .map(|v| string(&v.vaccine_name) + 2 * I64_SIZE + string(&v.veterinarian) + 1)
            .sum();
        let health: usize = self
            .health_records
            .iter()
            .map(|h| {
                string(&h.record_type)
                    + I64_SIZE
                    + string(&h.description)
                    + string(&h.veterinarian)
                    + 1
            })
            .sum();
        let locations: usize = self
            .location_history
            .iter()
            .map(|l| string(&l.location) + I64_SIZE + string(&l.event_type))
            .sum();

        DISCRIMINATOR_LEN
            + string(&self.name)
            + string(&self.species)
            + string(&self.breed)
            + I64_SIZE
            + ADDRESS_SIZE
            + I64_SIZE
            + U32_SIZE * 3
            + vaccinations
            + health
            + locations
    }

    pub fn is_owned_by(&self, owner: &Address) -> bool {
        &self.owner == owner
    }
}

/// Packs the fields after the discriminator.
impl Pack for PetData {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.name);
        pack_string(buf, &self.species);
        pack_string(buf, &self.breed);
        pack_i64(buf, self.birth_date);
        pack_address(buf, &self.owner);
        pack_i64(buf, self.last_updated);
        pack_sequence(buf, &self.vaccination_records);
        pack_sequence(buf, &self.health_records);
        pack_sequence(buf, &self.location_history);
    }
}

/// Reads one top-level field, tagging any failure with the field name and its starting offset.
fn entity_field<'a, T>(
    reader: &mut ByteReader<'a>,
    field: &'static str,
    read: impl FnOnce(&mut ByteReader<'a>) -> CodecResult<T>,
) -> CodecResult<T> {
    let offset = reader.position();
    read(reader).map_err(|source| CodecError::MalformedEntity {
        field,
        offset,
        source: source.into(),
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::discriminators::Discriminators;

    const DISCRIMINATOR: Discriminator = Discriminators::PET_PASSPORT.pet_data_account;

    fn fluffy() -> PetData {
        PetData {
            name: "Fluffy".into(),
            species: "Cat".into(),
            breed: "Persian".into(),
            birth_date: 1_625_097_600,
            owner: Address::new_from_array([3; 32]),
            last_updated: 1_700_000_000,
            vaccination_records: vec![
                VaccinationRecord {
                    vaccine_name: "Rabies".into(),
                    date_administered: 1_650_000_000,
                    next_due_date: 1_681_536_000,
                    veterinarian: "Dr. Whiskers".into(),
                    verified: true,
                },
                VaccinationRecord {
                    vaccine_name: "FVRCP".into(),
                    date_administered: 1_660_000_000,
                    next_due_date: 1_691_536_000,
                    veterinarian: "Dr. Whiskers".into(),
                    verified: false,
                },
            ],
            health_records: vec![HealthRecord {
                record_type: "Checkup".into(),
                date: 1_670_000_000,
                description: "Healthy, slightly overweight 🐱".into(),
                veterinarian: "Dr. Paws".into(),
                verified: false,
            }],
            location_history: vec![LocationRecord {
                location: "Zürich".into(),
                timestamp: -86_400,
                event_type: "Moved".into(),
            }],
        }
    }

    fn empty() -> PetData {
        PetData {
            name: String::new(),
            species: "Dog".into(),
            breed: "Beagle".into(),
            birth_date: i64::MIN,
            owner: Address::new_from_array([0; 32]),
            last_updated: i64::MAX,
            vaccination_records: vec![],
            health_records: vec![],
            location_history: vec![],
        }
    }

    #[test]
    fn round_trip() {
        for pet in [fluffy(), empty()] {
            let data = pet.pack_account(&DISCRIMINATOR);
            assert_eq!(data.len(), pet.packed_len());
            assert_eq!(PetData::unpack(&data).unwrap(), pet);
        }
    }

    #[test]
    fn empty_sequences_are_four_zero_bytes_each() {
        let data = empty().pack_account(&DISCRIMINATOR);
        assert_eq!(&data[data.len() - 12..], &[0u8; 12]);

        let pet = PetData::unpack(&data).unwrap();
        assert!(pet.vaccination_records.is_empty());
        assert!(pet.health_records.is_empty());
        assert!(pet.location_history.is_empty());
    }

    #[test]
    fn decoding_is_idempotent_and_leaves_input_untouched() {
        let data = fluffy().pack_account(&DISCRIMINATOR);
        let copy = data.clone();
        let first = PetData::unpack(&data).unwrap();
        let second = PetData::unpack(&data).unwrap();
        assert_eq!(first, second);
        assert_eq!(data, copy);
    }

    #[test]
    fn every_truncation_fails() {
        let data = fluffy().pack_account(&DISCRIMINATOR);
        for k in 1..data.len() {
            let err = PetData::unpack(&data[..data.len() - k]).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedEntity { .. }),
                "truncating {k} bytes gave {err:?}"
            );
            assert!(matches!(err.root_cause(), CodecError::OutOfBounds { .. }));
        }
    }

    #[test]
    fn short_buffer_fails_on_discriminator() {
        assert_eq!(
            PetData::unpack(&[1, 2, 3]),
            Err(CodecError::MalformedEntity {
                field: "discriminator",
                offset: 0,
                source: CodecError::OutOfBounds {
                    offset: 0,
                    needed: 8,
                    remaining: 3,
                }
                .into(),
            })
        );
    }

    #[test]
    fn truncated_record_reports_field_offset_and_index() {
        let pet = fluffy();
        let data = pet.pack_account(&DISCRIMINATOR);
        let vaccinations_offset = DISCRIMINATOR_LEN
            + (4 + 6)
            + (4 + 3)
            + (4 + 7)
            + I64_SIZE
            + ADDRESS_SIZE
            + I64_SIZE;
        // Cut inside the second vaccination record.
        let first_record_len = pet.vaccination_records[0].pack().len();
        let cut = vaccinations_offset + U32_SIZE + first_record_len + 3;

        match PetData::unpack(&data[..cut]).unwrap_err() {
            CodecError::MalformedEntity {
                field,
                offset,
                source,
            } => {
                assert_eq!(field, "vaccination_records");
                assert_eq!(offset, vaccinations_offset);
                assert!(matches!(
                    *source,
                    CodecError::TruncatedRecord {
                        kind: RecordKind::Vaccination,
                        index: 1,
                        ..
                    }
                ));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn discriminator_is_skipped_not_checked() {
        let pet = fluffy();
        let data = pet.pack_account(&[0xEE; DISCRIMINATOR_LEN]);
        assert_eq!(PetData::unpack(&data).unwrap(), pet);
    }

    #[test]
    fn trailing_slack_is_ignored() {
        let pet = fluffy();
        let mut data = pet.pack_account(&DISCRIMINATOR);
        data.resize(PET_DATA_ACCOUNT_SPACE, 0);
        assert_eq!(PetData::unpack(&data).unwrap(), pet);
    }

    #[test]
    fn owner_comparison_is_exact() {
        let pet = fluffy();
        assert!(pet.is_owned_by(&Address::new_from_array([3; 32])));
        let mut almost = [3; 32];
        almost[31] = 4;
        assert!(!pet.is_owned_by(&Address::new_from_array(almost)));
    }
}
