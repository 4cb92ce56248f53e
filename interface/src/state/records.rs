//! The three append-only record types stored in a pet's passport.

use alloc::{
    string::String,
    vec::Vec,
};

use crate::{
    error::CodecResult,
    pack::{
        pack_bool,
        pack_i64,
        pack_string,
        Pack,
    },
    reader::{
        ByteReader,
        Unpack,
    },
};

/// Which record list a record lives in.
///
/// The lowercase name doubles as the `record_type` argument of the verify instruction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Vaccination,
    Health,
    Location,
}

/// A vaccine dose. `verified` starts `false` and can only be set by the program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaccinationRecord {
    pub vaccine_name: String,
    /// Unix seconds.
    pub date_administered: i64,
    /// Unix seconds.
    pub next_due_date: i64,
    pub veterinarian: String,
    pub verified: bool,
}

/// A vet visit, treatment or other health event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthRecord {
    /// Free-form on the wire; see [`crate::vocabulary::HealthRecordType`] for the usual values.
    pub record_type: String,
    /// Unix seconds.
    pub date: i64,
    pub description: String,
    pub veterinarian: String,
    pub verified: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocationRecord {
    pub location: String,
    /// Unix seconds.
    pub timestamp: i64,
    /// Free-form on the wire; see [`crate::vocabulary::LocationEventType`].
    pub event_type: String,
}

impl Pack for VaccinationRecord {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.vaccine_name);
        pack_i64(buf, self.date_administered);
        pack_i64(buf, self.next_due_date);
        pack_string(buf, &self.veterinarian);
        pack_bool(buf, self.verified);
    }
}

impl Unpack for VaccinationRecord {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            vaccine_name: reader.read_string()?,
            date_administered: reader.read_i64()?,
            next_due_date: reader.read_i64()?,
            veterinarian: reader.read_string()?,
            verified: reader.read_bool()?,
        })
    }
}

impl Pack for HealthRecord {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.record_type);
        pack_i64(buf, self.date);
        pack_string(buf, &self.description);
        pack_string(buf, &self.veterinarian);
        pack_bool(buf, self.verified);
    }
}

impl Unpack for HealthRecord {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            record_type: reader.read_string()?,
            date: reader.read_i64()?,
            description: reader.read_string()?,
            veterinarian: reader.read_string()?,
            verified: reader.read_bool()?,
        })
    }
}

impl Pack for LocationRecord {
    fn pack_into(&self, buf: &mut Vec<u8>) {
        pack_string(buf, &self.location);
        pack_i64(buf, self.timestamp);
        pack_string(buf, &self.event_type);
    }
}

impl Unpack for LocationRecord {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            location: reader.read_string()?,
            timestamp: reader.read_i64()?,
            event_type: reader.read_string()?,
        })
    }
}
