//! Codec failures and the Pet Passport program's custom error codes, with conversion helpers to
//! represent them as error message strings.

use alloc::boxed::Box;
use core::fmt;

use crate::{
    discriminators::Discriminator,
    state::records::RecordKind,
};

/// Everything that can go wrong while decoding account data or instruction payloads.
///
/// Encoding never fails, so there is no encode-side counterpart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CodecError {
    /// A primitive read needed more bytes than were left in the buffer.
    OutOfBounds {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// A string's bytes were not valid UTF-8.
    InvalidUtf8 { offset: usize },
    /// A record sequence ran out of bytes (or hit bad data) while decoding record `index`.
    TruncatedRecord {
        kind: RecordKind,
        index: u32,
        source: Box<CodecError>,
    },
    /// The top-level account payload failed to decode. `offset` is where `field` begins.
    MalformedEntity {
        field: &'static str,
        offset: usize,
        source: Box<CodecError>,
    },
    /// An instruction payload started with an opcode that isn't in the discriminator table.
    UnknownOpcode(Discriminator),
}

impl CodecError {
    /// Walks the chain of wrapped errors down to the primitive failure.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            CodecError::TruncatedRecord { source, .. }
            | CodecError::MalformedEntity { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::OutOfBounds {
                offset,
                needed,
                remaining,
            } => write!(
                f,
                "Read of {needed} bytes at offset {offset} is out of bounds ({remaining} remaining)"
            ),
            CodecError::InvalidUtf8 { offset } => {
                write!(f, "String at offset {offset} is not valid UTF-8")
            }
            CodecError::TruncatedRecord {
                kind,
                index,
                source,
            } => write!(f, "Truncated {kind} record at index {index}: {source}"),
            CodecError::MalformedEntity {
                field,
                offset,
                source,
            } => write!(
                f,
                "Malformed pet data at field `{field}` (offset {offset}): {source}"
            ),
            CodecError::UnknownOpcode(opcode) => write!(f, "Unknown instruction opcode {opcode:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::TruncatedRecord { source, .. }
            | CodecError::MalformedEntity { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Anchor offsets user-defined error codes by this amount.
pub const CUSTOM_ERROR_OFFSET: u32 = 6000;

/// Custom errors returned by the on-chain program, as `InstructionError::Custom(code)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr)]
#[repr(u32)]
pub enum PetPassportError {
    UnauthorizedVerifier = 6000,
    RecordNotFound,
    InvalidRecordType,
}

impl From<PetPassportError> for &'static str {
    fn from(value: PetPassportError) -> Self {
        match value {
            PetPassportError::UnauthorizedVerifier => {
                "The verifier is not authorized to verify records"
            }
            PetPassportError::RecordNotFound => "The specified record was not found",
            PetPassportError::InvalidRecordType => "Invalid record type specified",
        }
    }
}

impl fmt::Display for PetPassportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).into())
    }
}

static_assertions::const_assert_eq!(
    PetPassportError::UnauthorizedVerifier as u32,
    CUSTOM_ERROR_OFFSET
);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn custom_codes_map_to_program_errors() {
        assert_eq!(
            PetPassportError::from_repr(6000),
            Some(PetPassportError::UnauthorizedVerifier)
        );
        assert_eq!(
            PetPassportError::from_repr(6001),
            Some(PetPassportError::RecordNotFound)
        );
        assert_eq!(
            PetPassportError::from_repr(6002),
            Some(PetPassportError::InvalidRecordType)
        );
        assert_eq!(PetPassportError::from_repr(6003), None);
        assert_eq!(PetPassportError::from_repr(0), None);
    }

    #[test]
    fn root_cause_unwraps_nested_errors() {
        let primitive = CodecError::OutOfBounds {
            offset: 40,
            needed: 8,
            remaining: 3,
        };
        let err = CodecError::MalformedEntity {
            field: "health_records",
            offset: 32,
            source: Box::new(CodecError::TruncatedRecord {
                kind: RecordKind::Health,
                index: 2,
                source: Box::new(primitive.clone()),
            }),
        };

        assert_eq!(err.root_cause(), &primitive);
        assert_eq!(
            err.to_string(),
            "Malformed pet data at field `health_records` (offset 32): Truncated health record at \
             index 2: Read of 8 bytes at offset 40 is out of bounds (3 remaining)"
        );
    }
}
