//! A forward-only, bounds-checked cursor over borrowed bytes.
//!
//! Every read checks the remaining length first and only advances on success, so a failed read
//! leaves [`ByteReader::position`] pointing at the start of the value that couldn't be decoded.
//! Decoded values are always owned; nothing returned borrows the input buffer.

use alloc::{
    string::String,
    vec::Vec,
};
use core::str;

use solana_address::Address;

use crate::{
    error::{
        CodecError,
        CodecResult,
    },
    state::records::RecordKind,
};

/// A value with a fixed field order on the wire that can be decoded from a [`ByteReader`].
pub trait Unpack: Sized {
    fn unpack_from(reader: &mut ByteReader<'_>) -> CodecResult<Self>;
}

#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Creates a reader that starts at `position`. Reads fail if `position` is past the end.
    pub fn at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns the next `len` bytes and advances past them.
    fn take(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::OutOfBounds {
                offset: self.position,
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> CodecResult<()> {
        self.take(len).map(|_| ())
    }

    pub fn read_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> CodecResult<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a two's complement little-endian `i64` with its full range.
    pub fn read_i64(&mut self) -> CodecResult<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    /// Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> CodecResult<bool> {
        self.read_u8().map(|byte| byte != 0)
    }

    pub fn read_address(&mut self) -> CodecResult<Address> {
        self.read_array().map(Address::new_from_array)
    }

    /// Reads a `u32` length prefix followed by that many UTF-8 bytes.
    ///
    /// On failure the cursor is left at the start of the length prefix.
    pub fn read_string(&mut self) -> CodecResult<String> {
        let start = self.position;
        let result = self.read_u32().and_then(|len| {
            let bytes = self.take(len as usize)?;
            str::from_utf8(bytes)
                .map(String::from)
                .map_err(|_| CodecError::InvalidUtf8 { offset: start })
        });
        if result.is_err() {
            self.position = start;
        }
        result
    }

    /// Reads a `u32` count followed by exactly that many elements, in order.
    ///
    /// All or nothing: if element `i` fails, the whole sequence fails with
    /// [`CodecError::TruncatedRecord`] naming `i`.
    pub fn read_sequence<T>(
        &mut self,
        kind: RecordKind,
        mut read_element: impl FnMut(&mut Self) -> CodecResult<T>,
    ) -> CodecResult<Vec<T>> {
        let start = self.position;
        let count = self.read_u32()?;
        // Every element takes at least one byte, so the count can't legitimately exceed what's
        // left. Capping the reservation keeps a garbage count from allocating gigabytes.
        let mut items = Vec::with_capacity((count as usize).min(self.remaining()));
        for index in 0..count {
            match read_element(self) {
                Ok(item) => items.push(item),
                Err(source) => {
                    self.position = start;
                    return Err(CodecError::TruncatedRecord {
                        kind,
                        index,
                        source: source.into(),
                    });
                }
            }
        }
        Ok(items)
    }

    pub fn read<T: Unpack>(&mut self) -> CodecResult<T> {
        T::unpack_from(self)
    }
}

/// Decodes a string at `offset`, returning it with the offset just past it.
pub fn decode_string(data: &[u8], offset: usize) -> CodecResult<(String, usize)> {
    let mut reader = ByteReader::at(data, offset);
    Ok((reader.read_string()?, reader.position()))
}

pub fn decode_i64(data: &[u8], offset: usize) -> CodecResult<(i64, usize)> {
    let mut reader = ByteReader::at(data, offset);
    Ok((reader.read_i64()?, reader.position()))
}

pub fn decode_address(data: &[u8], offset: usize) -> CodecResult<(Address, usize)> {
    let mut reader = ByteReader::at(data, offset);
    Ok((reader.read_address()?, reader.position()))
}

pub fn decode_bool(data: &[u8], offset: usize) -> CodecResult<(bool, usize)> {
    let mut reader = ByteReader::at(data, offset);
    Ok((reader.read_bool()?, reader.position()))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::pack::encode_string;

    #[test]
    fn primitives_advance_the_cursor() {
        let mut data = encode_string("Cat");
        data.extend_from_slice(&(-2i64).to_le_bytes());
        data.push(2);
        data.extend_from_slice(&[9; 32]);

        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_string().unwrap(), "Cat");
        assert_eq!(reader.position(), 7);
        assert_eq!(reader.read_i64().unwrap(), -2);
        assert!(reader.read_bool().unwrap());
        assert_eq!(
            reader.read_address().unwrap(),
            Address::new_from_array([9; 32])
        );
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn offset_functions_return_next_offset() {
        let data = [vec![0xAA; 3], encode_string("Persian")].concat();
        assert_eq!(
            decode_string(&data, 3).unwrap(),
            (String::from("Persian"), 3 + 4 + 7)
        );
        let data = [0u8, 0, 1, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(decode_i64(&data, 2).unwrap(), (1, 10));
        assert_eq!(decode_bool(&data, 2).unwrap(), (true, 3));
        assert_eq!(decode_bool(&data, 0).unwrap(), (false, 1));
        assert!(decode_address(&data, 0).is_err());
    }

    #[test]
    fn oversized_string_length_is_out_of_bounds() {
        // Declares 100 bytes but carries 2.
        let data = [100u8, 0, 0, 0, b'h', b'i'];
        let mut reader = ByteReader::new(&data);
        assert_eq!(
            reader.read_string(),
            Err(CodecError::OutOfBounds {
                offset: 4,
                needed: 100,
                remaining: 2,
            })
        );
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let data = [2u8, 0, 0, 0, 0xC3, 0x28];
        assert_eq!(
            ByteReader::new(&data).read_string(),
            Err(CodecError::InvalidUtf8 { offset: 0 })
        );
    }

    #[test]
    fn reads_past_the_end_never_advance() {
        let data = [1u8, 2, 3];
        let mut reader = ByteReader::at(&data, 1);
        assert!(reader.read_u32().is_err());
        assert_eq!(reader.position(), 1);
        assert!(reader.read_address().is_err());

        let mut past_end = ByteReader::at(&data, 10);
        assert_eq!(past_end.remaining(), 0);
        assert_eq!(
            past_end.read_u8(),
            Err(CodecError::OutOfBounds {
                offset: 10,
                needed: 1,
                remaining: 0,
            })
        );
    }

    #[test]
    fn sequence_failure_names_the_index() {
        // Count of 3, but only two bools follow.
        let data = [3u8, 0, 0, 0, 1, 0];
        let err = ByteReader::new(&data)
            .read_sequence(RecordKind::Location, ByteReader::read_bool)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedRecord {
                kind: RecordKind::Location,
                index: 2,
                source: CodecError::OutOfBounds {
                    offset: 6,
                    needed: 1,
                    remaining: 0,
                }
                .into(),
            }
        );
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        let data = [0xFFu8, 0xFF, 0xFF, 0xFF];
        let err = ByteReader::new(&data)
            .read_sequence(RecordKind::Vaccination, ByteReader::read_u32)
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::TruncatedRecord { index: 0, .. }
        ));
    }
}
