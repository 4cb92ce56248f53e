//! Writers for the primitive wire types.
//!
//! Layout, little-endian throughout:
//! - string: `u32` byte length followed by the UTF-8 bytes
//! - `i64`: 8 bytes two's complement (low 32-bit word first)
//! - address: 32 raw bytes
//! - bool: 1 byte, `0` or `1`
//! - sequence of `T`: `u32` count followed by each `T` in order
//!
//! None of these can fail, and none enforce a length limit; the remote program rejects payloads
//! it considers too large.

use alloc::vec::Vec;

use solana_address::Address;

/// A value with a fixed field order on the wire.
pub trait Pack {
    /// Appends the encoded value to `buf`.
    fn pack_into(&self, buf: &mut Vec<u8>);

    fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.pack_into(&mut buf);
        buf
    }
}

#[inline(always)]
pub fn pack_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[inline(always)]
pub fn pack_i64(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&encode_i64(value));
}

#[inline(always)]
pub fn pack_bool(buf: &mut Vec<u8>, value: bool) {
    buf.push(value as u8);
}

#[inline(always)]
pub fn pack_address(buf: &mut Vec<u8>, address: &Address) {
    buf.extend_from_slice(address.as_ref());
}

/// Writes a length-prefixed UTF-8 string.
///
/// Panics if the string is longer than `u32::MAX` bytes, which can never fit in a transaction.
pub fn pack_string(buf: &mut Vec<u8>, value: &str) {
    let len = u32::try_from(value.len()).expect("string length exceeds u32::MAX");
    pack_u32(buf, len);
    buf.extend_from_slice(value.as_bytes());
}

/// Writes a count-prefixed sequence, preserving the order of `items`.
pub fn pack_sequence<T: Pack>(buf: &mut Vec<u8>, items: &[T]) {
    let len = u32::try_from(items.len()).expect("sequence length exceeds u32::MAX");
    pack_u32(buf, len);
    for item in items {
        item.pack_into(buf);
    }
}

pub fn encode_string(value: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + value.len());
    pack_string(&mut buf, value);
    buf
}

/// Signed 64-bit little-endian. Byte-identical to writing the low 32-bit word and then the
/// arithmetic high word, each little-endian.
#[inline(always)]
pub fn encode_i64(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn string_is_length_prefixed() {
        assert_eq!(
            encode_string("Fluffy"),
            vec![6, 0, 0, 0, 0x46, 0x6C, 0x75, 0x66, 0x66, 0x79]
        );
        assert_eq!(encode_string(""), vec![0, 0, 0, 0]);
        // Length counts bytes, not chars.
        assert_eq!(encode_string("é"), vec![2, 0, 0, 0, 0xC3, 0xA9]);
    }

    #[test]
    fn i64_matches_low_then_high_word() {
        for value in [0i64, 1, -1, 1_625_097_600, -86_400, i64::MAX, i64::MIN, 1 << 53] {
            let low = (value as u64 & 0xFFFF_FFFF) as u32;
            let high = (value >> 32) as i32;
            let mut expected = vec![];
            expected.extend_from_slice(&low.to_le_bytes());
            expected.extend_from_slice(&high.to_le_bytes());
            assert_eq!(encode_i64(value).to_vec(), expected);
        }
        assert_eq!(1_625_097_600, 0x60DD_0580);
        assert_eq!(encode_i64(1_625_097_600), [0x80, 0x05, 0xDD, 0x60, 0, 0, 0, 0]);
    }

    #[test]
    fn bools_and_addresses() {
        let mut buf = vec![];
        pack_bool(&mut buf, true);
        pack_bool(&mut buf, false);
        pack_address(&mut buf, &Address::new_from_array([7; 32]));
        assert_eq!(buf.len(), 2 + 32);
        assert_eq!(&buf[..2], &[1, 0]);
        assert!(buf[2..].iter().all(|b| *b == 7));
    }
}
