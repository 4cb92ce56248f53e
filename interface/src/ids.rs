//! Addresses of the programs and sysvars a Pet Passport instruction references.

use solana_address::{
    address,
    Address,
};

pub const PET_PASSPORT_PROGRAM_ID: Address = address!("CxdvuzcrpqtJawZm8jDfKf7G92sQPehdtkrYdEoGzaTk");

/// Metaplex Token Metadata program.
pub const METADATA_PROGRAM_ID: Address = address!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// SPL Token program.
pub const TOKEN_PROGRAM_ID: Address = address!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

pub const RENT_SYSVAR_ID: Address = address!("SysvarRent111111111111111111111111111111111");

pub const SYSTEM_PROGRAM_ID: Address = address!("11111111111111111111111111111111");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base58_ids_decode_to_expected_bytes() {
        #[rustfmt::skip]
        let expected: [(Address, [u8; 32]); 5] = [
            (PET_PASSPORT_PROGRAM_ID, [
                177, 177, 65, 206, 175, 95, 255, 60, 168, 253, 11, 174, 90, 37, 45, 253,
                95, 0, 255, 47, 233, 230, 137, 155, 65, 85, 46, 81, 182, 111, 249, 139,
            ]),
            (METADATA_PROGRAM_ID, [
                11, 112, 101, 177, 227, 209, 124, 69, 56, 157, 82, 127, 107, 4, 195, 205,
                88, 184, 108, 115, 26, 160, 253, 181, 73, 182, 209, 188, 3, 248, 41, 70,
            ]),
            (TOKEN_PROGRAM_ID, [
                6, 221, 246, 225, 215, 101, 161, 147, 217, 203, 225, 70, 206, 235, 121, 172,
                28, 180, 133, 237, 95, 91, 55, 145, 58, 140, 245, 133, 126, 255, 0, 169,
            ]),
            (RENT_SYSVAR_ID, [
                6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127,
                88, 218, 238, 8, 155, 161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
            ]),
            (SYSTEM_PROGRAM_ID, [0; 32]),
        ];
        for (id, bytes) in expected {
            assert_eq!(id, Address::new_from_array(bytes));
        }
    }
}
