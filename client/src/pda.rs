//! Program derived address helpers.

use pet_passport_interface::ids::METADATA_PROGRAM_ID;
use solana_address::Address;

pub const METADATA_SEED: &[u8] = b"metadata";

/// Finds the program derived address for `seeds` under `program_id`, returning it with its bump.
///
/// Deterministic: the same inputs always produce the same address and bump.
pub fn derive_address(seeds: &[&[u8]], program_id: &Address) -> (Address, u8) {
    Address::find_program_address(seeds, program_id)
}

/// The token metadata account for `mint`, owned by the metadata program.
pub fn find_metadata_address(mint: &Address) -> (Address, u8) {
    derive_address(
        &[METADATA_SEED, METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM_ID,
    )
}
