//! Public interface layer for the Pet Passport program: the wire codec for account data and
//! instruction payloads, discriminator tables, well-known program ids and the UI vocabulary shared
//! by clients.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod discriminators;
pub mod error;
pub mod ids;
pub mod instructions;
pub mod pack;
pub mod reader;
pub mod state;
pub mod vocabulary;

pub mod program {
    pub use crate::ids::PET_PASSPORT_PROGRAM_ID as ID;
}
