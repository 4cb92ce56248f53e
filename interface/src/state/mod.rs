//! Account state stored by the Pet Passport program: the top-level [`pet_data::PetData`] payload
//! and the three record types appended to it.

pub mod pet_data;
pub mod records;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const I64_SIZE: usize = core::mem::size_of::<i64>();
pub const ADDRESS_SIZE: usize = 32;
