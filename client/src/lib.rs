//! Client-side utilities for interacting with the Pet Passport program.
//!
//! Includes instruction builders, account queries, pretty-printing utilities, and PDA derivations.

pub mod accounts;
pub mod context;
pub mod logs;
pub mod pda;
pub mod query;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
