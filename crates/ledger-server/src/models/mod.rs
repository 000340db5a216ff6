//! Ledger HTTP Models
//!
//! - Account: request/response DTOs and the shared error body

mod account;

pub use account::*;
