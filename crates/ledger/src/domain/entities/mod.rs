//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Account: financial account owned by this service
//! - Customer: transient snapshot of a remotely owned customer

mod account;
mod customer;

pub use account::*;
pub use customer::*;
