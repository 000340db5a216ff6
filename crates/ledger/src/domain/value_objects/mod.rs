//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod account_type;

pub use account_type::*;
