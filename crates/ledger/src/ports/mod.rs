//! Ports (Interfaces)
//!
//! - `repositories/`: account persistence (`AccountRepository`)
//! - `services/`: the customer service boundary (`CustomerLookup`)
//!
//! The server crate provides the Postgres and HTTP implementations.

pub mod repositories;
pub mod services;

pub use repositories::*;
pub use services::*;
