//! Service Ports
//!
//! Abstract interfaces for external services.

mod customer_lookup;

pub use customer_lookup::*;
