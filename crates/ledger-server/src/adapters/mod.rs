//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod customer_client;
pub mod postgres;

// Re-exports
pub use customer_client::HttpCustomerClient;
pub use postgres::PgAccountRepository;
