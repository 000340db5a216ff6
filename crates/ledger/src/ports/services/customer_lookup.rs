//! Customer Lookup Port
//!
//! Synchronous accessor for customers owned by the customer service.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Customer};

/// Service interface for resolving a customer by id
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    /// Resolve a customer.
    ///
    /// Fails with [`DomainError::CustomerNotFound`] when the service answers
    /// that the customer does not exist, and with
    /// [`DomainError::RemoteUnavailable`] on any transport-level failure.
    async fn get(&self, customer_id: i64) -> Result<Customer, DomainError>;
}
