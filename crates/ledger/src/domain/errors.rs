//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The customer service answered, but has no such customer
    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    /// The customer service could not be reached or answered unexpectedly
    #[error("Customer service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn duplicate_account_number(account_number: &str) -> Self {
        Self::Conflict(format!("Account number already exists: {account_number}"))
    }

    /// Stable machine-readable kind, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation(_) => "validation",
            Self::Conflict(_) => "conflict",
            Self::CustomerNotFound(_) => "customer_not_found",
            Self::RemoteUnavailable(_) => "remote_unavailable",
            Self::Repository(_) => "repository",
        }
    }
}
