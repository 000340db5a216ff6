//! Account Repository Port
//!
//! Abstract interface for Account persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Account, AccountInput};

/// Repository interface for Account entities.
///
/// Implementations own id and timestamp assignment and must enforce a unique
/// constraint on the account number, reporting a violation as
/// [`DomainError::Conflict`].
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an Account by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find all Accounts, oldest first
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Find all Accounts owned by a customer, oldest first
    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Account>, DomainError>;

    /// Find an Account by its unique account number
    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Check if an Account exists
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Insert a new Account with a zero balance
    async fn insert(&self, input: &AccountInput) -> Result<Account, DomainError>;

    /// Replace number, type and owner of an existing Account.
    /// Returns `None` if no Account has `id`.
    async fn update(&self, id: Uuid, input: &AccountInput)
        -> Result<Option<Account>, DomainError>;

    /// Delete an Account by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
