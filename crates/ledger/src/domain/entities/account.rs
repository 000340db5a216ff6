//! Account - Financial account owned by this service
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Customer;
use crate::domain::{errors::DomainError, AccountType};

/// Account - persisted record, references its owner by id only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub account_number: String,
    pub account_type: AccountType,
    /// System-managed, zero at creation
    pub balance: Decimal,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or replacing an account.
///
/// Id, balance and timestamps are deliberately absent: the store owns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInput {
    pub account_number: String,
    pub account_type: AccountType,
    pub customer_id: i64,
}

impl AccountInput {
    /// Build a validated input. The account number is trimmed.
    pub fn new(
        account_number: impl Into<String>,
        account_type: AccountType,
        customer_id: i64,
    ) -> Result<Self, DomainError> {
        let account_number = account_number.into().trim().to_string();
        if account_number.is_empty() {
            return Err(DomainError::Validation(
                "account number must not be empty".to_string(),
            ));
        }
        if customer_id <= 0 {
            return Err(DomainError::Validation(format!(
                "customer id must be positive, got {customer_id}"
            )));
        }

        Ok(Self {
            account_number,
            account_type,
            customer_id,
        })
    }
}

/// Account enriched with a request-scoped customer snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountView {
    pub account: Account,
    pub customer: Customer,
}

impl AccountView {
    pub fn new(account: Account, customer: Customer) -> Self {
        Self { account, customer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_trims_account_number() {
        let input = AccountInput::new("  ACC-001 ", AccountType::Checking, 1).unwrap();
        assert_eq!(input.account_number, "ACC-001");
    }

    #[test]
    fn test_input_rejects_blank_account_number() {
        let err = AccountInput::new("   ", AccountType::Savings, 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_input_rejects_non_positive_customer() {
        assert!(matches!(
            AccountInput::new("ACC-001", AccountType::Savings, 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            AccountInput::new("ACC-001", AccountType::Savings, -4),
            Err(DomainError::Validation(_))
        ));
    }
}
