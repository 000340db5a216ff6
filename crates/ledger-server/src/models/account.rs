//! Account HTTP models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use ledger::{AccountInput, AccountType, AccountView, Customer, DomainError};

// ============================================
// Request/Response DTOs
// ============================================

/// Create / replace Account request.
///
/// Balance is not part of the contract.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[schema(example = "FR76-0001")]
    pub account_number: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "CHECKING")]
    pub account_type: AccountType,
    #[schema(example = 1)]
    pub customer_id: i64,
}

impl TryFrom<AccountRequest> for AccountInput {
    type Error = DomainError;

    fn try_from(req: AccountRequest) -> Result<Self, Self::Error> {
        AccountInput::new(req.account_number, req.account_type, req.customer_id)
    }
}

/// Customer snapshot attached to an account
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// Account response with its customer
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub account_number: String,
    pub balance: Decimal,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "SAVINGS")]
    pub account_type: AccountType,
    pub customer_id: i64,
    pub customer: CustomerResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountView> for AccountResponse {
    fn from(view: AccountView) -> Self {
        let AccountView { account, customer } = view;
        Self {
            id: account.id,
            account_number: account.account_number,
            balance: account.balance,
            account_type: account.account_type,
            customer_id: account.customer_id,
            customer: customer.into(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Error body returned by every failing account endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// not_found | customer_not_found | conflict | validation | remote_unavailable | repository
    pub error: String,
    pub message: String,
}

impl From<&DomainError> for ErrorResponse {
    fn from(e: &DomainError) -> Self {
        Self {
            error: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger::Account;

    #[test]
    fn test_request_uses_wire_names() {
        let req: AccountRequest = serde_json::from_str(
            r#"{"accountNumber": "ACC-1", "type": "SAVINGS", "customerId": 3}"#,
        )
        .unwrap();

        let input = AccountInput::try_from(req).unwrap();
        assert_eq!(input.account_number, "ACC-1");
        assert_eq!(input.account_type, AccountType::Savings);
        assert_eq!(input.customer_id, 3);
    }

    #[test]
    fn test_request_ignores_balance() {
        let req: AccountRequest = serde_json::from_str(
            r#"{"accountNumber": "ACC-1", "type": "CHECKING", "customerId": 3, "balance": 500}"#,
        )
        .unwrap();
        assert_eq!(req.account_number, "ACC-1");
    }

    #[test]
    fn test_request_rejects_unknown_type() {
        let result = serde_json::from_str::<AccountRequest>(
            r#"{"accountNumber": "ACC-1", "type": "BROKERAGE", "customerId": 3}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_shape() {
        let now = Utc::now();
        let view = AccountView::new(
            Account {
                id: Uuid::nil(),
                account_number: "ACC-1".to_string(),
                account_type: AccountType::Checking,
                balance: Decimal::ZERO,
                customer_id: 3,
                created_at: now,
                updated_at: now,
            },
            Customer {
                id: 3,
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace@example.com".to_string(),
                created_at: now,
                updated_at: now,
            },
        );

        let json = serde_json::to_value(AccountResponse::from(view)).unwrap();

        assert_eq!(json["accountNumber"], "ACC-1");
        assert_eq!(json["type"], "CHECKING");
        assert_eq!(json["customerId"], 3);
        assert_eq!(json["customer"]["firstName"], "Grace");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("account_type").is_none());
    }
}
