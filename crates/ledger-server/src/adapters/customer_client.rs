//! HTTP Customer Lookup
//!
//! Resolves customers from the customer service using reqwest.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use ledger::{Customer, CustomerLookup, DomainError};

/// HTTP implementation of CustomerLookup
pub struct HttpCustomerClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Customer as serialized by the customer service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerRecord {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl HttpCustomerClient {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ledger-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn customer_url(&self, customer_id: i64) -> String {
        format!("{}/api/customers/{}", self.base_url, customer_id)
    }
}

/// Classify a non-success status from the customer service
fn status_error(status: StatusCode, customer_id: i64) -> DomainError {
    if status == StatusCode::NOT_FOUND {
        DomainError::CustomerNotFound(customer_id)
    } else {
        DomainError::RemoteUnavailable(format!(
            "customer service returned {status} for customer {customer_id}"
        ))
    }
}

#[async_trait]
impl CustomerLookup for HttpCustomerClient {
    async fn get(&self, customer_id: i64) -> Result<Customer, DomainError> {
        let mut request = self.client.get(self.customer_url(customer_id));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| DomainError::RemoteUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!("Customer lookup {} answered {}", customer_id, status);
            return Err(status_error(status, customer_id));
        }

        let record: CustomerRecord = resp.json().await.map_err(|e| {
            DomainError::RemoteUnavailable(format!("Failed to parse customer response: {e}"))
        })?;

        Ok(record.into())
    }
}
