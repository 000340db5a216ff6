//! Account Application Service (Use Case)
//!
//! Owns the account lifecycle and enriches every returned account with a
//! customer snapshot from the customer service.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use ledger::{AccountInput, AccountRepository, AccountView, Customer, CustomerLookup, DomainError};

/// Application service for Account operations
pub struct AccountService<R: AccountRepository, C: CustomerLookup> {
    repo: Arc<R>,
    customers: Arc<C>,
}

impl<R: AccountRepository, C: CustomerLookup> AccountService<R, C> {
    pub fn new(repo: Arc<R>, customers: Arc<C>) -> Self {
        Self { repo, customers }
    }

    /// Create an Account and return it with its customer.
    ///
    /// The account row is not rolled back if the customer cannot be resolved.
    pub async fn create(&self, input: AccountInput) -> Result<AccountView, DomainError> {
        if self
            .repo
            .find_by_account_number(&input.account_number)
            .await?
            .is_some()
        {
            return Err(DomainError::duplicate_account_number(&input.account_number));
        }

        // The store's unique constraint still rejects a concurrent duplicate
        let account = self.repo.insert(&input).await?;
        tracing::info!(
            "Created Account: {} ({}) for customer {}",
            account.account_number,
            account.id,
            account.customer_id
        );

        let customer = self.resolve(account.customer_id).await?;
        Ok(AccountView::new(account, customer))
    }

    /// Replace number, type and owner of an Account
    pub async fn update(&self, id: Uuid, input: AccountInput) -> Result<AccountView, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account", id))?;

        if current.account_number != input.account_number {
            if let Some(other) = self
                .repo
                .find_by_account_number(&input.account_number)
                .await?
            {
                if other.id != id {
                    return Err(DomainError::duplicate_account_number(&input.account_number));
                }
            }
        }

        let account = self
            .repo
            .update(id, &input)
            .await?
            .ok_or_else(|| DomainError::not_found("Account", id))?;
        tracing::info!("Updated Account: {} ({})", account.account_number, account.id);

        let customer = self.resolve(account.customer_id).await?;
        Ok(AccountView::new(account, customer))
    }

    /// Get an Account by ID with its customer
    pub async fn get(&self, id: Uuid) -> Result<AccountView, DomainError> {
        let account = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account", id))?;

        let customer = self.resolve(account.customer_id).await?;
        Ok(AccountView::new(account, customer))
    }

    /// Get all Accounts, each with its customer.
    ///
    /// Each distinct customer is looked up once; any failed lookup fails the
    /// whole listing.
    pub async fn list_all(&self) -> Result<Vec<AccountView>, DomainError> {
        let accounts = self.repo.find_all().await?;
        let mut resolved: HashMap<i64, Customer> = HashMap::new();
        let mut views = Vec::with_capacity(accounts.len());

        for account in accounts {
            let customer = match resolved.get(&account.customer_id) {
                Some(customer) => customer.clone(),
                None => {
                    let customer = self.resolve(account.customer_id).await?;
                    resolved.insert(account.customer_id, customer.clone());
                    customer
                }
            };
            views.push(AccountView::new(account, customer));
        }

        Ok(views)
    }

    /// Get all Accounts of one customer.
    ///
    /// The customer is resolved once up front and shared by every view.
    pub async fn list_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<AccountView>, DomainError> {
        let customer = self.resolve(customer_id).await?;
        let accounts = self.repo.find_by_customer(customer_id).await?;

        Ok(accounts
            .into_iter()
            .map(|account| AccountView::new(account, customer.clone()))
            .collect())
    }

    /// Delete an Account
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.exists(id).await? {
            return Err(DomainError::not_found("Account", id));
        }

        if self.repo.delete(id).await? {
            tracing::info!("Deleted Account: {}", id);
        }
        Ok(())
    }

    async fn resolve(&self, customer_id: i64) -> Result<Customer, DomainError> {
        self.customers.get(customer_id).await.inspect_err(|e| {
            tracing::warn!("Customer {} could not be resolved: {}", customer_id, e);
        })
    }
}
