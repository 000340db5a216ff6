//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use ledger::{Account, AccountInput, AccountRepository, DomainError};

/// PostgreSQL implementation of AccountRepository
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    account_number: String,
    account_type: String,
    balance: Decimal,
    customer_id: i64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            account_number: row.account_number,
            account_type: row.account_type.parse().map_err(DomainError::Repository)?,
            balance: row.balance,
            customer_id: row.customer_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn to_accounts(rows: Vec<AccountRow>) -> Result<Vec<Account>, DomainError> {
    rows.into_iter().map(Account::try_from).collect()
}

/// Map write errors, turning unique violations into conflicts
fn write_error(e: sqlx::Error, account_number: &str) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::duplicate_account_number(account_number)
        }
        _ => DomainError::Repository(e.to_string()),
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let rows =
            sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        to_accounts(rows)
    }

    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Account>, DomainError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            "SELECT * FROM accounts WHERE customer_id = $1 ORDER BY created_at, id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        to_accounts(rows)
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, DomainError> {
        let row =
            sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE account_number = $1")
                .bind(account_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn insert(&self, input: &AccountInput) -> Result<Account, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (account_number, account_type, customer_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&input.account_number)
        .bind(input.account_type.as_str())
        .bind(input.customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &input.account_number))?;

        row.try_into()
    }

    async fn update(
        &self,
        id: Uuid,
        input: &AccountInput,
    ) -> Result<Option<Account>, DomainError> {
        // updated_at must move forward even when NOW() has not
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
            SET account_number = $2, account_type = $3, customer_id = $4,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.account_number)
        .bind(input.account_type.as_str())
        .bind(input.customer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &input.account_number))?;

        row.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
