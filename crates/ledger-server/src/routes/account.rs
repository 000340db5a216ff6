//! Account Routes
//!
//! HTTP handlers that delegate to AccountService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use ledger::{AccountInput, DomainError};

use crate::models::{AccountRequest, AccountResponse, ErrorResponse};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to its HTTP status and error body
pub fn api_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } | DomainError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::RemoteUnavailable(_) => StatusCode::BAD_GATEWAY,
        DomainError::Repository(_) => {
            tracing::error!("Repository failure: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::from(&e)))
}

/// List all Accounts
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "List of all Accounts", body = Vec<AccountResponse>),
        (status = 404, description = "An account references a missing customer", body = ErrorResponse),
        (status = 502, description = "Customer service unavailable", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let views = state.account_service.list_all().await.map_err(api_error)?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// Create new Account
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = AccountRequest,
    responses(
        (status = 201, description = "Account created successfully", body = AccountResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 409, description = "Account number already exists", body = ErrorResponse),
        (status = 502, description = "Customer service unavailable", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let input = AccountInput::try_from(payload).map_err(api_error)?;
    let view = state
        .account_service
        .create(input)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// Get Account by ID
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account or its customer not found", body = ErrorResponse),
        (status = 502, description = "Customer service unavailable", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>, ApiError> {
    let view = state.account_service.get(id).await.map_err(api_error)?;

    Ok(Json(view.into()))
}

/// List Accounts of a customer
#[utoipa::path(
    get,
    path = "/accounts/customer/{customer_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Accounts of the customer", body = Vec<AccountResponse>),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 502, description = "Customer service unavailable", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn list_customer_accounts(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let views = state
        .account_service
        .list_by_customer(customer_id)
        .await
        .map_err(api_error)?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// Update Account
#[utoipa::path(
    put,
    path = "/accounts/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    request_body = AccountRequest,
    responses(
        (status = 200, description = "Account updated successfully", body = AccountResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Account or customer not found", body = ErrorResponse),
        (status = 409, description = "Account number already exists", body = ErrorResponse),
        (status = 502, description = "Customer service unavailable", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AccountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let input = AccountInput::try_from(payload).map_err(api_error)?;
    let view = state
        .account_service
        .update(id, input)
        .await
        .map_err(api_error)?;

    Ok(Json(view.into()))
}

/// Delete Account
#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "Account"
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.account_service.delete(id).await.map_err(api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route(
            "/accounts/customer/:customer_id",
            get(list_customer_accounts),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(e: DomainError) -> StatusCode {
        api_error(e).0
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            status_of(DomainError::not_found("Account", Uuid::nil())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::CustomerNotFound(1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::duplicate_account_number("ACC-1")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::Validation("blank".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::RemoteUnavailable("timeout".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(DomainError::Repository("pool closed".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_distinguishes_missing_account_from_missing_customer() {
        let (_, Json(account)) = api_error(DomainError::not_found("Account", Uuid::nil()));
        let (_, Json(customer)) = api_error(DomainError::CustomerNotFound(4));

        assert_eq!(account.error, "not_found");
        assert_eq!(customer.error, "customer_not_found");
        assert_eq!(customer.message, "Customer not found: 4");
    }
}
