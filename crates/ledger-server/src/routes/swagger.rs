//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AccountRequest, AccountResponse, CustomerResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Account endpoints
        super::account::list_accounts,
        super::account::create_account,
        super::account::get_account,
        super::account::list_customer_accounts,
        super::account::update_account,
        super::account::delete_account,
    ),
    info(
        title = "Ledger API",
        version = "0.1.0",
        description = "Account aggregation service\n\nAccounts are owned here; customers are resolved from the customer service on every read.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Account", description = "Account lifecycle with customer enrichment"),
    ),
    components(
        schemas(
            AccountRequest,
            AccountResponse,
            CustomerResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_account_paths_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/accounts",
            "/accounts/{id}",
            "/accounts/customer/{customer_id}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {path}");
        }
    }
}
