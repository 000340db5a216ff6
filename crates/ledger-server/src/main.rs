use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{HttpCustomerClient, PgAccountRepository};
use application::AccountService;
use auth::ApiKey;
use config::ServerConfig;

/// Application service wired to the concrete adapters
pub type AppAccountService = AccountService<PgAccountRepository, HttpCustomerClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AppAccountService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Ledger API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Ledger API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;

    let api_key = ApiKey::new(config.api_key.clone());
    if api_key.is_enabled() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("No LEDGER_API_KEY set - authentication disabled");
    }

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    // Initialize adapters and application services
    let account_repo = Arc::new(PgAccountRepository::new(pool));
    let customer_client = Arc::new(HttpCustomerClient::new(
        &config.customer_service_url,
        config.customer_service_token.clone(),
        config.customer_lookup_timeout,
    )?);
    let account_service = Arc::new(AccountService::new(account_repo, customer_client));

    tracing::info!(
        "Customer lookups go to {} (timeout {:?})",
        config.customer_service_url,
        config.customer_lookup_timeout
    );

    let state = AppState { account_service };

    // Protected routes (require authentication)
    let protected_routes = routes::account::router()
        .layer(middleware::from_fn_with_state(api_key, auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Ledger API ready");

    Ok(router.into())
}
