//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Expected API key; `None` disables authentication
#[derive(Clone, Default)]
pub struct ApiKey(Option<Arc<str>>);

impl ApiKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.filter(|k| !k.is_empty()).map(Arc::from))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.is_some()
    }
}

/// Authentication middleware
/// Validates Bearer token against the API key
pub async fn auth_middleware(
    State(api_key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = api_key.0.as_deref() else {
        // No API key configured = auth disabled (for development)
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app(key: Option<&str>) -> Router {
        let api_key = ApiKey::new(key.map(str::to_string));
        Router::new()
            .route("/accounts", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(api_key, auth_middleware))
    }

    async fn status(app: Router, auth: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri("/accounts");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_disabled_when_no_key() {
        assert!(!ApiKey::new(Some(String::new())).is_enabled());
        assert_eq!(status(app(None), None).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_accepts_matching_bearer() {
        assert_eq!(
            status(app(Some("s3cret")), Some("Bearer s3cret")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_rejects_wrong_or_missing_token() {
        assert_eq!(
            status(app(Some("s3cret")), Some("Bearer nope")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(app(Some("s3cret")), Some("s3cret")).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(app(Some("s3cret")), None).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
