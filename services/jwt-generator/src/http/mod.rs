//! HTTP adapter: routes, error mapping and middleware.

use crate::config::Config;
use crate::error::TokenError;
use crate::generator::{GenerateJwtRequest, GenerateJwtResponse, SigningRequest, TokenGenerator};
use crate::jwt::Clock;
use crate::metrics;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Error returned to HTTP clients as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Human-readable cause sent as `detail`.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        if err.is_client_error() {
            Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: err.to_string(),
            }
        } else {
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: format!("Internal server error: {err}"),
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Build the service router around `generator`.
pub fn router<C>(generator: TokenGenerator<C>, config: &Config) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/generate_jwt", post(generate_jwt::<C>))
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .with_state(Arc::new(generator))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

async fn generate_jwt<C: Clock>(
    State(generator): State<Arc<TokenGenerator<C>>>,
    payload: Result<Json<GenerateJwtRequest>, JsonRejection>,
) -> Result<Json<GenerateJwtResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = SigningRequest::try_from(payload)?;
    let token = generator.generate(request)?;
    Ok(Json(GenerateJwtResponse { token }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn metrics_handler() -> Response {
    match metrics::render() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
