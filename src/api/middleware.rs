//! Shared API plumbing
//!
//! Contains:
//! - `AppState`, the injected storage handles every handler receives
//! - `ApiError`, the single error-to-response mapping used by all routes
//! - the cross-origin policy layer

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::db::repositories::{
    ContactRepository, FeedbackRepository, NewsRepository, SqlxContactRepository,
    SqlxFeedbackRepository, SqlxNewsRepository,
};
use crate::db::DynDatabasePool;
use crate::models::ValidationError;

/// Application state shared by all handlers
///
/// Built once at startup and cloned per request. Tests construct it
/// directly to swap in alternative repositories.
#[derive(Clone)]
pub struct AppState {
    pub pool: DynDatabasePool,
    pub news_repo: Arc<dyn NewsRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub feedback_repo: Arc<dyn FeedbackRepository>,
}

impl AppState {
    /// Wire the sqlx repositories to one shared pool
    pub fn new(pool: DynDatabasePool) -> Self {
        Self {
            news_repo: SqlxNewsRepository::boxed(pool.clone()),
            contact_repo: SqlxContactRepository::boxed(pool.clone()),
            feedback_repo: SqlxFeedbackRepository::boxed(pool.clone()),
            pool,
        }
    }
}

/// Error body returned by every failing route
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Every way a request can fail
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The targeted row does not exist (nothing returned or affected)
    #[error("Not found")]
    NotFound,
    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// The request did not match the route's schema
    #[error("{0}")]
    BadRequest(String),
    /// The database rejected or could not run the statement
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::NotFound => tracing::debug!("Responding 404"),
            Self::MethodNotAllowed => tracing::debug!("Responding 405"),
            Self::BadRequest(msg) => tracing::warn!("Rejected request: {}", msg),
            Self::Storage(_) => {}
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Storage failures keep only the database's own message for the client;
/// the full context chain goes to the log.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Storage error: {:#}", err);
        Self::Storage(err.root_cause().to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Cross-origin policy: credentialed requests from the configured origins
/// only. `Authorization` is accepted as a header but no route checks it.
///
/// A `*` entry is skipped: wildcards cannot be combined with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            if origin.trim() == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; list explicit origins instead");
                return None;
            }
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Storage("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_is_fixed() {
        assert_eq!(ApiError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn test_anyhow_conversion_keeps_root_cause() {
        let err = anyhow::anyhow!("connection refused").context("Failed to list news");
        let api: ApiError = err.into();
        assert!(matches!(api, ApiError::Storage(ref msg) if msg == "connection refused"));
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let api: ApiError = ValidationError::OutOfRange {
            field: "rating",
            min: 1,
            max: 5,
        }
        .into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), "rating must be between 1 and 5");
    }

    #[test]
    fn test_cors_layer_skips_wildcard_origin() {
        let _layer = cors_layer(&["*".to_string()]);
        let _layer = cors_layer(&[" * ".to_string(), "http://localhost:8081".to_string()]);
    }
}
