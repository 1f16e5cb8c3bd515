//! API layer - HTTP handlers and routing
//!
//! All routes live under `/api`:
//! - GET /api/health
//! - GET, POST /api/news
//! - GET, PUT, DELETE /api/news/{id}
//! - POST /api/contact
//! - POST /api/feedback

pub mod extract;
pub mod health;
pub mod middleware;
pub mod news;
pub mod submissions;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use middleware::{cors_layer, ApiError, AppState, ErrorBody};

/// Build the `/api` routes
pub fn build_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .merge(news::router())
        .merge(submissions::router())
        .method_not_allowed_fallback(method_not_allowed)
}

/// Build the complete router with middleware
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", build_api_router())
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origins)),
        )
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
