//! News API endpoints
//!
//! - GET /api/news - List all articles, newest first
//! - GET /api/news/{id} - Get one article
//! - POST /api/news - Create an article
//! - PUT /api/news/{id} - Replace every field of an article
//! - DELETE /api/news/{id} - Delete an article

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::extract::{ApiPath, ValidJson};
use crate::api::middleware::{ApiError, AppState};
use crate::models::{News, NewsInput};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_news).post(create_news))
        .route(
            "/news/{id}",
            get(get_news).put(replace_news).delete(delete_news),
        )
}

/// Acknowledgement for a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub async fn list_news(State(state): State<AppState>) -> Result<Json<Vec<News>>, ApiError> {
    let news = state.news_repo.list().await?;
    Ok(Json(news))
}

pub async fn get_news(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<News>, ApiError> {
    state
        .news_repo
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_news(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<NewsInput>,
) -> Result<(StatusCode, Json<News>), ApiError> {
    let news = state.news_repo.create(&input).await?;
    tracing::info!(id = news.id, "Created news");
    Ok((StatusCode::CREATED, Json(news)))
}

pub async fn replace_news(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidJson(input): ValidJson<NewsInput>,
) -> Result<Json<News>, ApiError> {
    state
        .news_repo
        .replace(id, &input)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_news(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if !state.news_repo.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "Deleted news");
    Ok(Json(SuccessResponse { success: true }))
}
