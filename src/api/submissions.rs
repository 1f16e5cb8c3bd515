//! Write-only submission endpoints
//!
//! - POST /api/contact - Store a contact message
//! - POST /api/feedback - Store a feedback submission

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::api::extract::ValidJson;
use crate::api::middleware::{ApiError, AppState};
use crate::models::{ContactMessage, CreateContactInput, CreateFeedbackInput, Feedback};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(create_contact))
        .route("/feedback", post(create_feedback))
}

pub async fn create_contact(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateContactInput>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    let message = state.contact_repo.create(&input).await?;
    tracing::info!(id = message.id, "Stored contact message");
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn create_feedback(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateFeedbackInput>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    let feedback = state.feedback_repo.create(&input).await?;
    tracing::info!(id = feedback.id, "Stored feedback");
    Ok((StatusCode::CREATED, Json(feedback)))
}
