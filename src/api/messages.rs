use crate::api::AppState;
use crate::api::schemas::messages::{MessageListResponse, SaveMessageRequest, SaveMessageResponse};
use crate::error::Result;
use axum::{Json, body::Bytes, extract::State};

/// Saves the `message` field of a JSON body.
///
/// The body is parsed regardless of `Content-Type`.
///
/// # Errors
/// Returns `AppError::DatabaseUnavailable` if the service runs without a database.
/// Returns `AppError::BadRequest` if the body is not JSON with a `message` field.
/// Returns `AppError::Write` if the insert fails.
pub async fn save_message(State(state): State<AppState>, body: Bytes) -> Result<Json<SaveMessageResponse>> {
    // Database availability is reported before the body is looked at.
    state.message_service.store()?;

    let request = SaveMessageRequest::parse(&body)?;
    state.message_service.save(&request.message).await?;

    Ok(Json(SaveMessageResponse::saved(request.message)))
}

/// Lists the ten most recent messages, newest first.
///
/// # Errors
/// Returns `AppError::DatabaseUnavailable` if the service runs without a database.
/// Returns `AppError::Read` if the query fails.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<MessageListResponse>> {
    let messages = state.message_service.recent().await?;
    Ok(Json(messages.into()))
}
