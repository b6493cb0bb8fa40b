//! Message thread handlers.

use axum::Json;
use axum::extract::{Path, State};

use neighborly_core::types::RequestId;
use neighborly_entity::message::Message;

use crate::error::ApiError;
use crate::dto::request::SendMessageBody;
use crate::dto::response::{ApiResponse, CountResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/requests/{id}/messages
pub async fn list_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
) -> Result<Json<ApiResponse<Vec<Message>>>, ApiError> {
    let messages = state.messages.list_thread(&auth, id).await?;
    Ok(Json(ApiResponse::ok(messages)))
}

/// POST /api/requests/{id}/messages
pub async fn send(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
    Json(body): Json<SendMessageBody>,
) -> Result<Json<ApiResponse<Message>>, ApiError> {
    let message = state.messages.send(&auth, id, body.body).await?;
    Ok(Json(ApiResponse::ok(message)))
}

/// PUT /api/requests/{id}/messages/read
pub async fn mark_thread_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.messages.mark_thread_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// GET /api/messages/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.messages.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}
