//! Profile handlers.

use axum::Json;
use axum::extract::{Path, State};

use neighborly_core::types::UserId;
use neighborly_entity::user::{UpdateProfile, User};

use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.profiles.get(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(update): Json<UpdateProfile>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.profiles.update(&auth, update).await?;
    Ok(Json(ApiResponse::ok(user)))
}
