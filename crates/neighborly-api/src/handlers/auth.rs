//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;

use neighborly_entity::user::User;
use neighborly_service::account::{AuthResponse, LoginInput, RegisterInput};

use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let result = state.accounts.register(input).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let result = state.accounts.login(input).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.profiles.get(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(user)))
}
