//! Contribution statistics handlers.

use axum::Json;
use axum::extract::{Path, State};

use neighborly_core::types::UserId;
use neighborly_service::stats::{CommunityStats, StatsReport};

use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/{id}/stats
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<StatsReport>>, ApiError> {
    let report = state.stats.report(id).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/stats/community
pub async fn community(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<CommunityStats>>, ApiError> {
    let snapshot = state.stats.community().await?;
    Ok(Json(ApiResponse::ok(snapshot)))
}
