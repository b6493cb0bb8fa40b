//! Help-request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use neighborly_core::types::{PageResponse, RequestId};
use neighborly_entity::request::{CreateRequest, HelpRequest};

use crate::error::ApiError;
use crate::dto::request::{CompleteBody, ListRequestsQuery, RateBody, VerifyBody};
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/requests
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<ApiResponse<PageResponse<HelpRequest>>>, ApiError> {
    let (filter, sort, page) = query.into_parts();
    let result = state.lifecycle.list_requests(&filter, sort, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/requests
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateRequest>,
) -> Result<Json<ApiResponse<HelpRequest>>, ApiError> {
    let request = state.lifecycle.create_request(&auth, input).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// GET /api/requests/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<RequestId>,
) -> Result<Json<ApiResponse<HelpRequest>>, ApiError> {
    let request = state.lifecycle.get_request(id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// GET /api/requests/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<HelpRequest>>>, ApiError> {
    let requests = state.lifecycle.list_by_requester(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/requests/claimed
pub async fn list_claimed(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<HelpRequest>>>, ApiError> {
    let requests = state.lifecycle.list_by_claimant(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// POST /api/requests/{id}/claim
pub async fn claim(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
) -> Result<Json<ApiResponse<HelpRequest>>, ApiError> {
    let request = state.lifecycle.claim(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/requests/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
    Json(body): Json<CompleteBody>,
) -> Result<Json<ApiResponse<HelpRequest>>, ApiError> {
    let request = state.lifecycle.mark_complete(&auth, id, body.position).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/requests/{id}/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
    Json(body): Json<VerifyBody>,
) -> Result<Json<ApiResponse<HelpRequest>>, ApiError> {
    let request = state
        .lifecycle
        .verify_completion(&auth, id, body.approved, body.reason)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/requests/{id}/rating
pub async fn rate(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RequestId>,
    Json(body): Json<RateBody>,
) -> Result<Json<ApiResponse<HelpRequest>>, ApiError> {
    let request = state
        .lifecycle
        .rate(&auth, id, body.stars, body.review)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}
