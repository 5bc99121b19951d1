//! Draw API endpoints
//!
//! All routes require an authenticated user; the drawer identity on a
//! performed draw comes from the session, not the payload.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::{AppState, DrawServiceApi};
use crate::api::types::{ApiEnvelope, ApiError};
use crate::domain::draw::DrawRequest;
use crate::infrastructure::draw::DrawResponse;

/// Create the draw router
pub fn create_draw_router() -> Router<AppState> {
    Router::new()
        .route("/", post(perform_draw).get(list_draws))
        .route("/{id}", get(get_draw).delete(delete_draw))
}

/// Draw request payload; the drawer is the authenticated user
#[derive(Debug, Deserialize)]
pub struct PerformDrawApiRequest {
    pub group_count: usize,
}

/// Perform a draw
///
/// POST /draws
pub async fn perform_draw(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<PerformDrawApiRequest>,
) -> Result<Json<ApiEnvelope<DrawResponse>>, ApiError> {
    debug!(group_count = request.group_count, drawer = %user.email(), "Performing draw");

    let draw = state
        .draw_service
        .perform_draw(DrawRequest::new(
            user.first_name(),
            user.last_name(),
            request.group_count,
        ))
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ApiEnvelope::ok_with_message("DrawCompleted", draw)))
}

/// Fetch one draw by id
///
/// GET /draws/{id}
pub async fn get_draw(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<DrawResponse>>, ApiError> {
    let draw = state
        .draw_service
        .get_draw(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ApiEnvelope::ok_with_message("DrawRetrieved", draw)))
}

/// List all draws, newest first
///
/// GET /draws
pub async fn list_draws(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
) -> Result<Json<ApiEnvelope<Vec<DrawResponse>>>, ApiError> {
    let draws = state
        .draw_service
        .list_draws()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ApiEnvelope::ok_with_message("DrawsRetrieved", draws)))
}

/// Soft-delete a draw
///
/// DELETE /draws/{id}
pub async fn delete_draw(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    state
        .draw_service
        .delete_draw(&id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ApiEnvelope::message_only("DrawDeleted")))
}
