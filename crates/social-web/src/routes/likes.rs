//! Like route handlers.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::Success;
use crate::error::{ApiError, JsonBody};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LikeRequest {
    #[serde(default)]
    pub user: String,
    /// Title of the post.
    #[serde(default)]
    pub post: String,
}

pub async fn like_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LikeRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::likes::like_post(state.store.as_ref(), &req.user, &req.post).await?;
    Ok(Json(Success::ok()))
}

pub async fn unlike_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LikeRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::likes::unlike_post(state.store.as_ref(), &req.user, &req.post).await?;
    Ok(Json(Success::ok()))
}
