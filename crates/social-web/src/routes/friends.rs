//! Friendship route handlers.

use axum::{extract::State, Json};
use serde::Deserialize;

use super::Success;
use crate::error::{ApiError, JsonBody};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FriendRequest {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub friend: String,
}

pub async fn add_friend(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FriendRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::friends::add_friend(state.store.as_ref(), &req.user, &req.friend).await?;
    Ok(Json(Success::ok()))
}

pub async fn remove_friend(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FriendRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::friends::remove_friend(state.store.as_ref(), &req.user, &req.friend).await?;
    Ok(Json(Success::ok()))
}
