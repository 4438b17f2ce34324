//! User route handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::Success;
use crate::error::{ApiError, JsonBody};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserNameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub success: bool,
    pub name: String,
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let users = social_core::users::list_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UserNameRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let name = social_core::users::create_user(state.store.as_ref(), req.name.as_deref()).await?;
    Ok(Json(CreateUserResponse { success: true, name }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UserNameRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::users::delete_user(state.store.as_ref(), req.name.as_deref()).await?;
    Ok(Json(Success::ok()))
}
