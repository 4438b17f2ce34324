//! Post route handlers.

use axum::{extract::State, Json};
use serde::Deserialize;
use social_graph::PostSummary;

use super::Success;
use crate::error::{ApiError, JsonBody};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Comma separated, with or without leading `#`.
    #[serde(default)]
    pub hashtags: Option<String>,
}

#[derive(Deserialize)]
pub struct DeletePostRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let posts = social_core::posts::list_posts(state.store.as_ref()).await?;
    Ok(Json(posts))
}

pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::posts::create_post(
        state.store.as_ref(),
        &req.title,
        &req.author,
        req.hashtags.as_deref(),
    )
    .await?;
    Ok(Json(Success::ok()))
}

pub async fn delete_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeletePostRequest>,
) -> Result<Json<Success>, ApiError> {
    social_core::posts::delete_post(state.store.as_ref(), &req.author, &req.title).await?;
    Ok(Json(Success::ok()))
}
