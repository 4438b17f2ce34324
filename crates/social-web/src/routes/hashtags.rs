//! Hashtag route handlers.

use axum::{extract::State, Json};
use social_graph::TrendingHashtag;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn trending(State(state): State<AppState>) -> Result<Json<Vec<TrendingHashtag>>, ApiError> {
    let tags = social_core::hashtags::trending(state.store.as_ref()).await?;
    Ok(Json(tags))
}
