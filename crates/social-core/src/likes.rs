//! Likes on posts.

use social_graph::SocialStore;
use tracing::info;

use crate::error::SocialResult;

/// Like a post by title. Liking twice keeps one LIKES edge.
pub async fn like_post(store: &dyn SocialStore, user: &str, title: &str) -> SocialResult<()> {
    store.like_post(user, title).await?;
    info!(user = %user, post = %title, "Post liked");
    Ok(())
}

/// Remove a like; a no-op when there is none.
pub async fn unlike_post(store: &dyn SocialStore, user: &str, title: &str) -> SocialResult<()> {
    store.unlike_post(user, title).await?;
    info!(user = %user, post = %title, "Post unliked");
    Ok(())
}
