//! Posts: listing, creation with tags, and deletion.

use social_graph::{PostSummary, SocialStore};
use tracing::{debug, info};

use crate::error::SocialResult;
use crate::hashtags::parse_hashtags;

/// All posts with author, likes, tags and likers, ordered by title.
pub async fn list_posts(store: &dyn SocialStore) -> SocialResult<Vec<PostSummary>> {
    let posts = store.list_posts().await?;
    debug!(count = posts.len(), "Listed posts");
    Ok(posts)
}

/// Create a post and link each parsed hashtag to it.
///
/// The post and every tag link are separate statements. A failure part way
/// through leaves the post with only the tags linked so far. Titles are not
/// checked for duplicates and a missing author makes the whole call a no-op.
pub async fn create_post(
    store: &dyn SocialStore,
    title: &str,
    author: &str,
    hashtags: Option<&str>,
) -> SocialResult<()> {
    store.create_post(title, author).await?;

    let tags = hashtags.map(parse_hashtags).unwrap_or_default();
    for tag in &tags {
        store.tag_post(title, tag).await?;
    }

    info!(post = %title, author = %author, tags = tags.len(), "Post created");
    Ok(())
}

/// Delete the author's post and garbage-collect tags it leaves unused.
///
/// Succeeds without effect when the author did not post that title.
pub async fn delete_post(store: &dyn SocialStore, author: &str, title: &str) -> SocialResult<()> {
    store.delete_post(author, title).await?;
    info!(post = %title, author = %author, "Post deleted");
    Ok(())
}
