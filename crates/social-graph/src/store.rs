//! SocialStore trait definition
//!
//! The graph primitives the API layer is built on. `GraphClient` runs them
//! as Cypher against Neo4j; `MemoryStore` mirrors the same pattern semantics
//! in process.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{GraphCounts, PostSummary, TrendingHashtag};
use crate::queries;
use crate::GraphClient;

/// Abstract interface over the social graph.
///
/// Every method is a single statement against the store. Sequences of
/// statements are composed by callers and are not atomic.
#[async_trait]
pub trait SocialStore: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Names of all users.
    async fn list_users(&self) -> Result<Vec<String>>;

    /// Create the user if absent; returns the stored name.
    async fn merge_user(&self, name: &str) -> Result<String>;

    /// Remove the user and every relationship touching it.
    async fn delete_user(&self, name: &str) -> Result<()>;

    // ========================================================================
    // Friendships
    // ========================================================================

    /// MERGE `user -[:FRIEND]-> friend` when both users exist.
    async fn add_friend(&self, user: &str, friend: &str) -> Result<()>;

    async fn friendship_exists(&self, user: &str, friend: &str) -> Result<bool>;

    async fn delete_friendship(&self, user: &str, friend: &str) -> Result<()>;

    // ========================================================================
    // Posts and tags
    // ========================================================================

    /// All posts ordered by title ascending.
    async fn list_posts(&self) -> Result<Vec<PostSummary>>;

    /// Create a post authored by an existing user.
    async fn create_post(&self, title: &str, author: &str) -> Result<()>;

    /// Link every post with `title` to the tag, creating the tag if needed.
    async fn tag_post(&self, title: &str, hashtag: &str) -> Result<()>;

    /// Delete the author's post(s) with `title` and any tags left unused.
    async fn delete_post(&self, author: &str, title: &str) -> Result<()>;

    // ========================================================================
    // Likes
    // ========================================================================

    async fn like_post(&self, user: &str, title: &str) -> Result<()>;

    async fn unlike_post(&self, user: &str, title: &str) -> Result<()>;

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Up to `limit` tags by post count, descending.
    async fn trending_hashtags(&self, limit: usize) -> Result<Vec<TrendingHashtag>>;

    async fn counts(&self) -> Result<GraphCounts>;
}

#[async_trait]
impl SocialStore for GraphClient {
    async fn list_users(&self) -> Result<Vec<String>> {
        queries::users::list_users(self).await
    }

    async fn merge_user(&self, name: &str) -> Result<String> {
        queries::users::merge_user(self, name).await
    }

    async fn delete_user(&self, name: &str) -> Result<()> {
        queries::users::delete_user(self, name).await
    }

    async fn add_friend(&self, user: &str, friend: &str) -> Result<()> {
        queries::friends::add_friend(self, user, friend).await
    }

    async fn friendship_exists(&self, user: &str, friend: &str) -> Result<bool> {
        queries::friends::friendship_exists(self, user, friend).await
    }

    async fn delete_friendship(&self, user: &str, friend: &str) -> Result<()> {
        queries::friends::delete_friendship(self, user, friend).await
    }

    async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        queries::posts::list_posts(self).await
    }

    async fn create_post(&self, title: &str, author: &str) -> Result<()> {
        queries::posts::create_post(self, title, author).await
    }

    async fn tag_post(&self, title: &str, hashtag: &str) -> Result<()> {
        queries::posts::tag_post(self, title, hashtag).await
    }

    async fn delete_post(&self, author: &str, title: &str) -> Result<()> {
        queries::posts::delete_post(self, author, title).await
    }

    async fn like_post(&self, user: &str, title: &str) -> Result<()> {
        queries::likes::like_post(self, user, title).await
    }

    async fn unlike_post(&self, user: &str, title: &str) -> Result<()> {
        queries::likes::unlike_post(self, user, title).await
    }

    async fn trending_hashtags(&self, limit: usize) -> Result<Vec<TrendingHashtag>> {
        queries::hashtags::trending_hashtags(self, limit).await
    }

    async fn counts(&self) -> Result<GraphCounts> {
        self.get_counts().await
    }
}
