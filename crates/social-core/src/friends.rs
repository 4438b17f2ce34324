//! Friendships between users.
//!
//! FRIEND edges are directed and neither name is checked for existence.

use social_graph::SocialStore;
use tracing::{info, warn};

use crate::error::{SocialError, SocialResult};

/// Message returned when removing an edge that is not there.
pub const FRIENDSHIP_NOT_FOUND: &str = "Friendship does not exist";

/// Add `user -> friend`. Repeating the call leaves a single edge.
pub async fn add_friend(store: &dyn SocialStore, user: &str, friend: &str) -> SocialResult<()> {
    store.add_friend(user, friend).await?;
    info!(user = %user, friend = %friend, "Friendship merged");
    Ok(())
}

/// Remove `user -> friend`, failing with `NotFound` when the edge is absent.
///
/// The check and the delete are separate statements; a concurrent removal
/// between them is harmless since the delete then matches nothing.
pub async fn remove_friend(store: &dyn SocialStore, user: &str, friend: &str) -> SocialResult<()> {
    if !store.friendship_exists(user, friend).await? {
        warn!(user = %user, friend = %friend, "Friendship to remove does not exist");
        return Err(SocialError::not_found(FRIENDSHIP_NOT_FOUND));
    }

    store.delete_friendship(user, friend).await?;
    info!(user = %user, friend = %friend, "Friendship removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_graph::MemoryStore;

    async fn store_with(users: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        for user in users {
            store.merge_user(user).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_remove_missing_friendship_is_not_found() {
        let store = store_with(&["Alice", "Bob"]).await;
        let err = remove_friend(&store, "Alice", "Bob").await.unwrap_err();
        assert!(matches!(err, SocialError::NotFound(ref msg) if msg == FRIENDSHIP_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_remove_only_matches_the_given_direction() {
        let store = store_with(&["Alice", "Bob"]).await;
        add_friend(&store, "Alice", "Bob").await.unwrap();

        let err = remove_friend(&store, "Bob", "Alice").await.unwrap_err();
        assert!(matches!(err, SocialError::NotFound(_)));
        assert!(store.friendship_exists("Alice", "Bob").await.unwrap());

        remove_friend(&store, "Alice", "Bob").await.unwrap();
        assert!(!store.friendship_exists("Alice", "Bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_self_friendship_is_allowed() {
        let store = store_with(&["Alice"]).await;
        add_friend(&store, "Alice", "Alice").await.unwrap();
        assert!(store.friendship_exists("Alice", "Alice").await.unwrap());
    }
}
