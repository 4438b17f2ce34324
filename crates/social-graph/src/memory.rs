//! In-memory implementation of SocialStore.
//!
//! Keeps the whole graph behind one `tokio::sync::RwLock` and reproduces the
//! MATCH / MERGE / DETACH DELETE behaviour of the Cypher statements in
//! [`crate::queries`], including the cases where a MATCH finds nothing and the
//! statement silently does nothing. Used by the test suites and by
//! `social serve --in-memory`.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{GraphCounts, PostSummary, TrendingHashtag, UNKNOWN_AUTHOR};
use crate::store::SocialStore;

type PostId = u64;

#[derive(Debug, Clone)]
struct PostNode {
    id: PostId,
    title: String,
}

/// Nodes and relationships. Edges reference users and tags by their unique
/// name, posts by an internal id since titles may repeat.
#[derive(Debug, Default)]
struct GraphState {
    next_post_id: PostId,
    users: Vec<String>,
    posts: Vec<PostNode>,
    tags: Vec<String>,
    friends: Vec<(String, String)>,
    posted: Vec<(String, PostId)>,
    likes: Vec<(String, PostId)>,
    has_tag: Vec<(PostId, String)>,
}

impl GraphState {
    fn has_user(&self, name: &str) -> bool {
        self.users.iter().any(|u| u == name)
    }

    fn post_ids_titled(&self, title: &str) -> Vec<PostId> {
        self.posts.iter().filter(|p| p.title == title).map(|p| p.id).collect()
    }

    fn authors_of(&self, id: PostId) -> Vec<&str> {
        self.posted
            .iter()
            .filter(|(_, p)| *p == id)
            .map(|(u, _)| u.as_str())
            .collect()
    }
}

/// In-memory social graph.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<GraphState>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

#[async_trait]
impl SocialStore for MemoryStore {
    async fn list_users(&self) -> Result<Vec<String>> {
        Ok(self.state.read().await.users.clone())
    }

    async fn merge_user(&self, name: &str) -> Result<String> {
        let mut state = self.state.write().await;
        push_unique(&mut state.users, name.to_string());
        Ok(name.to_string())
    }

    async fn delete_user(&self, name: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.has_user(name) {
            return Ok(());
        }
        state.users.retain(|u| u != name);
        state.friends.retain(|(a, b)| a != name && b != name);
        state.posted.retain(|(u, _)| u != name);
        state.likes.retain(|(u, _)| u != name);
        Ok(())
    }

    async fn add_friend(&self, user: &str, friend: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.has_user(user) && state.has_user(friend) {
            push_unique(&mut state.friends, (user.to_string(), friend.to_string()));
        }
        Ok(())
    }

    async fn friendship_exists(&self, user: &str, friend: &str) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.friends.iter().any(|(a, b)| a == user && b == friend))
    }

    async fn delete_friendship(&self, user: &str, friend: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.friends.retain(|(a, b)| !(a == user && b == friend));
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        let state = self.state.read().await;

        // Rows group on (title, author) exactly as the Cypher aggregate does.
        let mut summaries: Vec<PostSummary> = Vec::new();
        for post in &state.posts {
            let mut authors = state.authors_of(post.id);
            if authors.is_empty() {
                authors.push(UNKNOWN_AUTHOR);
            }

            for author in authors {
                let idx = match summaries
                    .iter()
                    .position(|s| s.title == post.title && s.author == author)
                {
                    Some(idx) => idx,
                    None => {
                        summaries.push(PostSummary {
                            title: post.title.clone(),
                            author: author.to_string(),
                            likes: 0,
                            hashtags: Vec::new(),
                            liked_by: Vec::new(),
                        });
                        summaries.len() - 1
                    }
                };
                let summary = &mut summaries[idx];

                for (user, _) in state.likes.iter().filter(|(_, p)| *p == post.id) {
                    push_unique(&mut summary.liked_by, user.clone());
                }
                for (_, tag) in state.has_tag.iter().filter(|(p, _)| *p == post.id) {
                    push_unique(&mut summary.hashtags, tag.clone());
                }
                summary.likes = summary.liked_by.len() as i64;
            }
        }

        summaries.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(summaries)
    }

    async fn create_post(&self, title: &str, author: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.has_user(author) {
            return Ok(());
        }

        let id = state.next_post_id;
        state.next_post_id += 1;
        state.posts.push(PostNode { id, title: title.to_string() });
        state.posted.push((author.to_string(), id));
        Ok(())
    }

    async fn tag_post(&self, title: &str, hashtag: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let ids = state.post_ids_titled(title);
        if ids.is_empty() {
            return Ok(());
        }

        push_unique(&mut state.tags, hashtag.to_string());
        for id in ids {
            push_unique(&mut state.has_tag, (id, hashtag.to_string()));
        }
        Ok(())
    }

    async fn delete_post(&self, author: &str, title: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let targets: Vec<PostId> = state
            .post_ids_titled(title)
            .into_iter()
            .filter(|id| state.posted.iter().any(|(u, p)| u == author && p == id))
            .collect();
        if targets.is_empty() {
            return Ok(());
        }

        let mut touched_tags: Vec<String> = Vec::new();
        for (post, tag) in &state.has_tag {
            if targets.contains(post) {
                push_unique(&mut touched_tags, tag.clone());
            }
        }

        state.posts.retain(|p| !targets.contains(&p.id));
        state.posted.retain(|(_, p)| !targets.contains(p));
        state.likes.retain(|(_, p)| !targets.contains(p));
        state.has_tag.retain(|(p, _)| !targets.contains(p));

        let orphaned: Vec<String> = touched_tags
            .into_iter()
            .filter(|tag| !state.has_tag.iter().any(|(_, t)| t == tag))
            .collect();
        state.tags.retain(|t| !orphaned.contains(t));
        Ok(())
    }

    async fn like_post(&self, user: &str, title: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.has_user(user) {
            return Ok(());
        }
        for id in state.post_ids_titled(title) {
            push_unique(&mut state.likes, (user.to_string(), id));
        }
        Ok(())
    }

    async fn unlike_post(&self, user: &str, title: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let ids = state.post_ids_titled(title);
        state.likes.retain(|(u, p)| !(u == user && ids.contains(p)));
        Ok(())
    }

    async fn trending_hashtags(&self, limit: usize) -> Result<Vec<TrendingHashtag>> {
        let state = self.state.read().await;
        let mut trending: Vec<TrendingHashtag> = state
            .tags
            .iter()
            .map(|tag| TrendingHashtag {
                hashtag: tag.clone(),
                post_count: state.has_tag.iter().filter(|(_, t)| t == tag).count() as i64,
            })
            .filter(|t| t.post_count > 0)
            .collect();

        trending.sort_by(|a, b| {
            b.post_count
                .cmp(&a.post_count)
                .then_with(|| a.hashtag.cmp(&b.hashtag))
        });
        trending.truncate(limit);
        Ok(trending)
    }

    async fn counts(&self) -> Result<GraphCounts> {
        let state = self.state.read().await;
        Ok(GraphCounts {
            nodes: state.users.len() + state.posts.len() + state.tags.len(),
            relationships: state.friends.len()
                + state.posted.len()
                + state.likes.len()
                + state.has_tag.len(),
        })
    }
}
