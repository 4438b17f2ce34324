//! Shapes returned by graph reads.

use serde::{Deserialize, Serialize};

/// Author name reported for a post whose POSTED edge is gone.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A post with its author, likers and tags folded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub title: String,
    pub author: String,
    pub likes: i64,
    pub hashtags: Vec<String>,
    pub liked_by: Vec<String>,
}

/// A tag and the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingHashtag {
    pub hashtag: String,
    pub post_count: i64,
}

/// Node and relationship counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_summary_uses_camel_case_keys() {
        let post = PostSummary {
            title: "Hi".to_string(),
            author: "Alice".to_string(),
            likes: 1,
            hashtags: vec!["fun".to_string()],
            liked_by: vec!["Bob".to_string()],
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["likedBy"][0], "Bob");
        assert!(json.get("liked_by").is_none());
    }

    #[test]
    fn test_trending_hashtag_uses_post_count_key() {
        let tag = TrendingHashtag { hashtag: "rust".to_string(), post_count: 3 };
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json, serde_json::json!({"hashtag": "rust", "postCount": 3}));
    }
}
