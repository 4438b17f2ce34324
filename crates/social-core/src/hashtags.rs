//! Hashtag parsing and trending tags.

use social_graph::{SocialStore, TrendingHashtag};
use tracing::debug;

use crate::error::SocialResult;

/// Number of tags returned by [`trending`].
pub const TRENDING_LIMIT: usize = 10;

/// Split a comma separated hashtag string into tag names.
///
/// Entries are trimmed, empty ones dropped, then a single leading `#` is
/// removed. Repeats are kept; the store merges them into one tag.
pub fn parse_hashtags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.strip_prefix('#').unwrap_or(tag).to_string())
        .collect()
}

/// The most used tags, highest post count first.
pub async fn trending(store: &dyn SocialStore) -> SocialResult<Vec<TrendingHashtag>> {
    let tags = store.trending_hashtags(TRENDING_LIMIT).await?;
    debug!(count = tags.len(), "Listed trending hashtags");
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_strips_hash() {
        assert_eq!(parse_hashtags("fun, #test ,  rust"), vec!["fun", "test", "rust"]);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        assert_eq!(parse_hashtags(" , a,,  ,b, "), vec!["a", "b"]);
        assert!(parse_hashtags("").is_empty());
        assert!(parse_hashtags("   ").is_empty());
    }

    #[test]
    fn test_parse_strips_only_one_hash() {
        assert_eq!(parse_hashtags("##double"), vec!["#double"]);
    }

    #[test]
    fn test_parse_keeps_repeats() {
        assert_eq!(parse_hashtags("#x, x"), vec!["x", "x"]);
    }

    #[test]
    fn test_lone_hash_becomes_empty_tag() {
        assert_eq!(parse_hashtags("#"), vec![""]);
    }
}
