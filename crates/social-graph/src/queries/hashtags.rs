//! Tag aggregation queries.

use anyhow::Result;
use neo4rs::Query;

use crate::models::TrendingHashtag;
use crate::GraphClient;

/// Tags ranked by how many posts carry them, most used first.
pub async fn trending_hashtags(client: &GraphClient, limit: usize) -> Result<Vec<TrendingHashtag>> {
    let query = Query::new(
        "MATCH (h:Tag)<-[:HAS_TAG]-(p:Post)
         RETURN h.name AS hashtag, count(p) AS postCount
         ORDER BY postCount DESC, hashtag ASC
         LIMIT $limit"
            .to_string(),
    )
    .param("limit", limit as i64);

    let rows = client.query(query).await?;
    let mut tags = Vec::with_capacity(rows.len());
    for row in rows {
        tags.push(TrendingHashtag {
            hashtag: row.get("hashtag").unwrap_or_default(),
            post_count: row.get("postCount").unwrap_or_default(),
        });
    }
    Ok(tags)
}
