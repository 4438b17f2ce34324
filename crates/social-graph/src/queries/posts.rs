//! Post node statements: listing, creation, tagging and deletion.

use anyhow::Result;
use neo4rs::Query;

use crate::models::{PostSummary, UNKNOWN_AUTHOR};
use crate::GraphClient;

/// Every post with its author, like count, tags and likers, ordered by title.
pub async fn list_posts(client: &GraphClient) -> Result<Vec<PostSummary>> {
    let query = Query::new(
        "MATCH (p:Post)
         OPTIONAL MATCH (p)<-[:POSTED]-(u:User)
         OPTIONAL MATCH (p)<-[:LIKES]-(l:User)
         OPTIONAL MATCH (p)-[:HAS_TAG]->(h:Tag)
         RETURN p.title AS title,
                COALESCE(u.name, $unknown) AS author,
                count(DISTINCT l) AS likes,
                collect(DISTINCT h.name) AS hashtags,
                collect(DISTINCT l.name) AS likers
         ORDER BY title"
            .to_string(),
    )
    .param("unknown", UNKNOWN_AUTHOR);

    let rows = client.query(query).await?;
    let mut posts = Vec::with_capacity(rows.len());
    for row in rows {
        posts.push(PostSummary {
            title: row.get("title").unwrap_or_default(),
            author: row.get("author").unwrap_or_else(|_| UNKNOWN_AUTHOR.to_string()),
            likes: row.get("likes").unwrap_or_default(),
            hashtags: row.get("hashtags").unwrap_or_default(),
            liked_by: row.get("likers").unwrap_or_default(),
        });
    }
    Ok(posts)
}

/// CREATE a Post and link it to its author.
///
/// Matches nothing when the author does not exist, so no post is created.
/// Titles are not checked for collisions.
pub async fn create_post(client: &GraphClient, title: &str, author: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (u:User {name: $author})
         CREATE (p:Post {title: $title})
         MERGE (u)-[:POSTED]->(p)"
            .to_string(),
    )
    .param("title", title)
    .param("author", author);

    client.execute(query).await
}

/// MERGE the Tag and a HAS_TAG edge from every post with this title.
pub async fn tag_post(client: &GraphClient, title: &str, hashtag: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (p:Post {title: $title})
         MERGE (h:Tag {name: $hashtag})
         MERGE (p)-[:HAS_TAG]->(h)"
            .to_string(),
    )
    .param("title", title)
    .param("hashtag", hashtag);

    client.execute(query).await
}

/// Detach-delete the author's post and drop any tag it leaves unused.
pub async fn delete_post(client: &GraphClient, author: &str, title: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (u:User {name: $author})-[:POSTED]->(p:Post {title: $title})
         OPTIONAL MATCH (p)-[:HAS_TAG]->(t:Tag)
         DETACH DELETE p
         WITH DISTINCT t
         WHERE t IS NOT NULL AND NOT (t)<-[:HAS_TAG]-(:Post)
         DELETE t"
            .to_string(),
    )
    .param("author", author)
    .param("title", title);

    client.execute(query).await
}
