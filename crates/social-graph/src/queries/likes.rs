//! LIKES relationship statements.

use anyhow::Result;
use neo4rs::Query;

use crate::GraphClient;

/// MERGE a LIKES edge from the user to every post with this title.
pub async fn like_post(client: &GraphClient, user: &str, title: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (u:User {name: $user}), (p:Post {title: $post})
         MERGE (u)-[:LIKES]->(p)"
            .to_string(),
    )
    .param("user", user)
    .param("post", title);

    client.execute(query).await
}

/// Delete the LIKES edge if present.
pub async fn unlike_post(client: &GraphClient, user: &str, title: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (u:User {name: $user})-[l:LIKES]->(p:Post {title: $post})
         DELETE l"
            .to_string(),
    )
    .param("user", user)
    .param("post", title);

    client.execute(query).await
}
