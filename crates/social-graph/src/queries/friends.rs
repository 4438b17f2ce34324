//! FRIEND relationship statements.
//!
//! FRIEND is directed: `(a)-[:FRIEND]->(b)` says nothing about `b -> a`.

use anyhow::Result;
use neo4rs::Query;

use crate::GraphClient;

/// MERGE a FRIEND edge between two existing users.
///
/// Matches nothing, and so does nothing, when either user is missing.
pub async fn add_friend(client: &GraphClient, user: &str, friend: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (a:User {name: $user}), (b:User {name: $friend})
         MERGE (a)-[:FRIEND]->(b)"
            .to_string(),
    )
    .param("user", user)
    .param("friend", friend);

    client.execute(query).await
}

/// Whether `user -> friend` exists.
pub async fn friendship_exists(client: &GraphClient, user: &str, friend: &str) -> Result<bool> {
    let query = Query::new(
        "MATCH (a:User {name: $user})-[r:FRIEND]->(b:User {name: $friend})
         RETURN r LIMIT 1"
            .to_string(),
    )
    .param("user", user)
    .param("friend", friend);

    let rows = client.query(query).await?;
    Ok(!rows.is_empty())
}

pub async fn delete_friendship(client: &GraphClient, user: &str, friend: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (a:User {name: $user})-[r:FRIEND]->(b:User {name: $friend})
         DELETE r"
            .to_string(),
    )
    .param("user", user)
    .param("friend", friend);

    client.execute(query).await
}
