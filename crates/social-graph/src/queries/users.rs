//! User node statements.

use anyhow::{Context, Result};
use neo4rs::Query;

use crate::GraphClient;

/// List the names of every User node.
pub async fn list_users(client: &GraphClient) -> Result<Vec<String>> {
    let query = Query::new("MATCH (u:User) RETURN u.name AS name".to_string());

    let rows = client.query(query).await?;
    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        let name: String = row
            .get("name")
            .map_err(|e| anyhow::anyhow!("Failed to read user name: {:?}", e))?;
        names.push(name);
    }
    Ok(names)
}

/// Create the User if absent and return the stored name.
pub async fn merge_user(client: &GraphClient, name: &str) -> Result<String> {
    let query = Query::new("MERGE (u:User {name: $name}) RETURN u.name AS name".to_string())
        .param("name", name);

    let row = client
        .query_first(query)
        .await?
        .context("MERGE on User returned no row")?;
    row.get("name")
        .map_err(|e| anyhow::anyhow!("Failed to read merged user name: {:?}", e))
}

/// Remove a User together with all of its relationships.
pub async fn delete_user(client: &GraphClient, name: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (u:User {name: $name})
         DETACH DELETE u"
            .to_string(),
    )
    .param("name", name);

    client.execute(query).await
}
