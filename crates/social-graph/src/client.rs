//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;

use crate::models::GraphCounts;

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
            database: "neo4j".to_string(),
        }
    }
}

impl GraphConfig {
    /// Build a config from `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD`
    /// and `NEO4J_DATABASE`, falling back to the defaults per field.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str, fallback: String| std::env::var(key).unwrap_or(fallback);

        Self {
            uri: var("NEO4J_URI", defaults.uri),
            user: var("NEO4J_USER", defaults.user),
            password: var("NEO4J_PASSWORD", defaults.password),
            database: var("NEO4J_DATABASE", defaults.database),
        }
    }
}

/// Client for the social graph stored in Neo4j.
///
/// Each call borrows a connection from the driver's pool and hands it back
/// when the call returns, whether it succeeded or not.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// `Graph::connect` only builds the pool, so a `RETURN 1` ping forces a real
    /// bolt handshake. An unreachable server then fails here rather than on the
    /// first request.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(8)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        tracing::debug!(uri = %config.uri, database = %config.database, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Create a new GraphClient from the `NEO4J_*` environment variables.
    pub async fn connect_from_env() -> Result<Self> {
        Self::connect(&GraphConfig::from_env()).await
    }

    /// Execute a Cypher statement that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph
            .run(query)
            .await
            .context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await.context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Failed to read Neo4j row")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// First row of a query, if any.
    pub async fn query_first(&self, query: Query) -> Result<Option<neo4rs::Row>> {
        Ok(self.query(query).await?.into_iter().next())
    }

    /// Node and relationship totals in a single round trip.
    ///
    /// Each relationship is counted once, from its start node.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let query = Query::new(
            "MATCH (n)
             OPTIONAL MATCH (n)-[r]->()
             RETURN count(DISTINCT n) AS nodes, count(r) AS relationships"
                .to_string(),
        );

        let Some(row) = self.query_first(query).await? else {
            return Ok(GraphCounts::default());
        };
        let nodes: i64 = row
            .get("nodes")
            .map_err(|e| anyhow::anyhow!("Failed to read node count: {:?}", e))?;
        let relationships: i64 = row
            .get("relationships")
            .map_err(|e| anyhow::anyhow!("Failed to read relationship count: {:?}", e))?;

        Ok(GraphCounts {
            nodes: nodes as usize,
            relationships: relationships as usize,
        })
    }
}
