//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use social_graph::{GraphClient, GraphConfig};
use std::time::Duration;

pub mod graph;
pub mod serve;

/// How long to wait for Neo4j to answer the connection ping.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Social network REST API over a Neo4j graph
#[derive(Parser)]
#[command(name = "social")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub neo4j: Neo4jArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server
    Serve(serve::ServeArgs),

    /// Knowledge Graph commands
    #[command(subcommand)]
    Graph(graph::GraphCommands),
}

/// Neo4j connection settings.
#[derive(Args, Debug, Clone)]
pub struct Neo4jArgs {
    /// Bolt URI of the Neo4j server
    #[arg(long, global = true, env = "NEO4J_URI", default_value = "bolt://localhost:7687")]
    pub neo4j_uri: String,

    /// Neo4j user name
    #[arg(long, global = true, env = "NEO4J_USER", default_value = "neo4j")]
    pub neo4j_user: String,

    /// Neo4j password
    #[arg(long, global = true, env = "NEO4J_PASSWORD", default_value = "neo4j", hide_env_values = true)]
    pub neo4j_password: String,

    /// Neo4j database name
    #[arg(long, global = true, env = "NEO4J_DATABASE", default_value = "neo4j")]
    pub neo4j_database: String,
}

impl Neo4jArgs {
    pub fn config(&self) -> GraphConfig {
        GraphConfig {
            uri: self.neo4j_uri.clone(),
            user: self.neo4j_user.clone(),
            password: self.neo4j_password.clone(),
            database: self.neo4j_database.clone(),
        }
    }

    /// Connect and ping, giving up after [`CONNECT_TIMEOUT`].
    pub async fn connect(&self) -> Result<GraphClient> {
        let config = self.config();
        tokio::time::timeout(CONNECT_TIMEOUT, GraphClient::connect(&config))
            .await
            .with_context(|| format!("Timed out connecting to Neo4j at {}", config.uri))?
            .with_context(|| format!("Could not connect to Neo4j at {}", config.uri))
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.neo4j).await,
            Commands::Graph(cmd) => graph::execute(cmd, &self.neo4j).await,
        }
    }
}
