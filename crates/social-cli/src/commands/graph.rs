//! Knowledge Graph CLI commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use social_graph::SocialStore;

use super::Neo4jArgs;

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Show node and relationship counts
    Status,

    /// Check that Neo4j is reachable
    Ping,
}

pub async fn execute(cmd: GraphCommands, neo4j: &Neo4jArgs) -> Result<()> {
    match cmd {
        GraphCommands::Status => cmd_status(neo4j).await,
        GraphCommands::Ping => cmd_ping(neo4j).await,
    }
}

/// Show graph statistics.
async fn cmd_status(neo4j: &Neo4jArgs) -> Result<()> {
    let client = neo4j.connect().await?;
    let counts = client.counts().await?;

    println!("{}", "Knowledge Graph Status".bold());
    println!("{}", "─".repeat(40));
    println!("  {}  {}", "Server:".dimmed(), neo4j.neo4j_uri);
    println!("  {}  {}", "Nodes:".dimmed(), counts.nodes.to_string().cyan());
    println!(
        "  {}  {}",
        "Relationships:".dimmed(),
        counts.relationships.to_string().cyan()
    );

    Ok(())
}

async fn cmd_ping(neo4j: &Neo4jArgs) -> Result<()> {
    match neo4j.connect().await {
        Ok(_) => {
            println!("{} Neo4j at {} is reachable", "✓".green(), neo4j.neo4j_uri);
            Ok(())
        }
        Err(e) => {
            println!("{} Neo4j at {} is not reachable", "✗".red(), neo4j.neo4j_uri);
            Err(e)
        }
    }
}
