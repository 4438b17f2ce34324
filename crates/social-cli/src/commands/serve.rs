//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use social_graph::{MemoryStore, SocialStore};
use std::path::PathBuf;
use std::sync::Arc;

use super::Neo4jArgs;

/// Log file used by `--log` when `--log-file` is not given.
pub const DEFAULT_LOG_FILE: &str = "logs/social-serve.log";

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "4000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Keep the graph in process memory instead of Neo4j
    #[arg(long)]
    pub in_memory: bool,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies nothing without --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, neo4j: &Neo4jArgs) -> Result<()> {
    let (store, backend): (Arc<dyn SocialStore>, String) = if args.in_memory {
        tracing::warn!("Using in-memory graph; data is lost on exit");
        (Arc::new(MemoryStore::new()), "in-memory".to_string())
    } else {
        let client = neo4j.connect().await?;
        (Arc::new(client), neo4j.neo4j_uri.clone())
    };

    println!();
    println!("  {} {}", "Social".cyan().bold(), "API Server".bold());
    println!();
    println!("  {}      http://{}:{}", "API".green(), args.host, args.port);
    println!("  {}    {}", "Graph".green(), backend);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    social_web::run_server(store, &args.host, args.port).await
}
