//! # Social Graph
//!
//! Neo4j storage for the social network API.
//!
//! Users, posts and tags are nodes; FRIEND, POSTED, LIKES and HAS_TAG are
//! relationships. Every operation is one parameterised Cypher statement,
//! exposed through the [`SocialStore`] trait so the API can also run over the
//! in-memory [`MemoryStore`].

pub mod client;
pub mod memory;
pub mod models;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig};
pub use memory::MemoryStore;
pub use models::{GraphCounts, PostSummary, TrendingHashtag, UNKNOWN_AUTHOR};
pub use store::SocialStore;
