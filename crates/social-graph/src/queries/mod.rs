//! Parameterised Cypher statements, one module per entity family.

pub mod friends;
pub mod hashtags;
pub mod likes;
pub mod posts;
pub mod users;
