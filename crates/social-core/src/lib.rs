//! Social Core Library
//!
//! The request-shaping layer between the HTTP handlers and the graph store:
//! trimming and validation, hashtag parsing, and the multi-statement
//! sequences behind post creation and friendship removal.

pub mod error;
pub mod friends;
pub mod hashtags;
pub mod likes;
pub mod posts;
pub mod users;

pub use error::{SocialError, SocialResult};
