//! Route handlers.

pub mod friends;
pub mod hashtags;
pub mod likes;
pub mod posts;
pub mod users;

use serde::Serialize;

/// `{"success": true}` body shared by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
