//! User management.

use social_graph::SocialStore;
use tracing::{debug, info};

use crate::error::{SocialError, SocialResult};

/// Message returned when a user name is blank.
pub const NAME_REQUIRED: &str = "User name is required";

/// Trim a user name and reject it when nothing is left.
fn required_name(name: Option<&str>) -> SocialResult<&str> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(SocialError::validation(NAME_REQUIRED)),
    }
}

/// List all user names.
pub async fn list_users(store: &dyn SocialStore) -> SocialResult<Vec<String>> {
    let users = store.list_users().await?;
    debug!(count = users.len(), "Listed users");
    Ok(users)
}

/// Create a user, or match the existing one with the same trimmed name.
pub async fn create_user(store: &dyn SocialStore, name: Option<&str>) -> SocialResult<String> {
    let name = required_name(name)?;
    let stored = store.merge_user(name).await?;
    info!(user = %stored, "User merged");
    Ok(stored)
}

/// Delete a user and all of its relationships. Unknown names are a no-op.
pub async fn delete_user(store: &dyn SocialStore, name: Option<&str>) -> SocialResult<()> {
    let name = required_name(name)?;
    store.delete_user(name).await?;
    info!(user = %name, "User deleted");
    Ok(())
}
