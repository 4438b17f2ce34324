//! Application state.

use social_graph::SocialStore;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SocialStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SocialStore>) -> Self {
        Self { store }
    }
}
