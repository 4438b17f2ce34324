//! Social Web Server
//!
//! Axum-based REST API over the social graph.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use social_graph::SocialStore;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Users
        .route("/users", get(routes::users::list_users).post(routes::users::create_user))
        .route("/delete-user", post(routes::users::delete_user))
        // Friendships
        .route("/add-friend", post(routes::friends::add_friend))
        .route("/remove-friend", post(routes::friends::remove_friend))
        // Posts
        .route("/posts", get(routes::posts::list_posts).post(routes::posts::create_post))
        .route("/delete-post", post(routes::posts::delete_post))
        // Likes
        .route("/like", post(routes::likes::like_post))
        .route("/unlike", post(routes::likes::unlike_post))
        // Hashtags
        .route("/hashtags", get(routes::hashtags::trending))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(store: Arc<dyn SocialStore>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}
