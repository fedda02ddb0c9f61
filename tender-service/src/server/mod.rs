// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing::info;

use self::state::AppState;
use crate::config::{PUBLIC_DIR, create_cors_layer};

/// Create the Axum application router with all routes and middleware.
///
/// The static form under `public/` is served from the fallback, so `GET /`
/// returns `index.html` without a dedicated route.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/submit", post(handlers::submit_handler))
        .route("/download", get(handlers::download_handler))
        .route("/health", get(handlers::health_check))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Submit endpoint: http://{}/submit", addr);
    info!("- Download endpoint: http://{}/download", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
