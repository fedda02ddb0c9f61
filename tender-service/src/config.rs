// Configuration constants and environment helpers
use axum::http::Method;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

// Server configuration
pub const SERVER_HOST: [u8; 4] = [0, 0, 0, 0];
pub const SERVER_PORT: u16 = 3000;

/// Multipart part name under which the single document upload is accepted.
pub const UPLOAD_FIELD: &str = "docsUpload";

/// Directory the static HTML form is served from.
pub const PUBLIC_DIR: &str = "public";

/// Get the database URL from the environment, defaulting to a local SQLite
/// file created on first run.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/tenders.db?mode=rwc".to_string())
}

/// Get the upload directory from the environment, defaulting to `uploads/`.
pub fn get_upload_dir() -> PathBuf {
    std::env::var("UPLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("uploads"))
}

/// Create a permissive CORS layer: the intake form may be hosted separately
/// from this service during development.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
