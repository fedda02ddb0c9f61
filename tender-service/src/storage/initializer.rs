// Database initialization
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tender_repository::{SqliteTenderRepository, TenderRepository};
use tracing::info;

use crate::config::get_database_url;

/// Open the SQLite pool and ensure the tender table exists.
///
/// The default database lives under `data/`, so the parent directory is
/// created up front; `mode=rwc` in the URL then lets SQLite create the file
/// itself.
pub async fn initialize_repository() -> Result<Arc<dyn TenderRepository>> {
    let database_url = get_database_url();

    if let Some(rest) = database_url.strip_prefix("sqlite://") {
        let path = rest.split('?').next().unwrap_or(rest);
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("Failed to create database directory")?;
            }
        }
    }

    let pool = sqlx::SqlitePool::connect(&database_url)
        .await
        .context("Failed to open SQLite database")?;

    let repository = SqliteTenderRepository::new(pool)
        .await
        .context("Failed to initialize tender repository")?;

    repository
        .ensure_schema()
        .await
        .context("Failed to ensure tender table")?;

    info!("Tender repository initialized successfully");
    Ok(Arc::new(repository))
}
