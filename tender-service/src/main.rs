use anyhow::Context;
use std::net::SocketAddr;
use tender_service::{
    config::{SERVER_HOST, SERVER_PORT, get_upload_dir},
    server::{self, state::AppState},
    storage,
};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize environment and logging
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("Starting tender intake server...");

    if let Err(e) = run().await {
        eprintln!("Server error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let repository = storage::initialize_repository().await?;

    let upload_dir = get_upload_dir();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .context("Failed to create upload directory")?;

    let state = AppState {
        repository,
        upload_dir,
    };

    let app = server::create_app(state);
    let addr = SocketAddr::from((SERVER_HOST, SERVER_PORT));
    server::run_server(app, addr).await
}
