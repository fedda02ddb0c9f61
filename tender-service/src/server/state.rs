// App state for Axum server
use std::path::PathBuf;
use std::sync::Arc;
use tender_repository::TenderRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TenderRepository>,
    pub upload_dir: PathBuf,
}
