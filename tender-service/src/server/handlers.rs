// HTTP request handlers
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::path::Path;
use tender_repository::{SubmitOutcome, TenderRecord, TenderRepository};
use tracing::{debug, error, info};

use crate::config::UPLOAD_FIELD;
use crate::models::{SubmitResponse, apply_text_field, upload_filename};
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Tender intake server is running")
}

/// Submission endpoint - decodes the multipart form, stores the uploaded
/// document if any, and runs the duplicate-checked insert.
pub async fn submit_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let record = match decode_submission(multipart, &state.upload_dir).await {
        Ok(record) => record,
        Err(e) => {
            error!("Failed to read submission: {:?}", e);
            return Json(SubmitResponse::insert_failed());
        }
    };

    Json(process_submission(state.repository.as_ref(), &record).await)
}

/// Export endpoint - returns every stored record as a JSON array.
pub async fn download_handler(State(state): State<AppState>) -> Response {
    match state.repository.list_all().await {
        Ok(records) => {
            info!("Exporting {} tender records", records.len());
            Json(records).into_response()
        }
        Err(e) => {
            error!("Failed to fetch tender records: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "message": "Error occurred while fetching data."
                })),
            )
                .into_response()
        }
    }
}

/// Decodes a multipart submission into a `TenderRecord`.
///
/// Text parts are mapped by name onto the record; unknown names are ignored.
/// The single file part (`docsUpload`) is written to the upload directory
/// under a generated `<timestamp>-<fieldname>` name before the duplicate
/// check runs, so a rejected duplicate leaves the file behind. A file part
/// without a filename counts as no upload.
async fn decode_submission(
    mut multipart: Multipart,
    upload_dir: &Path,
) -> anyhow::Result<TenderRecord> {
    let mut record = TenderRecord::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == UPLOAD_FIELD {
            if field.file_name().map_or(true, str::is_empty) {
                continue;
            }
            let bytes = field.bytes().await?;
            let filename = upload_filename(UPLOAD_FIELD, Utc::now().timestamp_millis());
            tokio::fs::create_dir_all(upload_dir).await?;
            tokio::fs::write(upload_dir.join(&filename), &bytes).await?;
            info!("Stored uploaded document as {}", filename);
            record.docs_upload = Some(filename);
        } else {
            let value = field.text().await?;
            if !apply_text_field(&mut record, &name, value) {
                debug!("Ignoring unknown form field: {}", name);
            }
        }
    }

    Ok(record)
}

/// Runs the duplicate-checked insert and maps the outcome to the response
/// body. Storage errors are logged and collapsed into the generic failure
/// message; they are never surfaced to the caller in detail.
async fn process_submission(
    repository: &dyn TenderRepository,
    record: &TenderRecord,
) -> SubmitResponse {
    match repository.submit(record).await {
        Ok(SubmitOutcome::Inserted { id }) => {
            info!("Inserted tender record with id {}", id);
            SubmitResponse::inserted(id)
        }
        Ok(SubmitOutcome::Duplicate) => {
            info!("Duplicate record found, submission rejected");
            SubmitResponse::duplicate()
        }
        Err(e) => {
            error!("Failed to insert tender record: {:?}", e);
            SubmitResponse::insert_failed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tender_repository::{TenderIdentity, TenderRepositoryError};
    use tokio::sync::Mutex;

    /// Mock repository for testing
    struct MockRepository {
        records: Arc<Mutex<Vec<TenderRecord>>>,
        should_fail: bool,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                records: Arc::new(Mutex::new(Vec::new())),
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Arc::new(Mutex::new(Vec::new())),
                should_fail: true,
            }
        }

        fn error() -> TenderRepositoryError {
            TenderRepositoryError::DatabaseError(sqlx::Error::PoolClosed)
        }
    }

    #[async_trait]
    impl TenderRepository for MockRepository {
        async fn ensure_schema(&self) -> Result<(), TenderRepositoryError> {
            Ok(())
        }

        async fn has_duplicate(
            &self,
            identity: &TenderIdentity<'_>,
        ) -> Result<bool, TenderRepositoryError> {
            if self.should_fail {
                return Err(Self::error());
            }
            let records = self.records.lock().await;
            Ok(records.iter().any(|r| r.identity() == *identity))
        }

        async fn submit(
            &self,
            record: &TenderRecord,
        ) -> Result<SubmitOutcome, TenderRepositoryError> {
            if self.should_fail {
                return Err(Self::error());
            }
            let mut records = self.records.lock().await;
            if records.iter().any(|r| r.identity() == record.identity()) {
                return Ok(SubmitOutcome::Duplicate);
            }
            let id = records.len() as i64 + 1;
            let mut stored = record.clone();
            stored.id = Some(id);
            records.push(stored);
            Ok(SubmitOutcome::Inserted { id })
        }

        async fn list_all(&self) -> Result<Vec<TenderRecord>, TenderRepositoryError> {
            if self.should_fail {
                return Err(Self::error());
            }
            Ok(self.records.lock().await.clone())
        }
    }

    fn make_record(tender_number: &str) -> TenderRecord {
        TenderRecord {
            notice_type: Some("Invitation to Tender".to_string()),
            tender_number: Some(tender_number.to_string()),
            subject_english: Some("Office supplies".to_string()),
            ..TenderRecord::default()
        }
    }

    fn make_state(repository: MockRepository) -> AppState {
        AppState {
            repository: Arc::new(repository),
            upload_dir: PathBuf::from("uploads"),
        }
    }

    #[tokio::test]
    async fn successful_submission_returns_assigned_id() {
        let repository = MockRepository::new();
        let record = make_record("TN-100");

        let response = process_submission(&repository, &record).await;

        assert_eq!(response, SubmitResponse::inserted(1));
        assert_eq!(repository.records.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_submission_is_rejected_without_insert() {
        let repository = MockRepository::new();
        let record = make_record("TN-101");

        let first = process_submission(&repository, &record).await;
        assert!(first.success);

        // Same identity, different remaining field.
        let mut resubmission = record.clone();
        resubmission.buyer_name = Some("Another buyer".to_string());
        let second = process_submission(&repository, &resubmission).await;

        assert_eq!(second, SubmitResponse::duplicate());
        assert_eq!(second.id, None);
        assert_eq!(repository.records.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn storage_failure_yields_generic_message_and_no_id() {
        let repository = MockRepository::failing();
        let record = make_record("TN-102");

        let response = process_submission(&repository, &record).await;

        assert_eq!(response, SubmitResponse::insert_failed());
        assert_eq!(response.id, None);
    }

    #[tokio::test]
    async fn download_returns_stored_rows_as_json_array() {
        let repository = MockRepository::new();
        process_submission(&repository, &make_record("TN-103")).await;
        process_submission(&repository, &make_record("TN-104")).await;
        let state = make_state(repository);

        let response = download_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["tenderNumber"], "TN-103");
        assert_eq!(rows[1]["id"], 2);
        // Absent fields export as explicit nulls.
        assert!(rows[0]["docsUpload"].is_null());
    }

    #[tokio::test]
    async fn download_failure_returns_internal_server_error() {
        let state = make_state(MockRepository::failing());

        let response = download_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["success"], false);
        assert_eq!(error["message"], "Error occurred while fetching data.");
    }
}
