//! This module defines the `TenderRepository` trait, which provides an
//! interface for interacting with the underlying data store for tender
//! notices. It abstracts schema setup, duplicate detection, insertion, and
//! bulk export.
use crate::errors::TenderRepositoryError;
use crate::types::{SubmitOutcome, TenderIdentity, TenderRecord};

/// A trait that defines the interface for interacting with the tender data
/// repository.
///
/// Implementors provide the idempotent schema initializer, the duplicate
/// check over the identity-field subset, the submit operation (duplicate
/// check plus conditional insert), and the full-table export.
#[async_trait::async_trait]
pub trait TenderRepository: Send + Sync {
    /// Ensures the tender table exists.
    ///
    /// Idempotent: succeeds whether or not the table is already present.
    /// Called once at startup before any request is served.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `TenderRepositoryError` if schema
    /// creation fails.
    async fn ensure_schema(&self) -> Result<(), TenderRepositoryError>;

    /// Checks whether a record with the given identity fields already exists.
    ///
    /// All eight fields participate in the match; an absent field matches
    /// rows where the corresponding column is NULL.
    ///
    /// # Arguments
    ///
    /// * `identity` - The identity-field subset extracted from a submission.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if at least one matching row exists, `Ok(false)` otherwise,
    /// or a `TenderRepositoryError` if the query fails.
    async fn has_duplicate(
        &self,
        identity: &TenderIdentity<'_>,
    ) -> Result<bool, TenderRepositoryError>;

    /// Submits a tender record: runs the duplicate check and, if no
    /// equivalent record exists, inserts a new row.
    ///
    /// Both steps run under a single transaction so that two concurrent
    /// submissions with identical identity fields cannot both insert.
    ///
    /// # Arguments
    ///
    /// * `record` - The full field set of the incoming submission.
    ///
    /// # Returns
    ///
    /// `Ok(SubmitOutcome::Inserted { id })` with the newly assigned row id,
    /// `Ok(SubmitOutcome::Duplicate)` when an equivalent record exists, or a
    /// `TenderRepositoryError` if the check or insert fails.
    async fn submit(&self, record: &TenderRecord) -> Result<SubmitOutcome, TenderRepositoryError>;

    /// Returns every stored tender record.
    ///
    /// Order is the storage default; no pagination.
    ///
    /// # Returns
    ///
    /// `Ok(Vec<TenderRecord>)` with all rows (empty if none), or a
    /// `TenderRepositoryError` if the query fails.
    async fn list_all(&self) -> Result<Vec<TenderRecord>, TenderRepositoryError>;
}
