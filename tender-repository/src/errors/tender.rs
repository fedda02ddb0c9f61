//! Error types for the tender repository.
//! Defines specific errors that can occur during database operations related to tenders.
use thiserror::Error;

/// Represents errors that can occur within the tender repository.
///
/// This enum consolidates error conditions specific to database interactions,
/// such as SQLx errors during the duplicate check, insert, or export queries.
/// A rejected duplicate submission is a business outcome, not an error, and is
/// reported through `SubmitOutcome` instead.
#[derive(Debug, Error)]
pub enum TenderRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
