//! Error types for the tender repository.
//! Consolidates and re-exports error types related to tender storage operations.
mod tender;

pub use tender::TenderRepositoryError;
