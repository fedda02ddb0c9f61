//! # Tender Repository
//! This crate provides traits and implementations for interacting with the
//! tender notice data store. It includes definitions for errors, interfaces,
//! the tender record types, and a concrete implementation for SQLite.
pub mod errors;
pub mod interfaces;
pub mod sqlite;
pub mod types;

pub use errors::TenderRepositoryError;
pub use interfaces::TenderRepository;
pub use sqlite::SqliteTenderRepository;
pub use types::{SubmitOutcome, TenderIdentity, TenderRecord};
