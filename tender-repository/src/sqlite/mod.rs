//! SQLite backend for the tender repository.
mod tender_repository;

pub use tender_repository::SqliteTenderRepository;
