//! Interfaces for the tender repository.
//! Defines the trait that storage backends implement.
mod tenders;

pub use tenders::TenderRepository;
