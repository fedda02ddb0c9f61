// Storage module - database initialization
pub mod initializer;

pub use initializer::initialize_repository;
