// Library exports for tender-service
pub mod config;
pub mod models;
pub mod server;
pub mod storage;
