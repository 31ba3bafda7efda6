//! PostgreSQL source-store adapter

pub mod client;
pub mod models;
pub mod repository;

pub use client::PgClient;
pub use repository::PgOrderStore;
