//! # neighborly-database
//!
//! Persistence for Neighborly. Storage is abstracted behind the traits in
//! [`store`]; two backends implement them: PostgreSQL via sqlx
//! ([`repositories`]) and an in-process memory store ([`memory`]) used by
//! tests and local development. [`backend::Store`] bundles the trait
//! objects and selects a backend from configuration.

pub mod backend;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use backend::Store;
pub use connection::DatabasePool;
