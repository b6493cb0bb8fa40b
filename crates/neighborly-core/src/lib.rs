//! # neighborly-core
//!
//! Core crate for the Neighborly community-assistance backend. Contains
//! configuration schemas, typed identifiers, domain events, pagination and
//! filter types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Neighborly crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
