//! User profile reads and updates.

pub mod service;

pub use service::ProfileService;
