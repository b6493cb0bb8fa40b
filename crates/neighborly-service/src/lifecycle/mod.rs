//! Request lifecycle: creation, claim exclusivity, completion protocol,
//! and rating.

pub mod distance;
pub mod service;
pub mod validate;

pub use service::LifecycleService;
