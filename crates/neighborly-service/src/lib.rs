//! # neighborly-service
//!
//! Business logic for Neighborly. Services own authorization and the
//! request lifecycle state machine; they orchestrate the storage traits
//! from `neighborly-database`, publish domain events to the realtime hub,
//! and fan out notifications.

pub mod account;
pub mod context;
pub mod lifecycle;
pub mod message;
pub mod notification;
pub mod profile;
pub mod stats;

pub use context::RequestContext;
