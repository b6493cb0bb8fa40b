//! # neighborly-entity
//!
//! Domain entity models for the Neighborly community-assistance backend.
//! Every struct in this crate represents a database table row or a domain
//! value object. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`; flat database entities additionally derive
//! `sqlx::FromRow`.

pub mod message;
pub mod notification;
pub mod request;
pub mod user;
