//! HTTP handlers, organized by domain.

pub mod auth;
pub mod health;
pub mod message;
pub mod notification;
pub mod profile;
pub mod request;
pub mod stats;
pub mod ws;
