//! Notification creation and delivery.

pub mod service;

pub use service::NotificationService;
